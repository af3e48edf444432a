//! CLI integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// A sealbox command with cwd and HOME isolated to the temp dir.
fn sealbox(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sealbox").unwrap();
    cmd.current_dir(dir).env("HOME", dir).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_init_creates_membership_record() {
    let tmp = TempDir::new().unwrap();

    sealbox(tmp.path())
        .args(["init", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized project 'demo'"));

    assert!(tmp.path().join("sealbox.json").exists());
    let gitignore = fs::read_to_string(tmp.path().join(".gitignore")).unwrap();
    assert!(gitignore.contains(".env"));

    sealbox(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_full_push_pull_flow() {
    let tmp = TempDir::new().unwrap();

    sealbox(tmp.path()).args(["init", "demo"]).assert().success();

    sealbox(tmp.path())
        .arg("add-key")
        .arg(fixture("alice_ed25519.pub"))
        .assert()
        .success()
        .stdout(predicate::str::contains("authorized ssh-ed25519 key"));

    fs::write(
        tmp.path().join("push.env"),
        "DB_PASS=secret\n# infra\nAPI_URL=https://api.example.com\n",
    )
    .unwrap();

    sealbox(tmp.path())
        .args(["push", "--file", "push.env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("encrypted 2 secrets for 1 recipient"));

    assert!(tmp.path().join(".sealbox/secrets.age").exists());

    sealbox(tmp.path())
        .args(["pull", "--output", "out.env"])
        .arg("--identity")
        .arg(fixture("alice_ed25519"))
        .assert()
        .success()
        .stdout(predicate::str::contains("pulled 2 secrets"));

    let pulled = fs::read_to_string(tmp.path().join("out.env")).unwrap();
    assert_eq!(pulled, "API_URL=https://api.example.com\nDB_PASS=secret\n");
}

#[test]
fn test_pull_with_unauthorized_identity() {
    let tmp = TempDir::new().unwrap();

    sealbox(tmp.path()).args(["init", "demo"]).assert().success();
    sealbox(tmp.path())
        .arg("add-key")
        .arg(fixture("alice_ed25519.pub"))
        .assert()
        .success();

    fs::write(tmp.path().join(".env"), "K=v\n").unwrap();
    sealbox(tmp.path()).arg("push").assert().success();

    // The failure message never says whether the key was absent or the
    // data was damaged.
    sealbox(tmp.path())
        .args(["pull", "--output", "out.env"])
        .arg("--identity")
        .arg(fixture("mallory_ed25519"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "unable to decrypt: wrong identity or damaged data",
        ));
}

#[test]
fn test_add_key_rejects_duplicates_and_garbage() {
    let tmp = TempDir::new().unwrap();

    sealbox(tmp.path()).args(["init", "demo"]).assert().success();

    sealbox(tmp.path())
        .arg("add-key")
        .arg(fixture("alice_ed25519.pub"))
        .assert()
        .success();

    sealbox(tmp.path())
        .arg("add-key")
        .arg(fixture("alice_ed25519.pub"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("already present"));

    sealbox(tmp.path())
        .arg("add-key")
        .arg(fixture("erin_ecdsa.pub"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized public key"));
}

#[test]
fn test_remove_key_not_found() {
    let tmp = TempDir::new().unwrap();

    sealbox(tmp.path()).args(["init", "demo"]).assert().success();

    sealbox(tmp.path())
        .arg("remove-key")
        .arg(fixture("alice_ed25519.pub"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_status_requires_init() {
    let tmp = TempDir::new().unwrap();

    sealbox(tmp.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn test_push_reports_bad_env_line() {
    let tmp = TempDir::new().unwrap();

    sealbox(tmp.path()).args(["init", "demo"]).assert().success();
    sealbox(tmp.path())
        .arg("add-key")
        .arg(fixture("alice_ed25519.pub"))
        .assert()
        .success();

    fs::write(tmp.path().join(".env"), "OK=1\nBADLINE\n").unwrap();

    sealbox(tmp.path())
        .arg("push")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));

    assert!(!tmp.path().join(".sealbox/secrets.age").exists());
}

#[test]
fn test_hidden_encrypt_decrypt_roundtrip() {
    let tmp = TempDir::new().unwrap();

    fs::write(tmp.path().join("ca.pem"), "certificate material\n").unwrap();

    sealbox(tmp.path())
        .args(["encrypt", "ca.pem", "--recipient"])
        .arg(fixture("alice_ed25519.pub"))
        .assert()
        .success();

    assert!(tmp.path().join("ca.pem.age").exists());

    sealbox(tmp.path())
        .args(["decrypt", "ca.pem.age", "--output", "ca.out"])
        .arg("--identity")
        .arg(fixture("alice_ed25519"))
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(tmp.path().join("ca.out")).unwrap(),
        "certificate material\n"
    );
}

#[test]
fn test_login_then_pull_uses_recorded_identity() {
    let tmp = TempDir::new().unwrap();

    sealbox(tmp.path()).args(["init", "demo"]).assert().success();
    sealbox(tmp.path())
        .arg("add-key")
        .arg(fixture("alice_ed25519.pub"))
        .assert()
        .success();

    fs::write(tmp.path().join(".env"), "K=v\n").unwrap();
    sealbox(tmp.path()).arg("push").assert().success();

    sealbox(tmp.path())
        .args(["login", "--email", "alice@example.com", "--identity"])
        .arg(fixture("alice_ed25519"))
        .assert()
        .success();

    sealbox(tmp.path())
        .args(["pull", "--output", "out.env"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(tmp.path().join("out.env")).unwrap(),
        "K=v\n"
    );
}
