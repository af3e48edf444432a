//! Init command - create the project membership record.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::config::Login;
use crate::core::constants::GITIGNORE_ENTRIES;
use crate::core::project::ProjectMembership;
use crate::core::recipient::PublicIdentity;
use crate::error::{ConfigError, Result};

/// Initialize sealbox in the current directory.
pub fn execute(name: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;

    if ProjectMembership::load(&cwd)?.is_some() {
        return Err(ConfigError::AlreadyInitialized.into());
    }

    let name = name.unwrap_or_else(|| {
        cwd.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "project".to_string())
    });

    info!("initializing project: {}", name);
    let mut membership = ProjectMembership::new(&name);

    // If logged in, authorize the user's own key right away.
    if let Some(key) = login_public_key()? {
        if PublicIdentity::parse(&key).is_ok() {
            membership.add_key(key.trim())?;
            output::success("added your public key to the project");
        } else {
            output::warn("your recorded public key did not parse, skipping it");
        }
    }

    membership.save(&cwd)?;
    ensure_gitignore(&cwd)?;

    output::success(&format!("initialized project '{}' (sealbox.json)", name));
    if membership.keys.is_empty() {
        output::hint("authorize a key with: sealbox add-key <key-or-.pub-path>");
    }
    output::hint("commit sealbox.json so teammates share the key list");

    Ok(())
}

/// The logged-in user's public key, read from `<identity_file>.pub`.
fn login_public_key() -> Result<Option<String>> {
    let Some(login) = Login::load()? else {
        return Ok(None);
    };

    let mut pub_path = login.identity_file.into_os_string();
    pub_path.push(".pub");
    Ok(fs::read_to_string(pub_path).ok())
}

/// Make sure decrypted .env files never get committed.
fn ensure_gitignore(dir: &Path) -> Result<()> {
    let path = dir.join(".gitignore");
    let existing = fs::read_to_string(&path).unwrap_or_default();

    let missing: Vec<&str> = GITIGNORE_ENTRIES
        .iter()
        .copied()
        .filter(|entry| !existing.lines().any(|line| line.trim() == *entry))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    let mut contents = existing;
    if !contents.is_empty() && !contents.ends_with('\n') {
        contents.push('\n');
    }
    contents.push_str("\n# sealbox\n");
    for entry in missing {
        contents.push_str(entry);
        contents.push('\n');
    }

    fs::write(&path, contents)?;
    Ok(())
}
