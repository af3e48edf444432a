//! Keypair generation and discovery.
//!
//! Key generation is modeled as a capability so nothing in the core
//! depends on an external executable: the default implementation shells
//! out to `ssh-keygen`, and tests can substitute their own.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{KeygenError, Result};

/// Paths of a freshly generated keypair.
#[derive(Debug)]
pub struct GeneratedKeypair {
    pub private_key: PathBuf,
    pub public_key: PathBuf,
}

/// Something that can mint a new keypair on disk.
pub trait Keygen {
    fn generate(&self, path: &Path, comment: &str) -> Result<GeneratedKeypair>;
}

/// Keypair generation via the system `ssh-keygen` (ed25519, no passphrase).
pub struct SshKeygen;

impl Keygen for SshKeygen {
    fn generate(&self, path: &Path, comment: &str) -> Result<GeneratedKeypair> {
        if path.exists() {
            return Err(KeygenError::KeyExists(path.display().to_string()).into());
        }

        let binary = which::which("ssh-keygen").map_err(|_| KeygenError::MissingBinary)?;
        debug!(binary = %binary.display(), path = %path.display(), "generating keypair");

        let output = Command::new(binary)
            .args(["-q", "-t", "ed25519", "-N", "", "-C", comment, "-f"])
            .arg(path)
            .output()?;

        if !output.status.success() {
            return Err(KeygenError::Failed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(GeneratedKeypair {
            private_key: path.to_path_buf(),
            public_key: path.with_extension("pub"),
        })
    }
}

/// A public key file found on disk.
#[derive(Debug)]
pub struct FoundKey {
    pub path: PathBuf,
    pub contents: String,
}

/// List `*.pub` files in `ssh_dir` (usually `~/.ssh`), sorted by file name.
/// An absent directory is an empty result, not an error.
pub fn find_public_keys(ssh_dir: &Path) -> Result<Vec<FoundKey>> {
    let entries = match fs::read_dir(ssh_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut keys = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "pub") {
            if let Ok(contents) = fs::read_to_string(&path) {
                keys.push(FoundKey {
                    path,
                    contents: contents.trim().to_string(),
                });
            }
        }
    }

    keys.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(keys)
}
