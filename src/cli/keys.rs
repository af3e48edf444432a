//! Key management commands - authorize and revoke public keys.
//!
//! Revoking only affects the next push: envelopes already on disk stay
//! decryptable by the keys they were pushed for until the data is
//! re-pushed.

use std::fs;

use crate::cli::output;
use crate::core::config::Login;
use crate::core::project::ProjectMembership;
use crate::core::recipient::PublicIdentity;
use crate::error::{ConfigError, Result};

/// Add a public key to the project.
pub fn add(key: Option<String>, me: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let mut membership = ProjectMembership::load(&cwd)?.ok_or(ConfigError::NotInitialized)?;

    let raw = match (key, me) {
        (Some(arg), _) => resolve_key_arg(&arg)?,
        (None, true) => own_public_key()?,
        (None, false) => {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "pass a key (or .pub path), or --me",
            )
            .into());
        }
    };

    // Validate at the edge; the membership list itself is exact strings.
    let parsed = PublicIdentity::parse(&raw)?;
    membership.add_key(raw.trim())?;
    membership.save(&cwd)?;

    output::success(&format!(
        "authorized {} key{} ({} total)",
        parsed.algorithm(),
        parsed
            .comment()
            .map(|c| format!(" for {}", c))
            .unwrap_or_default(),
        membership.keys.len()
    ));
    output::hint("run `sealbox push` to re-encrypt secrets for the new key list");

    Ok(())
}

/// Remove a public key from the project.
pub fn remove(key: &str) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let mut membership = ProjectMembership::load(&cwd)?.ok_or(ConfigError::NotInitialized)?;

    let raw = resolve_key_arg(key)?;
    membership.remove_key(raw.trim())?;
    membership.save(&cwd)?;

    output::success(&format!(
        "removed key ({} remaining)",
        membership.keys.len()
    ));
    output::warn("existing pushed data stays readable by the removed key");
    output::hint("run `sealbox push` to seal future data without it");

    Ok(())
}

/// Accept either a raw `ssh-...` line or a path to a .pub file.
pub(crate) fn resolve_key_arg(arg: &str) -> Result<String> {
    if arg.trim_start().starts_with("ssh-") {
        Ok(arg.trim().to_string())
    } else {
        Ok(fs::read_to_string(arg.trim())?.trim().to_string())
    }
}

/// The logged-in user's own public key (`<identity>.pub`).
fn own_public_key() -> Result<String> {
    let login = Login::load()?.ok_or(ConfigError::NotLoggedIn)?;

    let mut pub_path = login.identity_file.into_os_string();
    pub_path.push(".pub");
    Ok(fs::read_to_string(pub_path)?.trim().to_string())
}
