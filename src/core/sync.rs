//! Push and pull orchestration.
//!
//! A push seals the current secret map for the membership's key list as it
//! stands right now; the resulting envelope stays decryptable by exactly
//! that snapshot of keys. Later membership changes only affect the next
//! push, never artifacts already on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::atomic::write_atomic;
use crate::core::blob::SecretBlob;
use crate::core::constants::{ENVELOPE_FILE, PROJECT_DIR};
use crate::core::envelope;
use crate::core::identity::PrivateIdentity;
use crate::core::project::ProjectMembership;
use crate::error::{ConfigError, Result};

/// What a push produced.
#[derive(Debug)]
pub struct PushReport {
    pub secrets: usize,
    pub recipients: usize,
    pub envelope_path: PathBuf,
}

/// Path of the envelope artifact under `root`.
pub fn envelope_path(root: &Path) -> PathBuf {
    root.join(PROJECT_DIR).join(ENVELOPE_FILE)
}

/// Encrypt `secrets` for the project's current key list and persist the
/// envelope. Encryption happens fully in memory before anything touches
/// disk, and the write is atomic, so a failed push leaves no artifact.
///
/// # Errors
///
/// Returns `ConfigError::NotInitialized` if no membership record exists at
/// `root`, and `AuthorizationError::NoRecipients` if the key list is empty.
pub fn push(root: &Path, secrets: BTreeMap<String, String>, author: &str) -> Result<PushReport> {
    let membership = ProjectMembership::load(root)?.ok_or(ConfigError::NotInitialized)?;
    let recipients = membership.recipients()?;

    let blob = SecretBlob::new(secrets, author);
    let payload = blob.marshal()?;
    let envelope = envelope::encrypt(&payload, &recipients)?;

    let path = envelope_path(root);
    fs::create_dir_all(path.parent().unwrap_or(root))?;
    write_atomic(&path, &envelope)?;

    debug!(
        secrets = blob.secrets.len(),
        recipients = recipients.len(),
        path = %path.display(),
        "pushed"
    );

    Ok(PushReport {
        secrets: blob.secrets.len(),
        recipients: recipients.len(),
        envelope_path: path,
    })
}

/// Decrypt the stored envelope with `identity` and unwrap the blob.
///
/// # Errors
///
/// Returns `ConfigError::NoSecrets` if nothing has been pushed yet,
/// `AuthorizationError::NotAuthorized` if the identity is not among the
/// envelope's recipients, and `DecryptionError::Corrupted` for a tampered
/// artifact.
pub fn pull(root: &Path, identity: &PrivateIdentity) -> Result<SecretBlob> {
    let path = envelope_path(root);
    let envelope = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::NoSecrets.into())
        }
        Err(e) => return Err(e.into()),
    };

    let payload = envelope::decrypt(&envelope, identity)?;
    let blob = SecretBlob::unmarshal(&payload)?;

    debug!(
        secrets = blob.secrets.len(),
        author = %blob.author,
        "pulled"
    );
    Ok(blob)
}
