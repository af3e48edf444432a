//! Identity loading.
//!
//! Turns the bytes of an SSH private key file into a decryption identity.
//! Only unencrypted keys are usable: passphrase-protected containers are
//! rejected up front rather than prompting.

use std::fs;
use std::path::{Path, PathBuf};

use age::ssh;
use tracing::{debug, warn};

use crate::error::{ParseError, Result};

/// A private SSH key usable for unwrapping envelope stanzas.
pub struct PrivateIdentity {
    inner: ssh::Identity,
    path: Option<PathBuf>,
}

impl PrivateIdentity {
    /// Parse an identity from the bytes of a private key file.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnsupportedFormat` if the key is
    /// passphrase-protected, uses an unrecognized algorithm, or the
    /// container does not parse at all.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let inner = ssh::Identity::from_buffer(bytes, None)
            .map_err(|e| ParseError::UnsupportedFormat(e.to_string()))?;

        match &inner {
            ssh::Identity::Unencrypted(_) => Ok(Self { inner, path: None }),
            ssh::Identity::Encrypted(_) => Err(ParseError::UnsupportedFormat(
                "passphrase-protected keys are not supported".to_string(),
            )
            .into()),
            ssh::Identity::Unsupported(_) => Err(ParseError::UnsupportedFormat(
                "unrecognized key algorithm".to_string(),
            )
            .into()),
        }
    }

    /// Load an identity from a private key file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("loading identity from: {}", path.display());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Ok(metadata) = fs::metadata(path) {
                let mode = metadata.permissions().mode() & 0o777;
                if mode & 0o077 != 0 {
                    warn!(
                        "insecure key file permissions ({:o}) on {}. Run: chmod 600 {}",
                        mode,
                        path.display(),
                        path.display()
                    );
                }
            }
        }

        let bytes = fs::read(path)?;
        let mut identity = Self::from_bytes(&bytes)?;
        identity.path = Some(path.to_path_buf());

        debug!("identity loaded");
        Ok(identity)
    }

    /// The file this identity was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The underlying age identity (for decryption).
    pub(crate) fn as_age(&self) -> &ssh::Identity {
        &self.inner
    }
}

impl std::fmt::Debug for PrivateIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateIdentity")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &[u8] = include_bytes!("../../tests/fixtures/alice_ed25519");
    const CAROL_RSA: &[u8] = include_bytes!("../../tests/fixtures/carol_rsa");
    const LOCKED: &[u8] = include_bytes!("../../tests/fixtures/locked_ed25519");
    const ERIN_ECDSA: &[u8] = include_bytes!("../../tests/fixtures/erin_ecdsa");

    #[test]
    fn test_from_bytes_ed25519() {
        PrivateIdentity::from_bytes(ALICE).unwrap();
    }

    #[test]
    fn test_from_bytes_rsa() {
        PrivateIdentity::from_bytes(CAROL_RSA).unwrap();
    }

    #[test]
    fn test_passphrase_protected_rejected() {
        let err = PrivateIdentity::from_bytes(LOCKED).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Parse(ParseError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_unsupported_algorithm_rejected() {
        let err = PrivateIdentity::from_bytes(ERIN_ECDSA).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Parse(ParseError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(PrivateIdentity::from_bytes(b"definitely not a key").is_err());
    }

    #[test]
    fn test_load_records_path() {
        let path = std::path::Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/alice_ed25519"
        ));
        let identity = PrivateIdentity::load(path).unwrap();
        assert_eq!(identity.path(), Some(path));
    }
}
