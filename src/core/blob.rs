//! The versioned plaintext secret container.
//!
//! A `SecretBlob` is what actually gets encrypted: the secret map plus
//! enough metadata (version, author, creation time) to tell who pushed it
//! and whether this build knows how to read it.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};

/// The only container version this build recognizes.
pub const BLOB_VERSION: &str = "v1";

/// Unencrypted secret container protected by the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretBlob {
    pub version: String,
    /// Whole seconds; sub-second precision is dropped on marshal.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub secrets: BTreeMap<String, String>,
}

/// Permissive mirror of the wire format, validated field by field so a
/// missing field reports its name instead of a serde position.
#[derive(Deserialize)]
struct RawBlob {
    version: Option<String>,
    created_at: Option<i64>,
    author: Option<String>,
    secrets: Option<BTreeMap<String, String>>,
}

impl SecretBlob {
    /// Create a fresh `v1` blob stamped with the current time.
    pub fn new(secrets: BTreeMap<String, String>, author: &str) -> Self {
        Self {
            version: BLOB_VERSION.to_string(),
            created_at: Utc::now(),
            author: author.to_string(),
            secrets,
        }
    }

    /// Serialize to canonical JSON bytes ready for encryption.
    pub fn marshal(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| FormatError::Malformed(e.to_string()).into())
    }

    /// Parse JSON bytes back into a blob.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::MissingField` if a required field is absent
    /// and `FormatError::UnknownVersion` if `version` is not recognized
    /// (the forward-compatibility gate).
    pub fn unmarshal(bytes: &[u8]) -> Result<Self> {
        let raw: RawBlob =
            serde_json::from_slice(bytes).map_err(|e| FormatError::Malformed(e.to_string()))?;

        let version = raw.version.ok_or(FormatError::MissingField("version"))?;
        let seconds = raw
            .created_at
            .ok_or(FormatError::MissingField("created_at"))?;
        let author = raw.author.ok_or(FormatError::MissingField("author"))?;
        let secrets = raw.secrets.ok_or(FormatError::MissingField("secrets"))?;

        if version != BLOB_VERSION {
            return Err(FormatError::UnknownVersion(version).into());
        }

        let created_at = Utc
            .timestamp_opt(seconds, 0)
            .single()
            .ok_or_else(|| FormatError::Malformed(format!("timestamp out of range: {}", seconds)))?;

        Ok(Self {
            version,
            created_at,
            author,
            secrets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SecretBlob {
        let mut secrets = BTreeMap::new();
        secrets.insert("DB_PASS".to_string(), "x".to_string());
        SecretBlob::new(secrets, "alice@example.com")
    }

    #[test]
    fn test_marshal_unmarshal_roundtrip() {
        let blob = sample();
        let bytes = blob.marshal().unwrap();
        let parsed = SecretBlob::unmarshal(&bytes).unwrap();

        assert_eq!(parsed.version, "v1");
        assert_eq!(parsed.author, blob.author);
        assert_eq!(parsed.secrets, blob.secrets);
        // Wire format carries whole seconds only.
        assert_eq!(parsed.created_at.timestamp(), blob.created_at.timestamp());
    }

    #[test]
    fn test_unmarshal_missing_field() {
        let bytes = br#"{"version":"v1","created_at":0,"secrets":{}}"#;
        let err = SecretBlob::unmarshal(bytes).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Format(FormatError::MissingField("author"))
        ));
    }

    #[test]
    fn test_unmarshal_unknown_version() {
        let mut blob = sample();
        blob.version = "v9".to_string();
        let bytes = blob.marshal().unwrap();

        let err = SecretBlob::unmarshal(&bytes).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Format(FormatError::UnknownVersion(v)) if v == "v9"
        ));
    }

    #[test]
    fn test_unmarshal_not_json() {
        let err = SecretBlob::unmarshal(b"not json").unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Format(FormatError::Malformed(_))
        ));
    }

    #[test]
    fn test_unmarshal_tolerates_added_fields() {
        let bytes = br#"{"version":"v1","created_at":1700000000,"author":"a","secrets":{},"note":"future"}"#;
        let blob = SecretBlob::unmarshal(bytes).unwrap();
        assert_eq!(blob.author, "a");
    }
}
