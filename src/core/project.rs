//! Project membership.
//!
//! The ordered list of raw public-key strings authorized to decrypt the
//! next push, persisted as `sealbox.json` at the project root. Key entries
//! are exact strings: mutation never normalizes or reorders them, so the
//! record survives save/load byte for byte.

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::core::atomic::write_atomic;
use crate::core::constants::MEMBERSHIP_FILE;
use crate::core::recipient::PublicIdentity;
use crate::error::{FormatError, MembershipError, Result};

/// The authoritative key list for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMembership {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub keys: Vec<String>,
}

impl ProjectMembership {
    /// Create a new membership with a derived id and no keys.
    pub fn new(name: &str) -> Self {
        Self {
            id: derive_id(name),
            name: name.to_string(),
            keys: Vec::new(),
        }
    }

    /// Load the membership record from `dir`, or `None` if no record
    /// exists there yet.
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(MEMBERSHIP_FILE);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let membership: Self = serde_json::from_str(&contents)
            .map_err(|e| FormatError::Malformed(e.to_string()))?;

        debug!(
            project = %membership.name,
            keys = membership.keys.len(),
            "membership loaded"
        );
        Ok(Some(membership))
    }

    /// Persist the full record to `dir`, replacing any prior record
    /// atomically.
    pub fn save(&self, dir: &Path) -> Result<()> {
        debug!(project = %self.name, keys = self.keys.len(), "saving membership");

        let mut contents = serde_json::to_vec_pretty(self)
            .map_err(|e| FormatError::Malformed(e.to_string()))?;
        contents.push(b'\n');

        write_atomic(&dir.join(MEMBERSHIP_FILE), &contents)
    }

    /// Append a key, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns `MembershipError::Duplicate` if the exact string is already
    /// present.
    pub fn add_key(&mut self, key: &str) -> Result<()> {
        if self.keys.iter().any(|k| k == key) {
            return Err(MembershipError::Duplicate.into());
        }
        self.keys.push(key.to_string());
        Ok(())
    }

    /// Remove the single entry matching `key` exactly, preserving the
    /// relative order of the rest.
    ///
    /// # Errors
    ///
    /// Returns `MembershipError::NotFound` if no exact match exists.
    pub fn remove_key(&mut self, key: &str) -> Result<()> {
        match self.keys.iter().position(|k| k == key) {
            Some(idx) => {
                self.keys.remove(idx);
                Ok(())
            }
            None => Err(MembershipError::NotFound.into()),
        }
    }

    /// Parse every stored key into an encryption target, in list order.
    pub fn recipients(&self) -> Result<Vec<PublicIdentity>> {
        self.keys.iter().map(|k| PublicIdentity::parse(k)).collect()
    }
}

/// Short stable id from the project name and creation instant.
fn derive_id(name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(
        Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_default()
            .to_le_bytes(),
    );
    hasher
        .finalize()
        .iter()
        .take(6)
        .map(|b| format!("{:02x}", b))
        .collect()
}
