//! Global login configuration.
//!
//! Records who the current user is (email) and which private key file
//! identifies them, in `~/.sealbox/config.toml`. Purely local state; the
//! key file itself is never copied or persisted here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants::{GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILE};
use crate::error::{ConfigError, Result};

/// The persisted login record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Login {
    pub email: String,
    pub identity_file: PathBuf,
}

impl Login {
    /// Path to the global config file (`~/.sealbox/config.toml`).
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILE))
    }

    /// Load the login record, or `None` if the user never logged in.
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(&Self::path()?)
    }

    /// Persist the login record, creating `~/.sealbox` if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    fn load_from(path: &Path) -> Result<Option<Self>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let login: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        debug!(email = %login.email, "login config loaded");
        Ok(Some(login))
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, contents)?;

        debug!(path = %path.display(), "login config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".sealbox").join("config.toml");

        let login = Login {
            email: "alice@example.com".to_string(),
            identity_file: PathBuf::from("/home/alice/.ssh/id_ed25519"),
        };
        login.save_to(&path).unwrap();

        let loaded = Login::load_from(&path).unwrap().unwrap();
        assert_eq!(loaded.email, login.email);
        assert_eq!(loaded.identity_file, login.identity_file);
    }

    #[test]
    fn test_load_absent_is_none() {
        let tmp = TempDir::new().unwrap();
        assert!(Login::load_from(&tmp.path().join("config.toml"))
            .unwrap()
            .is_none());
    }
}
