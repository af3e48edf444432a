//! Constants used throughout sealbox.
//!
//! Centralizes magic strings and file names.

/// Project membership record, kept at the project root (sealbox.json).
pub const MEMBERSHIP_FILE: &str = "sealbox.json";

/// Project-local data directory (.sealbox).
pub const PROJECT_DIR: &str = ".sealbox";

/// Encrypted envelope artifact inside the project data directory.
pub const ENVELOPE_FILE: &str = "secrets.age";

/// Environment variables file name (.env).
pub const ENV_FILE: &str = ".env";

/// Global config file relative to HOME (~/.sealbox/config.toml).
pub const GLOBAL_CONFIG_DIR: &str = ".sealbox";
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Gitignore entries to protect decrypted secrets.
pub const GITIGNORE_ENTRIES: &[&str] = &[".env", ".env.*", "!.env.example"];
