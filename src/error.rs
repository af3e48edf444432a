//! Error types.
//!
//! Every failure is typed: callers can match on the domain sub-enums, and
//! the CLI maps each kind to one actionable message.

use thiserror::Error;

/// Key material that could not be turned into a usable identity.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Public key with an unknown algorithm tag or undecodable material.
    #[error("unrecognized public key: {0}")]
    UnrecognizedFormat(String),

    /// Private key we cannot use (passphrase-protected or unknown algorithm).
    #[error("unsupported private key: {0}")]
    UnsupportedFormat(String),
}

/// Schema violations in the secret blob or env text.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("unknown blob version: {0}")]
    UnknownVersion(String),

    #[error("line {line}: expected NAME=VALUE")]
    InvalidLine { line: usize },

    #[error("malformed blob: {0}")]
    Malformed(String),
}

/// The caller is not allowed to perform the operation.
#[derive(Error, Debug)]
pub enum AuthorizationError {
    #[error("no recipients: the project key list is empty")]
    NoRecipients,

    /// No stanza in the envelope matches the supplied identity. The same
    /// error is returned whether a stanza is absent or present but
    /// mismatched, so the error carries no membership information.
    #[error("not authorized: this identity cannot unwrap the envelope")]
    NotAuthorized,
}

/// The envelope failed authentication.
#[derive(Error, Debug)]
pub enum DecryptionError {
    #[error("envelope corrupted: payload authentication failed")]
    Corrupted,
}

/// Misuse of the project key list.
#[derive(Error, Debug)]
pub enum MembershipError {
    #[error("key already present in project")]
    Duplicate,

    #[error("key not found in project")]
    NotFound,
}

/// Project or global configuration problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: run `sealbox init` first")]
    NotInitialized,

    #[error("already initialized: sealbox.json exists")]
    AlreadyInitialized,

    #[error("not logged in: run `sealbox login` first")]
    NotLoggedIn,

    #[error("no pushed secrets found: run `sealbox push` first")]
    NoSecrets,

    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Failures from the external keypair generator.
#[derive(Error, Debug)]
pub enum KeygenError {
    #[error("ssh-keygen not found on PATH")]
    MissingBinary,

    #[error("key already exists at {0}")]
    KeyExists(String),

    #[error("ssh-keygen exited with status {status}: {stderr}")]
    Failed { status: i32, stderr: String },
}

/// Top-level error for all sealbox operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    #[error(transparent)]
    Decryption(#[from] DecryptionError),

    #[error(transparent)]
    Membership(#[from] MembershipError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Keygen(#[from] KeygenError),

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
