//! Login command - record email and identity file locally.

use std::path::PathBuf;

use tracing::info;

use crate::cli::output;
use crate::core::config::Login;
use crate::core::identity::PrivateIdentity;
use crate::core::keygen;
use crate::error::{ConfigError, Result};

/// Record the user's email and chosen identity file.
pub fn execute(email: &str, identity: Option<PathBuf>, me: bool) -> Result<()> {
    let identity_file = match (identity, me) {
        (Some(path), _) => path,
        (None, true) => discover_identity()?,
        (None, false) => {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "pass --identity <path> or --me",
            )
            .into());
        }
    };

    // Fail now, not at pull time, if the key is unusable.
    PrivateIdentity::load(&identity_file)?;

    let login = Login {
        email: email.to_string(),
        identity_file: identity_file.clone(),
    };
    login.save()?;

    info!("logged in as {}", email);
    output::success(&format!(
        "logged in as {} with {}",
        email,
        identity_file.display()
    ));

    Ok(())
}

/// Pick an identity from ~/.ssh, preferring id_ed25519.
fn discover_identity() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    let keys = keygen::find_public_keys(&home.join(".ssh"))?;

    let chosen = keys
        .iter()
        .find(|k| k.path.ends_with("id_ed25519.pub"))
        .or_else(|| keys.first())
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no keys found in ~/.ssh; run `sealbox generate` first",
            )
        })?;

    // Private key sits next to the .pub file.
    Ok(chosen.path.with_extension(""))
}
