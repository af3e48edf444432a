//! Identify command - show the user's public keys for easy copy-paste.

use crate::cli::output;
use crate::core::keygen;
use crate::error::{ConfigError, Result};

/// List public keys found in ~/.ssh.
pub fn execute() -> Result<()> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    let keys = keygen::find_public_keys(&home.join(".ssh"))?;

    if keys.is_empty() {
        output::warn("no SSH keys found in ~/.ssh");
        output::hint("generate one with: sealbox generate --email you@example.com");
        return Ok(());
    }

    output::header("Your public keys");
    for key in keys {
        let name = key
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        output::dim(&name);
        println!("  {}\n", key.contents);
    }
    output::hint("send one of these to your project owner to get access");

    Ok(())
}
