//! Generate command - mint a new SSH keypair.

use std::fs;

use crate::cli::output;
use crate::core::keygen::{Keygen, SshKeygen};
use crate::error::{ConfigError, Result};

/// Generate an ed25519 keypair under ~/.ssh via ssh-keygen.
pub fn execute(email: Option<String>, name: Option<String>) -> Result<()> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    let ssh_dir = home.join(".ssh");
    fs::create_dir_all(&ssh_dir)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&ssh_dir, fs::Permissions::from_mode(0o700))?;
    }

    let comment = email.unwrap_or_else(whoami::username);
    let key_path = ssh_dir.join(name.as_deref().unwrap_or("id_ed25519"));

    let pair = SshKeygen.generate(&key_path, &comment)?;

    output::success(&format!("generated {}", pair.private_key.display()));
    if let Ok(public) = fs::read_to_string(&pair.public_key) {
        println!("  {}", public.trim());
    }
    output::hint("authorize it with: sealbox add-key <path-to-.pub>");
    output::hint(&format!(
        "log in with: sealbox login --email {} --identity {}",
        comment,
        pair.private_key.display()
    ));

    Ok(())
}
