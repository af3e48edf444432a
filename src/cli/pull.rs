//! Pull command - decrypt the stored envelope back to .env.

use std::fs;
use std::path::{Path, PathBuf};

use dialoguer::Confirm;

use crate::cli::output;
use crate::core::config::Login;
use crate::core::identity::PrivateIdentity;
use crate::core::{env, sync};
use crate::error::{ConfigError, Result};

/// Decrypt with the chosen identity and write the env file.
pub fn execute(output_path: &Path, identity: Option<PathBuf>, force: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;

    let identity_file = match identity {
        Some(path) => path,
        None => Login::load()?.ok_or(ConfigError::NotLoggedIn)?.identity_file,
    };
    let identity = PrivateIdentity::load(&identity_file)?;

    let blob = sync::pull(&cwd, &identity)?;

    if output_path.exists() && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!("overwrite {}?", output_path.display()))
            .default(false)
            .interact()
            .unwrap_or(false);
        if !overwrite {
            output::warn("pull aborted, existing file untouched");
            return Ok(());
        }
    }

    fs::write(output_path, env::format(&blob.secrets))?;

    output::success(&format!(
        "pulled {} secret{} to {}",
        blob.secrets.len(),
        if blob.secrets.len() == 1 { "" } else { "s" },
        output_path.display()
    ));
    output::dim(&format!(
        "pushed by {} at {}",
        blob.author,
        blob.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    Ok(())
}
