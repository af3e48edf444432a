//! Raw file encrypt/decrypt commands (hidden).
//!
//! Useful for sealing arbitrary files (certificates, kubeconfigs) with the
//! same envelope the push path uses.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::keys::resolve_key_arg;
use crate::cli::output;
use crate::core::config::Login;
use crate::core::envelope;
use crate::core::identity::PrivateIdentity;
use crate::core::project::ProjectMembership;
use crate::core::recipient::PublicIdentity;
use crate::error::{ConfigError, Result};

/// Encrypt a file for explicit recipients, or the project key list.
pub fn encrypt(file: &Path, output_path: Option<PathBuf>, recipients: &[String]) -> Result<()> {
    let data = fs::read(file)?;

    let targets: Vec<PublicIdentity> = if recipients.is_empty() {
        let cwd = std::env::current_dir()?;
        let membership = ProjectMembership::load(&cwd)?.ok_or(ConfigError::NotInitialized)?;
        membership.recipients()?
    } else {
        recipients
            .iter()
            .map(|arg| resolve_key_arg(arg).and_then(|raw| PublicIdentity::parse(&raw)))
            .collect::<Result<_>>()?
    };

    let sealed = envelope::encrypt(&data, &targets)?;

    let out = output_path.unwrap_or_else(|| append_extension(file, "age"));
    fs::write(&out, sealed)?;

    output::success(&format!(
        "encrypted {} for {} recipient{} -> {}",
        file.display(),
        targets.len(),
        if targets.len() == 1 { "" } else { "s" },
        out.display()
    ));

    Ok(())
}

/// Decrypt a file sealed by `encrypt`.
pub fn decrypt(file: &Path, output_path: Option<PathBuf>, identity: Option<PathBuf>) -> Result<()> {
    let sealed = fs::read(file)?;

    let identity_file = match identity {
        Some(path) => path,
        None => Login::load()?.ok_or(ConfigError::NotLoggedIn)?.identity_file,
    };
    let identity = PrivateIdentity::load(&identity_file)?;

    let payload = envelope::decrypt(&sealed, &identity)?;

    let out = output_path.unwrap_or_else(|| strip_age_extension(file));
    fs::write(&out, payload.as_slice())?;

    output::success(&format!("decrypted {} -> {}", file.display(), out.display()));

    Ok(())
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut s = path.to_path_buf().into_os_string();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

fn strip_age_extension(path: &Path) -> PathBuf {
    match (path.extension(), path.file_stem()) {
        (Some(ext), Some(stem)) if ext == "age" => path.with_file_name(stem),
        _ => append_extension(path, "out"),
    }
}
