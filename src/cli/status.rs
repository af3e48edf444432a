//! Status command - quick project and login overview.

use crate::cli::output;
use crate::core::config::Login;
use crate::core::project::ProjectMembership;
use crate::core::recipient::PublicIdentity;
use crate::core::sync;
use crate::error::{ConfigError, Result};

/// Show the membership, envelope, and login state.
pub fn execute() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let membership = ProjectMembership::load(&cwd)?.ok_or(ConfigError::NotInitialized)?;

    output::header("Project");
    output::kv("name", &membership.name);
    output::kv("id", &membership.id);
    output::kv(
        "keys",
        format!(
            "{} authorized key{}",
            membership.keys.len(),
            if membership.keys.len() == 1 { "" } else { "s" }
        ),
    );

    for key in &membership.keys {
        match PublicIdentity::parse(key) {
            Ok(parsed) => output::dim(&format!(
                "{} {}",
                parsed.algorithm(),
                parsed.comment().unwrap_or("(no comment)")
            )),
            Err(_) => output::dim("(unparseable key entry)"),
        }
    }

    let envelope = sync::envelope_path(&cwd);
    match std::fs::metadata(&envelope) {
        Ok(meta) => output::kv("envelope", format!("{} bytes", meta.len())),
        Err(_) => {
            output::kv("envelope", "none");
            output::hint("nothing pushed yet: run `sealbox push`");
        }
    }

    output::header("Login");
    match Login::load()? {
        Some(login) => {
            output::kv("email", &login.email);
            output::kv("identity", login.identity_file.display());
        }
        None => {
            output::kv("email", "not logged in");
            output::hint("run `sealbox login --email you@example.com --me`");
        }
    }

    Ok(())
}
