//! Push command - encrypt the local .env for the project key list.

use std::fs;
use std::path::Path;

use crate::cli::output;
use crate::core::config::Login;
use crate::core::{env, sync};
use crate::error::Result;

/// Parse the env file and seal it for every authorized key.
pub fn execute(file: &Path) -> Result<()> {
    let cwd = std::env::current_dir()?;

    let text = fs::read_to_string(file)?;
    let secrets = env::parse(&text)?;

    let author = match Login::load()? {
        Some(login) => login.email,
        None => whoami::username(),
    };

    let report = sync::push(&cwd, secrets, &author)?;

    output::success(&format!(
        "encrypted {} secret{} for {} recipient{}",
        report.secrets,
        if report.secrets == 1 { "" } else { "s" },
        report.recipients,
        if report.recipients == 1 { "" } else { "s" },
    ));
    output::kv("saved", report.envelope_path.display());
    output::hint("commit the .sealbox directory to share the push");

    Ok(())
}
