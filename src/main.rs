//! Sealbox - share team secrets through git, encrypted for SSH keys.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sealbox::cli::output;
use sealbox::cli::{execute, Cli};
use sealbox::error::{AuthorizationError, ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("SEALBOX_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("sealbox=debug")
        } else {
            EnvFilter::new("sealbox=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // One indistinct message for both decrypt failure modes, so the
        // output never acts as a membership oracle.
        let message = match &e {
            Error::Authorization(AuthorizationError::NotAuthorized) | Error::Decryption(_) => {
                "unable to decrypt: wrong identity or damaged data".to_string()
            }
            _ => e.to_string(),
        };

        let suggestion = match &e {
            Error::Config(ConfigError::NotInitialized) => Some("run: sealbox init"),
            Error::Config(ConfigError::NotLoggedIn) => {
                Some("run: sealbox login --email you@example.com --me")
            }
            Error::Config(ConfigError::NoSecrets) => Some("run: sealbox push"),
            Error::Authorization(AuthorizationError::NotAuthorized) | Error::Decryption(_) => {
                Some("ask a project member to add your key and re-push")
            }
            Error::Keygen(_) => Some("install openssh-client for ssh-keygen"),
            _ => None,
        };

        output::error(&message);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
