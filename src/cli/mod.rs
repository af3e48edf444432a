//! Command-line interface.

pub mod completions;
pub mod generate;
pub mod identify;
pub mod init;
pub mod keys;
pub mod login;
pub mod output;
pub mod pull;
pub mod push;
pub mod seal;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sealbox - share team secrets through git, encrypted for SSH keys.
#[derive(Parser)]
#[command(
    name = "sealbox",
    about = "Share team secrets through git, encrypted for the SSH keys you already have",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize a sealbox project in the current directory
    Init {
        /// Project name (defaults to the directory name)
        name: Option<String>,
    },

    /// Record your email and identity file for push/pull
    Login {
        /// Your email (used as push author)
        #[arg(short, long)]
        email: String,
        /// Path to your SSH private key
        #[arg(short, long)]
        identity: Option<PathBuf>,
        /// Pick the first usable key from ~/.ssh automatically
        #[arg(long)]
        me: bool,
    },

    /// Show your SSH public keys (easy copy-paste)
    #[command(visible_alias = "whoami")]
    Identify,

    /// Generate a new SSH keypair via ssh-keygen
    Generate {
        /// Comment embedded in the key (usually your email)
        #[arg(short, long)]
        email: Option<String>,
        /// Key file name under ~/.ssh (defaults to id_ed25519)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Authorize a public key for the next push
    AddKey {
        /// Raw public key, or path to a .pub file
        key: Option<String>,
        /// Use your own key from the login config
        #[arg(long)]
        me: bool,
    },

    /// Remove a public key from the project
    RemoveKey {
        /// Raw public key, or path to a .pub file
        key: String,
    },

    /// Encrypt the local .env for all authorized keys
    Push {
        /// Path to the .env file to push
        #[arg(short, long, default_value = ".env")]
        file: PathBuf,
    },

    /// Decrypt the stored secrets back to .env
    Pull {
        /// File to write decrypted secrets to
        #[arg(short, long, default_value = ".env")]
        output: PathBuf,
        /// Private key to decrypt with (defaults to the login identity)
        #[arg(short, long, env = "SEALBOX_IDENTITY")]
        identity: Option<PathBuf>,
        /// Overwrite the output file without asking
        #[arg(long)]
        force: bool,
    },

    /// Show project and login status
    Status,

    /// Encrypt an arbitrary file for SSH recipients
    #[command(hide = true)]
    Encrypt {
        /// File to encrypt
        file: PathBuf,
        /// Output path (defaults to <file>.age)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Recipient key or .pub path (repeatable; defaults to project keys)
        #[arg(short, long)]
        recipient: Vec<String>,
    },

    /// Decrypt a file produced by `encrypt`
    #[command(hide = true)]
    Decrypt {
        /// File to decrypt
        file: PathBuf,
        /// Output path (defaults to <file> minus .age)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Private key to decrypt with (defaults to the login identity)
        #[arg(short, long, env = "SEALBOX_IDENTITY")]
        identity: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init { name } => init::execute(name),
        Login {
            email,
            identity,
            me,
        } => login::execute(&email, identity, me),
        Identify => identify::execute(),
        Generate { email, name } => generate::execute(email, name),
        AddKey { key, me } => keys::add(key, me),
        RemoveKey { key } => keys::remove(&key),
        Push { file } => push::execute(&file),
        Pull {
            output,
            identity,
            force,
        } => pull::execute(&output, identity, force),
        Status => status::execute(),
        Encrypt {
            file,
            output,
            recipient,
        } => seal::encrypt(&file, output, &recipient),
        Decrypt {
            file,
            output,
            identity,
        } => seal::decrypt(&file, output, identity),
        Completions { shell } => completions::execute(shell),
    }
}
