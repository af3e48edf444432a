//! Sealbox - serverless team secrets over the SSH keys you already have.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Initialize a project (sealbox.json)
//! │   ├── login         # Record email + identity file locally
//! │   ├── identify      # Show your SSH public keys
//! │   ├── generate      # Generate a new SSH keypair
//! │   ├── keys          # add-key / remove-key
//! │   ├── push          # Encrypt .env for the project key list
//! │   ├── pull          # Decrypt the envelope back to .env
//! │   └── seal          # Raw file encrypt/decrypt (hidden)
//! └── core/             # Core library components
//!     ├── recipient     # SSH public key parsing (PublicIdentity)
//!     ├── identity      # SSH private key loading (PrivateIdentity)
//!     ├── envelope      # Multi-recipient age encryption
//!     ├── blob          # Versioned plaintext secret container
//!     ├── project       # Authorized key list (sealbox.json)
//!     ├── env           # KEY=VALUE text codec
//!     ├── sync          # push/pull orchestration
//!     ├── keygen        # Keypair generation capability
//!     └── config        # Global login config (~/.sealbox)
//! ```
//!
//! # Features
//!
//! - age-based envelope encryption for SSH ed25519 and RSA recipients
//! - One encrypted artifact per project, committed next to the code
//! - Membership snapshot semantics: an envelope is decryptable by exactly
//!   the keys that were authorized when it was pushed
//! - Seamless .env file integration

pub mod cli;
pub mod core;
pub mod error;
