//! Core library components.
//!
//! This module contains the reusable business logic for recipient and
//! identity handling, envelope encryption, the secret blob, project
//! membership, and push/pull orchestration.

mod atomic;

pub mod blob;
pub mod config;
pub mod constants;
pub mod env;
pub mod envelope;
pub mod identity;
pub mod keygen;
pub mod project;
pub mod recipient;
pub mod sync;
