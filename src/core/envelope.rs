//! Envelope encryption.
//!
//! Hybrid multi-recipient encryption over arbitrary payload bytes: a fresh
//! content key encrypts the payload once, and one wrapped copy of that key
//! (a stanza) is emitted per recipient. Decryption trial-unwraps stanzas
//! against a single identity, so the envelope never names its recipients.

use std::io::{Read, Write};

use age::armor::{ArmoredReader, ArmoredWriter, Format};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::identity::PrivateIdentity;
use crate::core::recipient::PublicIdentity;
use crate::error::{AuthorizationError, DecryptionError, Error, Result};

/// Encrypt `payload` for every identity in `recipients`.
///
/// Each call draws a fresh content key, nonce, and per-stanza randomness,
/// so identical inputs always produce byte-different envelopes. The output
/// is ASCII-armored, which keeps the artifact diff- and git-friendly while
/// staying opaque.
///
/// # Errors
///
/// Returns `AuthorizationError::NoRecipients` if `recipients` is empty.
pub fn encrypt(payload: &[u8], recipients: &[PublicIdentity]) -> Result<Vec<u8>> {
    if recipients.is_empty() {
        return Err(AuthorizationError::NoRecipients.into());
    }

    debug!(
        recipients = recipients.len(),
        payload_bytes = payload.len(),
        "sealing envelope"
    );

    let encryptor = age::Encryptor::with_recipients(
        recipients.iter().map(|r| r.as_age() as &dyn age::Recipient),
    )
    .map_err(|e| Error::Encryption(e.to_string()))?;

    let mut sealed = Vec::new();
    let mut writer = encryptor
        .wrap_output(ArmoredWriter::wrap_output(
            &mut sealed,
            Format::AsciiArmor,
        )?)
        .map_err(|e| Error::Encryption(e.to_string()))?;

    writer.write_all(payload)?;
    let armored = writer
        .finish()
        .map_err(|e| Error::Encryption(e.to_string()))?;
    armored
        .finish()
        .map_err(|e| Error::Encryption(e.to_string()))?;

    Ok(sealed)
}

/// Decrypt an envelope with a single identity.
///
/// Read-only: returns the payload bytes (zeroized on drop) or an error.
///
/// # Errors
///
/// Returns `AuthorizationError::NotAuthorized` if no stanza unwraps with
/// this identity, and `DecryptionError::Corrupted` if a stanza unwraps but
/// the payload fails authentication (tampered or truncated envelope).
pub fn decrypt(envelope: &[u8], identity: &PrivateIdentity) -> Result<Zeroizing<Vec<u8>>> {
    let decryptor =
        age::Decryptor::new(ArmoredReader::new(envelope)).map_err(map_decrypt_error)?;

    let mut reader = decryptor
        .decrypt(std::iter::once(identity.as_age() as &dyn age::Identity))
        .map_err(map_decrypt_error)?;

    let mut payload = Zeroizing::new(Vec::new());
    reader
        .read_to_end(&mut payload)
        .map_err(|_| DecryptionError::Corrupted)?;

    debug!(payload_bytes = payload.len(), "envelope opened");
    Ok(payload)
}

/// A missing stanza match is an authorization failure; everything else is
/// treated as a damaged envelope.
fn map_decrypt_error(e: age::DecryptError) -> Error {
    match e {
        age::DecryptError::NoMatchingKeys => AuthorizationError::NotAuthorized.into(),
        _ => DecryptionError::Corrupted.into(),
    }
}
