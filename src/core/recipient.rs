//! Recipient key parsing.
//!
//! Turns a raw single-line SSH public key into an encryption target.

use std::str::FromStr;

use age::ssh;

use crate::error::{ParseError, Result};

/// A parsed SSH public key that secrets can be encrypted for.
///
/// Equality and hashing consider only the algorithm tag and the key
/// material; the trailing comment (usually an email) is kept for display
/// but never participates in comparisons.
#[derive(Debug, Clone)]
pub struct PublicIdentity {
    recipient: ssh::Recipient,
    encoded: String,
    comment: Option<String>,
}

impl PublicIdentity {
    /// Parse a single-line SSH public key (`algorithm base64 [comment]`).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedFormat` if the algorithm tag is
    /// unknown or the key material does not decode.
    pub fn parse(raw: &str) -> Result<Self> {
        let line = raw.trim();
        let mut fields = line.split_whitespace();

        let (algorithm, material) = match (fields.next(), fields.next()) {
            (Some(a), Some(m)) => (a, m),
            _ => return Err(ParseError::UnrecognizedFormat(line.to_string()).into()),
        };

        let comment = {
            let rest = fields.collect::<Vec<_>>().join(" ");
            (!rest.is_empty()).then_some(rest)
        };

        let encoded = format!("{} {}", algorithm, material);
        let recipient = encoded
            .parse::<ssh::Recipient>()
            .map_err(|_| ParseError::UnrecognizedFormat(line.to_string()))?;

        Ok(Self {
            recipient,
            encoded,
            comment,
        })
    }

    /// The algorithm tag (e.g. `ssh-ed25519`).
    pub fn algorithm(&self) -> &str {
        self.encoded.split(' ').next().unwrap_or_default()
    }

    /// Normalized `algorithm base64` form, comment stripped.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// The trailing comment, if the key carried one.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// The underlying age recipient (for encryption).
    pub(crate) fn as_age(&self) -> &ssh::Recipient {
        &self.recipient
    }
}

impl FromStr for PublicIdentity {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq for PublicIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.encoded == other.encoded
    }
}

impl Eq for PublicIdentity {}

impl std::hash::Hash for PublicIdentity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.encoded.hash(state);
    }
}

impl std::fmt::Display for PublicIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = include_str!("../../tests/fixtures/alice_ed25519.pub");
    const CAROL_RSA: &str = include_str!("../../tests/fixtures/carol_rsa.pub");
    const ERIN_ECDSA: &str = include_str!("../../tests/fixtures/erin_ecdsa.pub");

    #[test]
    fn test_parse_ed25519() {
        let key = PublicIdentity::parse(ALICE).unwrap();
        assert_eq!(key.algorithm(), "ssh-ed25519");
        assert_eq!(key.comment(), Some("alice@example.com"));
    }

    #[test]
    fn test_parse_rsa() {
        let key = PublicIdentity::parse(CAROL_RSA).unwrap();
        assert_eq!(key.algorithm(), "ssh-rsa");
    }

    #[test]
    fn test_equality_ignores_comment() {
        let with_comment = PublicIdentity::parse(ALICE).unwrap();
        let bare = PublicIdentity::parse(with_comment.encoded()).unwrap();
        let relabeled =
            PublicIdentity::parse(&format!("{} deploy@ci", with_comment.encoded())).unwrap();

        assert_eq!(with_comment, bare);
        assert_eq!(with_comment, relabeled);
        assert_eq!(bare.comment(), None);
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let err = PublicIdentity::parse(ERIN_ECDSA).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Parse(ParseError::UnrecognizedFormat(_))
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(PublicIdentity::parse("not a key").is_err());
        assert!(PublicIdentity::parse("").is_err());
        assert!(PublicIdentity::parse("ssh-ed25519 !!!notbase64!!!").is_err());
    }
}
