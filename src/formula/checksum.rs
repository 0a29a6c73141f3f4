use crate::error::{InstallerError, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

const SHA256_HEX_LEN: usize = 64;

/// A pinned SHA-256 digest: exactly 64 hex characters, stored lowercase.
///
/// Entries that are longer or shorter are rejected instead of truncated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sha256Digest(String);

impl Sha256Digest {
    /// Accepts an optional `sha256:` prefix and surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix("sha256:").unwrap_or(trimmed);

        if hex.len() != SHA256_HEX_LEN {
            return Err(InstallerError::MalformedChecksum {
                value: value.to_string(),
                reason: format!(
                    "expected {} hex characters, got {}",
                    SHA256_HEX_LEN,
                    hex.len()
                ),
            });
        }

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InstallerError::MalformedChecksum {
                value: value.to_string(),
                reason: "contains non-hex characters".to_string(),
            });
        }

        Ok(Self(hex.to_ascii_lowercase()))
    }

    /// Digest of an in-memory buffer.
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(Sha256::digest(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Sha256Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Compare the digest of `bytes` against the pinned value.
pub fn verify_bytes(url: &str, bytes: &[u8], expected: &Sha256Digest) -> Result<Sha256Digest> {
    let actual = Sha256Digest::of_bytes(bytes);
    if actual.as_str().eq_ignore_ascii_case(expected.as_str()) {
        return Ok(actual);
    }

    Err(InstallerError::ChecksumMismatch {
        url: url.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // sha256("abc")
    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn parse_normalizes_case_and_prefix() {
        let digest = Sha256Digest::parse(&format!("sha256:{}", ABC.to_uppercase())).unwrap();
        assert_eq!(digest.as_str(), ABC);
    }

    #[test]
    fn parse_rejects_overlong_digest() {
        let overlong = format!("{}{}", ABC, "00");
        let err = Sha256Digest::parse(&overlong).unwrap_err();
        assert!(matches!(err, InstallerError::MalformedChecksum { .. }));
        assert!(err.to_string().contains("got 66"));
    }

    #[test]
    fn parse_rejects_non_hex() {
        let bad = ABC.replace('b', "z");
        assert!(matches!(
            Sha256Digest::parse(&bad),
            Err(InstallerError::MalformedChecksum { .. })
        ));
    }

    #[test]
    fn of_bytes_matches_known_vector() {
        assert_eq!(Sha256Digest::of_bytes(b"abc").as_str(), ABC);
    }

    #[test]
    fn verify_bytes_detects_mismatch() {
        let expected = Sha256Digest::parse(ABC).unwrap();
        assert!(verify_bytes("u", b"abc", &expected).is_ok());
        let err = verify_bytes("u", b"abd", &expected).unwrap_err();
        assert!(matches!(err, InstallerError::ChecksumMismatch { .. }));
    }
}
