//! Validated digest input.
//!
//! Digests arrive from measurement data as hex strings, nominally
//! 2×curve-bytes characters long. They are decoded once up front; anything
//! that is not decodable hex is rejected before arithmetic starts.
//! Truncation and padding conventions beyond that are algorithm- and
//! revision-specific and live with the individual formulas.

use crate::Error;
use num_bigint::{BigInt, Sign};

/// A decoded message digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Digest {
    bytes: Vec<u8>,
}

impl Digest {
    /// Decodes a hex digest. Fails with [Error::MalformedDigest] on an empty
    /// string, an odd number of characters, or non-hex characters.
    pub fn parse(hex: &str) -> Result<Self, Error> {
        if hex.is_empty() {
            return Err(Error::MalformedDigest("empty".to_string()));
        }
        let bytes = tpmscan_utils::from_hex(hex)
            .ok_or_else(|| Error::MalformedDigest(hex.to_string()))?;
        Ok(Self { bytes })
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Digest length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the digest is empty. Parsing rejects empty digests, so this is
    /// always false for parsed values.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The whole digest as a big-endian integer.
    pub fn to_int(&self) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, &self.bytes)
    }

    /// The first `width` bytes as a big-endian integer (the whole digest when
    /// shorter).
    pub fn truncated_int(&self, width: usize) -> BigInt {
        let end = width.min(self.bytes.len());
        BigInt::from_bytes_be(Sign::Plus, &self.bytes[..end])
    }
}
