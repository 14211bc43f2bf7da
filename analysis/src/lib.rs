//! Recover ephemeral nonces and re-verify elliptic-curve signatures produced
//! by TPM devices.
//!
//! TPM devices sign with ECDSA, EC-Schnorr, SM2, and ECDAA over eight named
//! curves, and several of the signing formulas changed across revisions of
//! the TPM 2.0 library specification. Given one signature record (r, s,
//! digest, public key, and, for known-key calibration data, the private
//! scalar) this crate computes the ephemeral nonce that must have been used,
//! or independently re-checks the signature. Researchers run it over archived
//! measurement data to probe whether a device leaks or biases its nonces.
//!
//! All operations are pure functions over immutable inputs; the curve and
//! algorithm registries are built once and never mutated, so records can be
//! analyzed from any number of threads without coordination.
//!
//! # Example
//!
//! Recover the nonce behind a known-key ECDAA calibration signature:
//!
//! ```rust
//! use num_bigint::BigInt;
//! use tpmscan_analysis::{scheme, Algorithm, Curve, Digest, Revision, Signature};
//!
//! fn int(hex: &str) -> BigInt {
//!     BigInt::parse_bytes(hex.as_bytes(), 16).unwrap()
//! }
//!
//! let signature = Signature {
//!     r: int("553E725A60F7D0CB564C1AD8CAE266C69E58ADB6D01741256A7351045BF18FBB"),
//!     s: int("B795658C1CFB888D999BBDE3D40773523DD0B9A3C3B534FBE46F7FB7D99F798D"),
//! };
//! let private = int("65EF0315E9FDFDDDB80722952E427FCA2729762B0406DE8F9A7C3B7013B29329");
//! let digest = Digest::parse(&"00".repeat(34)).unwrap();
//!
//! let nonce = scheme::recover_nonce(
//!     Curve::P256,
//!     Algorithm::Ecdaa,
//!     Revision::from_report(1.59),
//!     &signature,
//!     &private,
//!     &digest,
//! )
//! .unwrap();
//! assert_eq!(
//!     nonce,
//!     "7edd1534bd14dd5040da9f19707588db808e2e53250c4951ab1c4ba9f77892d8"
//! );
//! ```

use num_bigint::BigInt;
use thiserror::Error;

pub mod algorithm;
pub use algorithm::Algorithm;
pub mod curve;
pub use curve::{Curve, CurveParams, Point};
pub mod digest;
pub use digest::Digest;
pub mod key;
mod record;
pub use record::SignatureRecord;
pub mod revision;
pub use revision::{Era, Revision};
pub mod scheme;
pub use scheme::Verdict;

/// Errors surfaced while resolving selectors or preparing inputs.
///
/// These are raised before any formula runs. A signature that merely fails
/// to verify is a [Verdict], not an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown curve: {0}")]
    UnknownCurve(String),
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("modular inverse undefined")]
    ModularInverseUndefined,
    #[error("malformed digest: {0}")]
    MalformedDigest(String),
    #[error("point not on curve {0}")]
    PointNotOnCurve(Curve),
    #[error("public key does not match private scalar")]
    KeyConsistencyFailure,
}

/// A raw (r, s) signature pair as recorded in measurement data.
///
/// Both values are conceptually in [0, n). The core does not enforce
/// r, s ≠ 0; empirical rows occasionally violate it and the formulas surface
/// that as an error or an invalid verdict instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub r: BigInt,
    pub s: BigInt,
}
