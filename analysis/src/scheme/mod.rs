//! Per-algorithm nonce extraction and signature verification.
//!
//! Each algorithm module carries the formulas for recovering the ephemeral
//! nonce from a known-key signature and for independently re-verifying a
//! signature. Formula variants that changed across TPM specification
//! revisions branch on [Era], never on raw version numbers. Dispatch is an
//! exhaustive `match` on [Algorithm], so a missing combination is a compile
//! error rather than a lookup failure.

use crate::{Algorithm, Curve, Digest, Error, Point, Revision, Signature};
use num_bigint::BigInt;
use std::fmt;

pub mod ecdaa;
pub mod ecdsa;
pub mod ecschnorr;
pub mod sm2;

/// Outcome of signature verification.
///
/// `Indeterminate` is reserved for signatures that cannot be checked by
/// construction (ECDAA without a nonce commitment). It is deliberately
/// distinct from both `Valid` and `Invalid`: there is no evidence of failure,
/// but no proof of correctness either.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
    Indeterminate,
}

impl Verdict {
    /// Whether the verification produced no evidence of failure.
    pub fn passed(&self) -> bool {
        !matches!(self, Verdict::Invalid)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Valid => "valid",
            Verdict::Invalid => "invalid",
            Verdict::Indeterminate => "indeterminate",
        };
        write!(f, "{}", s)
    }
}

/// Recovers the ephemeral nonce that produced `signature` under a known
/// private scalar.
///
/// Returns the nonce as a lowercase hex string, big-endian, zero-padded to
/// the curve's byte length.
pub fn recover_nonce(
    curve: Curve,
    algorithm: Algorithm,
    revision: Revision,
    signature: &Signature,
    private: &BigInt,
    digest: &Digest,
) -> Result<String, Error> {
    let nonce = match algorithm {
        Algorithm::Ecdsa => ecdsa::recover_nonce(curve, signature, private, digest)?,
        Algorithm::Ecschnorr => ecschnorr::recover_nonce(curve, signature, private),
        Algorithm::Sm2 => sm2::recover_nonce(curve, signature, private),
        Algorithm::Ecdaa => {
            ecdaa::recover_nonce(curve, revision.era(), signature, private, digest)
        }
    };
    Ok(tpmscan_utils::hex(&tpmscan_utils::be_bytes(
        &nonce,
        curve.bytes(),
    )))
}

/// Re-verifies `signature` against a public key.
///
/// `commitment` is the externally supplied nonce commitment point required to
/// verify ECDAA; it is ignored by the other algorithms.
pub fn verify(
    curve: Curve,
    algorithm: Algorithm,
    revision: Revision,
    signature: &Signature,
    public: &Point,
    digest: &Digest,
    commitment: Option<&Point>,
) -> Result<Verdict, Error> {
    match algorithm {
        Algorithm::Ecdsa => ecdsa::verify(curve, signature, public, digest),
        Algorithm::Ecschnorr => ecschnorr::verify(curve, revision.era(), signature, public, digest),
        Algorithm::Sm2 => Ok(sm2::verify()),
        Algorithm::Ecdaa => ecdaa::verify(
            curve,
            revision.era(),
            signature,
            public,
            digest,
            commitment,
        ),
    }
}

/// Synthetic-signature builders shared by the scheme tests.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::{curve::mod_inv, Era};
    use num_bigint::Sign;
    use num_integer::Integer;
    use rand::RngCore;

    /// A scalar in [1, n), deterministic under a seeded RNG.
    pub fn scalar<R: RngCore>(rng: &mut R, curve: Curve) -> BigInt {
        let params = curve.params();
        let mut buf = vec![0u8; params.bytes + 8];
        rng.fill_bytes(&mut buf);
        let wide = BigInt::from_bytes_be(Sign::Plus, &buf);
        wide.mod_floor(&(&params.n - BigInt::from(1))) + BigInt::from(1)
    }

    /// A random digest of exactly the curve's byte length.
    pub fn digest<R: RngCore>(rng: &mut R, curve: Curve) -> Digest {
        let mut buf = vec![0u8; curve.bytes()];
        rng.fill_bytes(&mut buf);
        Digest::parse(&tpmscan_utils::hex(&buf)).unwrap()
    }

    /// ECDSA signature over `digest` with nonce `k` and private scalar `x`.
    pub fn sign_ecdsa(curve: Curve, k: &BigInt, x: &BigInt, digest: &Digest) -> Signature {
        let params = curve.params();
        let point = params.mul(k, &params.generator()).unwrap();
        let r = point.x().unwrap().clone();
        let k_inv = mod_inv(k, &params.n).unwrap();
        let s = (&k_inv * (digest.to_int() + &r * x)).mod_floor(&params.n);
        Signature { r, s }
    }

    /// EC-Schnorr signature: r is the era's challenge hash over (k·G).x,
    /// s = k + r·x.
    pub fn sign_ecschnorr(
        curve: Curve,
        era: Era,
        k: &BigInt,
        x: &BigInt,
        digest: &Digest,
    ) -> Signature {
        let params = curve.params();
        let point = params.mul(k, &params.generator()).unwrap();
        let r = ecschnorr::challenge(curve, era, point.x().unwrap(), digest);
        let s = (k + &r * x).mod_floor(&params.n);
        Signature { r, s }
    }

    /// SM2 signature with nonce `k`: r = e + (k·G).x, s = (1+x)⁻¹·(k − r·x).
    pub fn sign_sm2(curve: Curve, k: &BigInt, x: &BigInt, digest: &Digest) -> Signature {
        let params = curve.params();
        let n = &params.n;
        let point = params.mul(k, &params.generator()).unwrap();
        let r = (digest.to_int() + point.x().unwrap()).mod_floor(n);
        let inv = mod_inv(&(BigInt::from(1) + x), n).unwrap();
        let s = (&inv * (k - &r * x)).mod_floor(n);
        Signature { r, s }
    }

    /// ECDAA signature with nonce `k` and externally chosen `r`:
    /// s = k + t·x with the era's commitment scalar t. The matching
    /// commitment point is k·G.
    pub fn sign_ecdaa(
        curve: Curve,
        era: Era,
        k: &BigInt,
        x: &BigInt,
        r: &BigInt,
        digest: &Digest,
    ) -> Signature {
        let params = curve.params();
        let t = match era {
            Era::Rev116 | Era::Rev133 => r.clone(),
            Era::Rev136 => ecdaa::hashed_scalar(curve, r, digest),
        };
        let s = (k + &t * x).mod_floor(&params.n);
        Signature { r: r.clone(), s }
    }
}
