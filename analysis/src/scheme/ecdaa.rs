//! ECDAA (`TPM_ALG_ECDAA`) formulas.
//!
//! Before revision 1.36 of the TPM 2.0 library specification, ECDAA
//! signatures follow the EC-Schnorr signing equation and the EC-Schnorr
//! recovery formula applies unchanged. From 1.36 on, the scalar binding the
//! nonce is a hash over r and the digest: s = k + h·x with
//! h = SHA-256(BE(r) ‖ digest) mod n.
//!
//! Verification needs the prover's nonce commitment point. The commitment is
//! not recoverable from the signature alone (the nonce is zero-knowledge), so
//! without one the outcome is indeterminate rather than a failure.

use crate::{
    curve::{byte_len, Curve, Point},
    Digest, Era, Error, Signature, Verdict,
};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use sha2::{Digest as _, Sha256};
use tracing::warn;

/// The scalar binding the nonce commitment from revision 1.36 on:
/// SHA-256(BE(r, ceil(bitlen(n)/8)) ‖ digest bytes) mod n.
pub(crate) fn hashed_scalar(curve: Curve, r: &BigInt, digest: &Digest) -> BigInt {
    let n = curve.order();
    let width = byte_len(n);
    let mut hasher = Sha256::new();
    hasher.update(tpmscan_utils::be_bytes(&r.mod_floor(n), width));
    hasher.update(digest.as_bytes());
    BigInt::from_bytes_be(Sign::Plus, &hasher.finalize()).mod_floor(n)
}

/// Recovers the signing nonce from a known-key ECDAA signature.
pub fn recover_nonce(
    curve: Curve,
    era: Era,
    signature: &Signature,
    private: &BigInt,
    digest: &Digest,
) -> BigInt {
    match era {
        Era::Rev116 | Era::Rev133 => super::ecschnorr::recover_nonce(curve, signature, private),
        Era::Rev136 => {
            let n = curve.order();
            let h = hashed_scalar(curve, &signature.r, digest);
            (&signature.s - h * private).mod_floor(n)
        }
    }
}

/// Re-verifies an ECDAA signature against a nonce commitment point.
///
/// Without a commitment the signature cannot be checked; the verdict is
/// [Verdict::Indeterminate] and a warning is logged.
pub fn verify(
    curve: Curve,
    era: Era,
    signature: &Signature,
    public: &Point,
    digest: &Digest,
    commitment: Option<&Point>,
) -> Result<Verdict, Error> {
    let Some(commitment) = commitment else {
        warn!(
            curve = %curve,
            "no nonce commitment provided, cannot verify ECDAA signature"
        );
        return Ok(Verdict::Indeterminate);
    };

    let params = curve.params();
    let t = match era {
        Era::Rev116 | Era::Rev133 => signature.r.clone(),
        Era::Rev136 => hashed_scalar(curve, &signature.r, digest),
    };
    let recomputed = params.add(
        &params.mul(&signature.s, &params.generator())?,
        &params.negate(&params.mul(&t, public)?),
    )?;
    Ok(if recomputed == *commitment {
        Verdict::Valid
    } else {
        Verdict::Invalid
    })
}
