//! ECDSA (`TPM_ALG_ECDSA`) formulas.
//!
//! Nonce recovery inverts the signing equation s = k⁻¹·(e + r·x):
//! k = s⁻¹·(e + r·x) mod n. Verification recomputes the nonce point
//! R′ = s⁻¹·e·G + r·s⁻¹·PK and compares its x-coordinate against r.

use crate::{
    curve::{mod_inv, Curve, Point},
    Digest, Error, Signature, Verdict,
};
use num_bigint::BigInt;
use num_integer::Integer;

/// Recovers the signing nonce from a known-key ECDSA signature.
///
/// Fails with [Error::ModularInverseUndefined] when s ≡ 0 mod n.
pub fn recover_nonce(
    curve: Curve,
    signature: &Signature,
    private: &BigInt,
    digest: &Digest,
) -> Result<BigInt, Error> {
    let n = curve.order();
    let s_inv = mod_inv(&signature.s, n)?;
    let e = digest.to_int();
    Ok((s_inv * (e + &signature.r * private)).mod_floor(n))
}

/// Re-verifies an ECDSA signature.
///
/// The digest is truncated to the curve's byte length before being
/// interpreted as an integer.
pub fn verify(
    curve: Curve,
    signature: &Signature,
    public: &Point,
    digest: &Digest,
) -> Result<Verdict, Error> {
    let params = curve.params();
    let n = &params.n;
    let s_inv = mod_inv(&signature.s, n)?;
    let e = digest.truncated_int(params.bytes);

    let u1 = (e * &s_inv).mod_floor(n);
    let u2 = (&signature.r * s_inv).mod_floor(n);
    let nonce_point = params.add(
        &params.mul(&u1, &params.generator())?,
        &params.mul(&u2, public)?,
    )?;

    Ok(match nonce_point.x() {
        Some(x) if *x == signature.r => Verdict::Valid,
        _ => Verdict::Invalid,
    })
}
