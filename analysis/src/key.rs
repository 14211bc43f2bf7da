//! Public-key reconstruction.
//!
//! Measurement rows carry public keys as bare coordinate pairs. They are
//! rebuilt into group points here, with an on-curve check, and optionally
//! cross-checked against the private scalar recorded alongside known-key
//! calibration measurements. A calibration mismatch means the row itself is
//! corrupt, which must stay distinguishable from a signature that merely
//! fails to verify.

use crate::{
    curve::{Curve, Point},
    Error,
};
use num_bigint::BigInt;
use num_integer::Integer;

/// Rebuilds an affine point from coordinates, canonicalizing them into the
/// field. Fails with [Error::PointNotOnCurve] when the pair does not satisfy
/// the curve equation.
pub fn reconstruct(curve: Curve, x: &BigInt, y: &BigInt) -> Result<Point, Error> {
    let params = curve.params();
    let x = x.mod_floor(&params.p);
    let y = y.mod_floor(&params.p);
    if !params.contains(&x, &y) {
        return Err(Error::PointNotOnCurve(curve));
    }
    Ok(Point::Affine { x, y })
}

/// Rebuilds an affine point and asserts it matches `private`·G. Fails with
/// [Error::KeyConsistencyFailure] on a mismatch.
pub fn reconstruct_calibrated(
    curve: Curve,
    x: &BigInt,
    y: &BigInt,
    private: &BigInt,
) -> Result<Point, Error> {
    let point = reconstruct(curve, x, y)?;
    let params = curve.params();
    let expected = params.mul(private, &params.generator())?;
    if expected != point {
        return Err(Error::KeyConsistencyFailure);
    }
    Ok(point)
}
