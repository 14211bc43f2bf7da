//! Affine short-Weierstrass group arithmetic over arbitrary-precision integers.
//!
//! The registry spans curves no fixed-width field implementation covers (the
//! Barreto-Naehrig curves in particular), so group operations are performed in
//! affine coordinates over [BigInt]. Operations are variable-time: this crate
//! analyzes archived signatures offline, usually with caller-supplied keys,
//! and is not a signing implementation.
//!
//! # Acknowledgements
//!
//! _The following projects were used as a reference when implementing this module:_
//!
//! * <https://github.com/AntonKueltz/fastecdsa>: affine point addition and
//!   scalar multiplication over short Weierstrass curves.

use super::CurveParams;
use crate::Error;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// A point on a curve's group: either the point at infinity or an affine
/// coordinate pair, canonicalized into the field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point {
    Infinity,
    Affine { x: BigInt, y: BigInt },
}

impl Point {
    /// The x-coordinate, unless this is the point at infinity.
    pub fn x(&self) -> Option<&BigInt> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// The y-coordinate, unless this is the point at infinity.
    pub fn y(&self) -> Option<&BigInt> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

/// Computes the multiplicative inverse of `value` modulo `modulus` with the
/// extended Euclidean algorithm.
///
/// Fails when no inverse exists, i.e. when `value` and `modulus` share a
/// factor; for the prime moduli used here that means `value` ≡ 0.
pub fn mod_inv(value: &BigInt, modulus: &BigInt) -> Result<BigInt, Error> {
    let mut t = BigInt::zero();
    let mut new_t = BigInt::one();
    let mut r = modulus.clone();
    let mut new_r = value.mod_floor(modulus);

    while !new_r.is_zero() {
        let quotient = &r / &new_r;
        let next_t = &t - &quotient * &new_t;
        t = new_t;
        new_t = next_t;
        let next_r = &r - &quotient * &new_r;
        r = new_r;
        new_r = next_r;
    }

    if !r.is_one() {
        return Err(Error::ModularInverseUndefined);
    }
    Ok(t.mod_floor(modulus))
}

/// Number of bytes needed to hold `value` big-endian, ceil(bitlen / 8).
pub fn byte_len(value: &BigInt) -> usize {
    (value.bits() as usize + 7) / 8
}

impl CurveParams {
    /// The base point G.
    pub fn generator(&self) -> Point {
        Point::Affine {
            x: self.gx.clone(),
            y: self.gy.clone(),
        }
    }

    /// Whether `(x, y)` satisfies the curve equation.
    pub fn contains(&self, x: &BigInt, y: &BigInt) -> bool {
        let lhs = (y * y).mod_floor(&self.p);
        let rhs = (x * x * x + &self.a * x + &self.b).mod_floor(&self.p);
        lhs == rhs
    }

    /// The additive inverse of a point.
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: (&self.p - y).mod_floor(&self.p),
            },
        }
    }

    /// Adds two points with the affine chord-and-tangent rule.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point, Error> {
        let (x1, y1) = match lhs {
            Point::Infinity => return Ok(rhs.clone()),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match rhs {
            Point::Infinity => return Ok(lhs.clone()),
            Point::Affine { x, y } => (x, y),
        };

        let p = &self.p;
        let slope = if x1 == x2 {
            if (y1 + y2).mod_floor(p).is_zero() {
                // Inverse points (or a point of order two).
                return Ok(Point::Infinity);
            }
            let numerator = BigInt::from(3) * x1 * x1 + &self.a;
            let denominator = mod_inv(&(BigInt::from(2) * y1), p)?;
            (numerator * denominator).mod_floor(p)
        } else {
            let numerator = y2 - y1;
            let denominator = mod_inv(&(x2 - x1), p)?;
            (numerator * denominator).mod_floor(p)
        };

        let x3 = (&slope * &slope - x1 - x2).mod_floor(p);
        let y3 = (&slope * (x1 - &x3) - y1).mod_floor(p);
        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// Multiplies a point by a scalar (reduced into the group) with
    /// double-and-add.
    pub fn mul(&self, scalar: &BigInt, point: &Point) -> Result<Point, Error> {
        let scalar = scalar.mod_floor(&self.n);
        let mut acc = Point::Infinity;
        let mut addend = point.clone();
        for i in 0..scalar.bits() {
            if scalar.bit(i) {
                acc = self.add(&acc, &addend)?;
            }
            addend = self.add(&addend, &addend)?;
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::super::Curve;
    use super::*;

    #[test]
    fn test_mod_inv() {
        let n = Curve::P256.order();
        let a = BigInt::from(12345u64);
        let inv = mod_inv(&a, n).unwrap();
        assert!((a * inv).mod_floor(n).is_one());
    }

    #[test]
    fn test_mod_inv_of_zero_undefined() {
        let n = Curve::P256.order();
        assert!(matches!(
            mod_inv(&BigInt::zero(), n),
            Err(Error::ModularInverseUndefined)
        ));
        // A multiple of the modulus reduces to zero.
        assert!(matches!(
            mod_inv(&(n * BigInt::from(3)), n),
            Err(Error::ModularInverseUndefined)
        ));
    }

    #[test]
    fn test_byte_len() {
        assert_eq!(byte_len(&BigInt::from(0xffu32)), 1);
        assert_eq!(byte_len(&BigInt::from(0x100u32)), 2);
        assert_eq!(byte_len(Curve::P521.order()), 66);
        assert_eq!(byte_len(Curve::Bn638.order()), 80);
    }

    #[test]
    fn test_add_identity() {
        let params = Curve::P256.params();
        let g = params.generator();
        assert_eq!(params.add(&g, &Point::Infinity).unwrap(), g);
        assert_eq!(params.add(&Point::Infinity, &g).unwrap(), g);
        assert_eq!(
            params.add(&Point::Infinity, &Point::Infinity).unwrap(),
            Point::Infinity
        );
    }

    #[test]
    fn test_add_inverse_is_infinity() {
        let params = Curve::P256.params();
        let g = params.generator();
        let neg = params.negate(&g);
        assert_eq!(params.add(&g, &neg).unwrap(), Point::Infinity);
    }

    #[test]
    fn test_double_matches_mul() {
        for curve in Curve::ALL {
            let params = curve.params();
            let g = params.generator();
            let doubled = params.add(&g, &g).unwrap();
            let by_mul = params.mul(&BigInt::from(2), &g).unwrap();
            assert_eq!(doubled, by_mul, "{}", curve);
            assert!(
                params.contains(doubled.x().unwrap(), doubled.y().unwrap()),
                "{}",
                curve
            );
        }
    }

    #[test]
    fn test_mul_distributes_over_add() {
        let params = Curve::P256.params();
        let g = params.generator();
        let a = BigInt::from(1234567u64);
        let b = BigInt::from(7654321u64);
        let lhs = params.mul(&(&a + &b), &g).unwrap();
        let rhs = params
            .add(
                &params.mul(&a, &g).unwrap(),
                &params.mul(&b, &g).unwrap(),
            )
            .unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_scalar_complement_sums_to_infinity() {
        // k·G + (n - k)·G must collapse to the identity on every curve.
        for curve in [Curve::P192, Curve::Bn256, Curve::Sm256] {
            let params = curve.params();
            let g = params.generator();
            let k = BigInt::from(987654321u64);
            let a = params.mul(&k, &g).unwrap();
            let b = params.mul(&(curve.order() - &k), &g).unwrap();
            assert_eq!(params.add(&a, &b).unwrap(), Point::Infinity, "{}", curve);
        }
    }

    #[test]
    fn test_order_minus_one_negates_generator() {
        let params = Curve::P256.params();
        let g = params.generator();
        let almost = params
            .mul(&(Curve::P256.order() - BigInt::one()), &g)
            .unwrap();
        assert_eq!(almost, params.negate(&g));
    }
}
