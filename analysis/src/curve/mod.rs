//! Registry of the named curves TPM devices sign on.
//!
//! Eight curves are supported: the five NIST prime curves (P-192 through
//! P-521), the two Barreto-Naehrig curves the TPM specification assigns to
//! ECDAA (BN P-256 and BN P-638), and the SM2 prime curve. The parameter
//! tables are constructed once at first use and are immutable afterwards;
//! lookups hand out `&'static` references. There is no way to register a
//! curve at runtime.

use crate::Error;
use num_bigint::BigInt;
use std::{fmt, str::FromStr, sync::LazyLock};

mod arithmetic;
pub use arithmetic::{byte_len, mod_inv, Point};

/// Parameters of a short Weierstrass curve y² = x³ + ax + b over GF(p).
pub struct CurveParams {
    /// Prime field modulus.
    pub p: BigInt,
    /// Curve coefficient a.
    pub a: BigInt,
    /// Curve coefficient b.
    pub b: BigInt,
    /// Base point G x-coordinate.
    pub gx: BigInt,
    /// Base point G y-coordinate.
    pub gy: BigInt,
    /// Order of the base point G.
    pub n: BigInt,
    /// Field element byte length, ceil(bitlen(p) / 8).
    pub bytes: usize,
}

/// Curve selector, `TPM_ECC_CURVE` in the TPM structures specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    P192,
    P224,
    P256,
    P384,
    P521,
    Bn256,
    Bn638,
    Sm256,
}

impl Curve {
    /// Every supported curve, in wire-code order.
    pub const ALL: [Curve; 8] = [
        Curve::P192,
        Curve::P224,
        Curve::P256,
        Curve::P384,
        Curve::P521,
        Curve::Bn256,
        Curve::Bn638,
        Curve::Sm256,
    ];

    /// Resolves a `TPM_ECC_CURVE` wire code.
    pub fn from_wire(code: u16) -> Result<Self, Error> {
        match code {
            0x0001 => Ok(Curve::P192),
            0x0002 => Ok(Curve::P224),
            0x0003 => Ok(Curve::P256),
            0x0004 => Ok(Curve::P384),
            0x0005 => Ok(Curve::P521),
            0x0010 => Ok(Curve::Bn256),
            0x0011 => Ok(Curve::Bn638),
            0x0020 => Ok(Curve::Sm256),
            _ => Err(Error::UnknownCurve(format!("{:#06x}", code))),
        }
    }

    /// The `TPM_ECC_CURVE` wire code.
    pub fn wire(&self) -> u16 {
        match self {
            Curve::P192 => 0x0001,
            Curve::P224 => 0x0002,
            Curve::P256 => 0x0003,
            Curve::P384 => 0x0004,
            Curve::P521 => 0x0005,
            Curve::Bn256 => 0x0010,
            Curve::Bn638 => 0x0011,
            Curve::Sm256 => 0x0020,
        }
    }

    /// The curve's parameter set.
    pub fn params(&self) -> &'static CurveParams {
        &PARAMS[*self as usize]
    }

    /// Field element byte length, ceil(bitlen(p) / 8).
    pub fn bytes(&self) -> usize {
        self.params().bytes
    }

    /// Order of the base point.
    pub fn order(&self) -> &'static BigInt {
        &self.params().n
    }

    /// The base point G.
    pub fn generator(&self) -> Point {
        self.params().generator()
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Curve::P192 => "P192",
            Curve::P224 => "P224",
            Curve::P256 => "P256",
            Curve::P384 => "P384",
            Curve::P521 => "P521",
            Curve::Bn256 => "BN256",
            Curve::Bn638 => "BN638",
            Curve::Sm256 => "SM256",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Curve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P192" => Ok(Curve::P192),
            "P224" => Ok(Curve::P224),
            "P256" => Ok(Curve::P256),
            "P384" => Ok(Curve::P384),
            "P521" => Ok(Curve::P521),
            "BN256" => Ok(Curve::Bn256),
            "BN638" => Ok(Curve::Bn638),
            "SM256" => Ok(Curve::Sm256),
            _ => Err(Error::UnknownCurve(s.to_string())),
        }
    }
}

static PARAMS: LazyLock<[CurveParams; 8]> = LazyLock::new(|| {
    [
        p192(),
        p224(),
        p256(),
        p384(),
        p521(),
        bn256(),
        bn638(),
        sm256(),
    ]
});

/// Helper: parse a hex string into a BigInt.
fn bn(hex: &str) -> BigInt {
    BigInt::parse_bytes(hex.as_bytes(), 16).unwrap()
}

/// NIST P-192 (secp192r1) parameters, FIPS 186-4 / SEC 2 §2.4.
fn p192() -> CurveParams {
    CurveParams {
        p: bn("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF"),
        a: bn("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFC"),
        b: bn("64210519E59C80E70FA7E9AB72243049FEB8DEECC146B9B1"),
        gx: bn("188DA80EB03090F67CBF20EB43A18800F4FF0AFD82FF1012"),
        gy: bn("07192B95FFC8DA78631011ED6B24CDD573F977A11E794811"),
        n: bn("FFFFFFFFFFFFFFFFFFFFFFFF99DEF836146BC9B1B4D22831"),
        bytes: 24,
    }
}

/// NIST P-224 (secp224r1) parameters, FIPS 186-4 / SEC 2 §2.5.
fn p224() -> CurveParams {
    CurveParams {
        p: bn("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001"),
        a: bn("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFE"),
        b: bn("B4050A850C04B3ABF54132565044B0B7D7BFD8BA270B39432355FFB4"),
        gx: bn("B70E0CBD6BB4BF7F321390B94A03C1D356C21122343280D6115C1D21"),
        gy: bn("BD376388B5F723FB4C22DFE6CD4375A05A07476444D5819985007E34"),
        n: bn("FFFFFFFFFFFFFFFFFFFFFFFFFFFF16A2E0B8F03E13DD29455C5C2A3D"),
        bytes: 28,
    }
}

/// NIST P-256 (secp256r1) parameters, FIPS 186-4 / SEC 2 §2.7.
fn p256() -> CurveParams {
    CurveParams {
        p: bn("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF"),
        a: bn("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC"),
        b: bn("5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B"),
        gx: bn("6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296"),
        gy: bn("4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"),
        n: bn("FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551"),
        bytes: 32,
    }
}

/// NIST P-384 (secp384r1) parameters, FIPS 186-4 / SEC 2 §2.8.
fn p384() -> CurveParams {
    CurveParams {
        p: bn("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFF"),
        a: bn("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFC"),
        b: bn("B3312FA7E23EE7E4988E056BE3F82D19181D9C6EFE8141120314088F5013875AC656398D8A2ED19D2A85C8EDD3EC2AEF"),
        gx: bn("AA87CA22BE8B05378EB1C71EF320AD746E1D3B628BA79B9859F741E082542A385502F25DBF55296C3A545E3872760AB7"),
        gy: bn("3617DE4A96262C6F5D9E98BF9292DC29F8F41DBD289A147CE9DA3113B5F0B8C00A60B1CE1D7E819D7A431D7C90EA0E5F"),
        n: bn("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF581A0DB248B0A77AECEC196ACCC52973"),
        bytes: 48,
    }
}

/// NIST P-521 (secp521r1) parameters, FIPS 186-4 / SEC 2 §2.9.
fn p521() -> CurveParams {
    CurveParams {
        p: bn("01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"),
        a: bn("01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC"),
        b: bn("0051953EB9618E1C9A1F929A21A0B68540EEA2DA725B99B315F3B8B489918EF109E156193951EC7E937B1652C0BD3BB1BF073573DF883D2C34F1EF451FD46B503F00"),
        gx: bn("00C6858E06B70404E9CD9E3ECB662395B4429C648139053FB521F828AF606B4D3DBAA14B5E77EFE75928FE1DC127A2FFA8DE3348B3C1856A429BF97E7E31C2E5BD66"),
        gy: bn("011839296A789A3BC0045C8A5FB42C7D1BD998F54449579B446817AFBD17273E662C97EE72995EF42640C550B9013FAD0761353C7086A272C24088BE94769FD16650"),
        n: bn("01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFA51868783BF2F966B7FCC0148F709A5D03BB5C9B8899C47AEBB6FB71E91386409"),
        bytes: 66,
    }
}

/// Barreto-Naehrig BN P-256 parameters, TPM 2.0 Structures, TPM_ECC_BN_P256.
fn bn256() -> CurveParams {
    CurveParams {
        p: bn("FFFFFFFFFFFCF0CD46E5F25EEE71A49F0CDC65FB12980A82D3292DDBAED33013"),
        a: BigInt::from(0),
        b: BigInt::from(3),
        gx: BigInt::from(1),
        gy: BigInt::from(2),
        n: bn("FFFFFFFFFFFCF0CD46E5F25EEE71A49E0CDC65FB1299921AF62D536CD10B500D"),
        bytes: 32,
    }
}

/// Barreto-Naehrig BN P-638 parameters, TPM 2.0 Structures, TPM_ECC_BN_P638.
fn bn638() -> CurveParams {
    let p = bn(
        "23FFFFFDC000000D7FFFFFB8000001D3FFFFF942D000165E3FFF94870000D52F\
         FFFDD0E00008DE55C00086520021E55BFFFFF51FFFF4EB800000004C80015ACD\
         FFFFFFFFFFFFECE00000000000000067",
    );
    CurveParams {
        gx: &p - BigInt::from(1),
        p,
        a: BigInt::from(0),
        b: BigInt::from(0x101),
        gy: BigInt::from(0x10),
        n: bn(
            "23FFFFFDC000000D7FFFFFB8000001D3FFFFF942D000165E3FFF94870000D52F\
             FFFDD0E00008DE55600086550021E555FFFFF54FFFF4EAC000000049800154D9\
             FFFFFFFFFFFFEDA00000000000000061",
        ),
        bytes: 80,
    }
}

/// SM2 prime curve parameters, GB/T 32918.5-2017.
fn sm256() -> CurveParams {
    CurveParams {
        p: bn("FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFF"),
        a: bn("FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFC"),
        b: bn("28E9FA9E9D9F5E344D5A9E4BCF6509A7F39789F515AB8F92DDBCBD414D940E93"),
        gx: bn("32C4AE2C1F1981195F9904466A39C9948FE30BBFF2660BE1715A4589334C74C7"),
        gy: bn("BC3736A2F4F6779C59BDCEE36B692153D0A9877CC62A474002DF32E52139F0A0"),
        n: bn("FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFF7203DF6B21C6052B53BBF40939D54123"),
        bytes: 32,
    }
}
