//! Registry of the signature algorithms TPM devices expose for ECC keys,
//! mapping between symbolic selectors and `TPM_ALG_ID` wire codes in both
//! directions.

use crate::Error;
use std::{fmt, str::FromStr};

/// Signature algorithm selector, `TPM_ALG_ID` in the TPM structures
/// specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Ecdsa,
    Ecdaa,
    Sm2,
    Ecschnorr,
}

impl Algorithm {
    /// Every supported algorithm, in wire-code order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Ecdsa,
        Algorithm::Ecdaa,
        Algorithm::Sm2,
        Algorithm::Ecschnorr,
    ];

    /// Resolves a `TPM_ALG_ID` wire code.
    pub fn from_wire(code: u16) -> Result<Self, Error> {
        match code {
            0x0018 => Ok(Algorithm::Ecdsa),
            0x001a => Ok(Algorithm::Ecdaa),
            0x001b => Ok(Algorithm::Sm2),
            0x001c => Ok(Algorithm::Ecschnorr),
            _ => Err(Error::UnknownAlgorithm(format!("{:#06x}", code))),
        }
    }

    /// The `TPM_ALG_ID` wire code.
    pub fn wire(&self) -> u16 {
        match self {
            Algorithm::Ecdsa => 0x0018,
            Algorithm::Ecdaa => 0x001a,
            Algorithm::Sm2 => 0x001b,
            Algorithm::Ecschnorr => 0x001c,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Ecdsa => "ECDSA",
            Algorithm::Ecdaa => "ECDAA",
            Algorithm::Sm2 => "SM2",
            Algorithm::Ecschnorr => "ECSCHNORR",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ECDSA" => Ok(Algorithm::Ecdsa),
            "ECDAA" => Ok(Algorithm::Ecdaa),
            "SM2" => Ok(Algorithm::Sm2),
            "ECSCHNORR" => Ok(Algorithm::Ecschnorr),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
