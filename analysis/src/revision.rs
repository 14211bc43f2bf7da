//! TPM specification revision handling.
//!
//! Several formulas changed across revisions of the TPM 2.0 library
//! specification: the EC-Schnorr hashing convention was reworked in the 1.33
//! errata, and ECDAA moved to a hashed nonce commitment in revision 1.36.
//! Rather than comparing floating-point version numbers at each branch, a
//! revision is collapsed once into an [Era] and the formulas match on that.

use std::fmt;

/// A TPM 2.0 library specification revision, stored in hundredths
/// (1.38 is `138`) so comparisons stay exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(u16);

impl Revision {
    /// Assumed when a device report carries no usable revision.
    pub const DEFAULT: Revision = Revision(138);

    /// Builds a revision from hundredths (1.59 is `159`).
    pub fn from_hundredths(value: u16) -> Self {
        Self(value)
    }

    /// Builds a revision from the `TPM2_PT_REVISION` value of a capability
    /// report. Reports that failed to parse upstream are conventionally
    /// `0.0`, which maps to [Revision::DEFAULT].
    pub fn from_report(value: f64) -> Self {
        if value <= 0.0 {
            return Self::DEFAULT;
        }
        Self((value * 100.0).round() as u16)
    }

    /// The formula era this revision falls in. Boundaries: 1.33 (EC-Schnorr
    /// hashing rework) and 1.36 (hashed ECDAA nonce commitment).
    pub fn era(&self) -> Era {
        match self.0 {
            0..=132 => Era::Rev116,
            133..=135 => Era::Rev133,
            _ => Era::Rev136,
        }
    }
}

impl Default for Revision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A band of specification revisions sharing one set of formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Era {
    /// Revisions before the 1.33 errata.
    Rev116,
    /// Revisions 1.33 through 1.35.
    Rev133,
    /// Revisions 1.36 and later.
    Rev136,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_era_boundaries() {
        assert_eq!(Revision::from_hundredths(116).era(), Era::Rev116);
        assert_eq!(Revision::from_hundredths(132).era(), Era::Rev116);
        assert_eq!(Revision::from_hundredths(133).era(), Era::Rev133);
        assert_eq!(Revision::from_hundredths(135).era(), Era::Rev133);
        assert_eq!(Revision::from_hundredths(136).era(), Era::Rev136);
        assert_eq!(Revision::from_hundredths(159).era(), Era::Rev136);
    }

    #[test]
    fn test_eras_are_ordered() {
        assert!(Era::Rev116 < Era::Rev133);
        assert!(Era::Rev133 < Era::Rev136);
    }

    #[test]
    fn test_from_report() {
        assert_eq!(Revision::from_report(1.38), Revision::from_hundredths(138));
        assert_eq!(Revision::from_report(1.59), Revision::from_hundredths(159));
        assert_eq!(Revision::from_report(1.16), Revision::from_hundredths(116));
        // Unknown revisions are reported as 0.0 upstream.
        assert_eq!(Revision::from_report(0.0), Revision::DEFAULT);
        assert_eq!(Revision::from_report(-1.0), Revision::DEFAULT);
    }

    #[test]
    fn test_default_is_138() {
        assert_eq!(Revision::default(), Revision::from_hundredths(138));
        assert_eq!(Revision::DEFAULT.era(), Era::Rev136);
    }

    #[test]
    fn test_display() {
        assert_eq!(Revision::from_hundredths(138).to_string(), "1.38");
        assert_eq!(Revision::from_hundredths(107).to_string(), "1.07");
    }
}
