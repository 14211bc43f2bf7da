//! The per-signature input record consumed by the core.
//!
//! Upstream tooling assembles one record per measured signature from archived
//! CSV/zip data and a device capability report; nothing beyond this shape is
//! required of it.

use crate::{key, scheme, Algorithm, Curve, Digest, Error, Revision, Signature, Verdict};
use num_bigint::BigInt;

/// One measured signature with everything needed to analyze it.
#[derive(Clone, Debug)]
pub struct SignatureRecord {
    pub curve: Curve,
    pub algorithm: Algorithm,
    /// Specification revision the device reported; [Revision::DEFAULT] when
    /// the report carried none.
    pub revision: Revision,
    pub signature: Signature,
    /// Hex-encoded message digest, nominally 2×curve-bytes characters.
    pub digest: String,
    /// Public key coordinates.
    pub public_key: (BigInt, BigInt),
    /// Private scalar, present only for known-key calibration measurements.
    pub private_key: Option<BigInt>,
    /// ECDAA nonce commitment point, when the measurement setup captured one.
    pub nonce_commitment: Option<(BigInt, BigInt)>,
}

impl SignatureRecord {
    /// Recovers the ephemeral nonce behind this record.
    ///
    /// Returns `Ok(None)` when the record carries no private key; recovery is
    /// only possible for known-key calibration data.
    pub fn recover_nonce(&self) -> Result<Option<String>, Error> {
        let Some(private) = &self.private_key else {
            return Ok(None);
        };
        let digest = Digest::parse(&self.digest)?;
        scheme::recover_nonce(
            self.curve,
            self.algorithm,
            self.revision,
            &self.signature,
            private,
            &digest,
        )
        .map(Some)
    }

    /// Re-verifies this record's signature.
    ///
    /// When a private key is present the public key is first calibrated
    /// against it, so data corruption surfaces as
    /// [Error::KeyConsistencyFailure] instead of an invalid verdict.
    pub fn verify(&self) -> Result<Verdict, Error> {
        let digest = Digest::parse(&self.digest)?;
        let (x, y) = &self.public_key;
        let public = match &self.private_key {
            Some(private) => key::reconstruct_calibrated(self.curve, x, y, private)?,
            None => key::reconstruct(self.curve, x, y)?,
        };
        let commitment = self
            .nonce_commitment
            .as_ref()
            .map(|(cx, cy)| key::reconstruct(self.curve, cx, cy))
            .transpose()?;
        scheme::verify(
            self.curve,
            self.algorithm,
            self.revision,
            &self.signature,
            &public,
            &digest,
            commitment.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::fixtures;
    use rand::{rngs::StdRng, SeedableRng};

    fn calibrated_record(seed: u64) -> (SignatureRecord, BigInt) {
        let mut rng = StdRng::seed_from_u64(seed);
        let curve = Curve::P256;
        let params = curve.params();
        let x = fixtures::scalar(&mut rng, curve);
        let public = params.mul(&x, &params.generator()).unwrap();
        let k = fixtures::scalar(&mut rng, curve);
        let digest = fixtures::digest(&mut rng, curve);
        let signature = fixtures::sign_ecdsa(curve, &k, &x, &digest);
        let record = SignatureRecord {
            curve,
            algorithm: Algorithm::Ecdsa,
            revision: Revision::DEFAULT,
            signature,
            digest: tpmscan_utils::hex(digest.as_bytes()),
            public_key: (public.x().unwrap().clone(), public.y().unwrap().clone()),
            private_key: Some(x),
            nonce_commitment: None,
        };
        (record, k)
    }

    #[test]
    fn test_calibrated_record_round_trip() {
        let (record, k) = calibrated_record(20);
        assert_eq!(record.verify().unwrap(), Verdict::Valid);
        let nonce = record.recover_nonce().unwrap().unwrap();
        assert_eq!(
            nonce,
            tpmscan_utils::hex(&tpmscan_utils::be_bytes(&k, record.curve.bytes()))
        );
    }

    #[test]
    fn test_recovery_needs_private_key() {
        let (mut record, _) = calibrated_record(21);
        record.private_key = None;
        assert_eq!(record.recover_nonce().unwrap(), None);
        // Verification still works from the public key alone.
        assert_eq!(record.verify().unwrap(), Verdict::Valid);
    }

    #[test]
    fn test_corrupt_keypair_detected() {
        let (mut record, _) = calibrated_record(22);
        record.private_key = Some(BigInt::from(2));
        assert!(matches!(
            record.verify(),
            Err(Error::KeyConsistencyFailure)
        ));
    }

    #[test]
    fn test_malformed_digest_rejected() {
        let (mut record, _) = calibrated_record(23);
        record.digest = "not hex".to_string();
        assert!(matches!(record.verify(), Err(Error::MalformedDigest(_))));
        assert!(matches!(
            record.recover_nonce(),
            Err(Error::MalformedDigest(_))
        ));
    }

    #[test]
    fn test_ecdaa_record_without_commitment() {
        let (mut record, _) = calibrated_record(24);
        record.algorithm = Algorithm::Ecdaa;
        assert_eq!(record.verify().unwrap(), Verdict::Indeterminate);
    }
}
