use num_bigint::BigUint;
use subtle::ConstantTimeEq;
use tracing::debug;

use super::{Proof, Transcript};
use crate::primitives::scalar::encode_scalar;
use crate::Result;

impl Proof {
    /// Verifies the proof.
    ///
    /// Recomputes `A' = RG + CH` and `B' = RM + CZ`, hashes them together with
    /// the public points and accepts iff the result equals `C`. Malformed
    /// proofs are simply invalid: this never returns an error.
    ///
    /// The final comparison is constant-time over fixed-width encodings.
    pub fn verify(&self) -> bool {
        if !self.is_sane() {
            debug!("rejecting proof that failed sanity checks");
            return false;
        }

        let recomputed = match self.recompute_challenge() {
            Ok(c) => c,
            Err(err) => {
                debug!(%err, "rejecting proof: commitment recomputation failed");
                return false;
            }
        };

        let order = self.g.curve().order();
        let (Ok(expected), Ok(actual)) =
            (encode_scalar(&self.c, order), encode_scalar(&recomputed, order))
        else {
            return false;
        };

        let valid: bool = expected.as_slice().ct_eq(actual.as_slice()).into();
        if !valid {
            debug!(hash = %self.hash, "rejecting proof: challenge mismatch");
        }
        valid
    }

    /// Computes `C' = H(G, H, M, Z, RG + CH, RM + CZ)`.
    fn recompute_challenge(&self) -> Result<BigUint> {
        let a = self.g.mul(&self.r)?.add(&self.h.mul(&self.c)?)?;
        let b = self.m.mul(&self.r)?.add(&self.z.mul(&self.c)?)?;

        let mut transcript = Transcript::new(self.hash);
        transcript.append_statement(&self.g, &self.h, &self.m, &self.z);
        transcript.append_commitment(&a, &b);
        Ok(transcript.challenge(self.g.curve().order()))
    }
}
