//! The DLEQ proof record.

use num_bigint::BigUint;

use crate::primitives::{HashAlgorithm, Point};

/// Non-interactive proof that `log_G(H) == log_M(Z)`.
///
/// Contains the generators `G`, `M`, the public points `H`, `Z`, the response
/// `R` and the challenge `C`. The intermediate commitments `A = sG` and
/// `B = sM` are not stored: the verifier recomputes them from `R` and `C` and
/// compares challenges instead of group elements.
///
/// # Security
///
/// - A proof holds no reference to the secret `x` or the nonce `s`
/// - Proofs are immutable and can be verified any number of times by anyone
/// - Decoded proofs are untrusted until [`Proof::verify`] accepts them
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    pub(crate) g: Point,
    pub(crate) m: Point,
    pub(crate) h: Point,
    pub(crate) z: Point,
    pub(crate) r: BigUint,
    pub(crate) c: BigUint,
    pub(crate) hash: HashAlgorithm,
}

impl Proof {
    /// Assembles a proof from its fields without any checks.
    ///
    /// This is meant for decoders; [`Proof::verify`] performs all the checks
    /// and rejects inconsistent values.
    pub fn from_parts(
        hash: HashAlgorithm,
        g: Point,
        h: Point,
        m: Point,
        z: Point,
        r: BigUint,
        c: BigUint,
    ) -> Self {
        Self {
            g,
            m,
            h,
            z,
            r,
            c,
            hash,
        }
    }

    /// Returns the first generator `G`.
    pub fn g(&self) -> &Point {
        &self.g
    }

    /// Returns the public point `H = xG`.
    pub fn h(&self) -> &Point {
        &self.h
    }

    /// Returns the second generator `M`.
    pub fn m(&self) -> &Point {
        &self.m
    }

    /// Returns the public point `Z = xM`.
    pub fn z(&self) -> &Point {
        &self.z
    }

    /// Returns the response `R = s - cx mod n`.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Returns the challenge `C`.
    pub fn c(&self) -> &BigUint {
        &self.c
    }

    /// Returns the hash algorithm used for the challenge.
    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// Runs the structural checks that must pass before verification.
    ///
    /// All four points must belong to one group and lie on its curve, and
    /// both scalars must be reduced modulo the subgroup order.
    pub fn is_sane(&self) -> bool {
        if !(self.g.same_curve(&self.h) && self.h.same_curve(&self.m) && self.m.same_curve(&self.z))
        {
            return false;
        }
        if !(self.g.is_on_curve()
            && self.h.is_on_curve()
            && self.m.is_on_curve()
            && self.z.is_on_curve())
        {
            return false;
        }
        let order = self.g.curve().order();
        &self.r < order && &self.c < order
    }
}
