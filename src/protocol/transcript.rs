//! Fiat-Shamir transcript for non-interactive proofs.
//!
//! The challenge is the hash of the marshaled points `G, H, M, Z, A, B`, in that
//! order and without framing, read as a big-endian integer and reduced modulo
//! the subgroup order. Point encodings have a fixed size per curve, so the
//! concatenation is unambiguous.

use num_bigint::BigUint;
use sha2::digest::DynDigest;

use crate::primitives::{HashAlgorithm, Point};

/// Transcript wrapper for Fiat-Shamir transformation.
pub struct Transcript {
    hasher: Box<dyn DynDigest + Send>,
}

impl Transcript {
    /// Creates an empty transcript hashed with `hash`.
    pub fn new(hash: HashAlgorithm) -> Self {
        Self {
            hasher: hash.hasher(),
        }
    }

    /// Appends the encoding of a single point.
    pub fn append_point(&mut self, point: &Point) {
        self.hasher.update(&point.marshal());
    }

    /// Appends the generators and public points, in the order `G, H, M, Z`.
    pub fn append_statement(&mut self, g: &Point, h: &Point, m: &Point, z: &Point) {
        self.append_point(g);
        self.append_point(h);
        self.append_point(m);
        self.append_point(z);
    }

    /// Appends the commitment values `A = sG`, `B = sM`.
    pub fn append_commitment(&mut self, a: &Point, b: &Point) {
        self.append_point(a);
        self.append_point(b);
    }

    /// Finalizes the transcript into a challenge scalar modulo `order`.
    pub fn challenge(self, order: &BigUint) -> BigUint {
        let digest = self.hasher.finalize();
        BigUint::from_bytes_be(&digest) % order
    }
}
