//! Non-interactive discrete-logarithm equality (DLEQ) proofs over elliptic
//! curves.
//!
//! A prover who knows `x` with `H = xG` and `Z = xM` convinces anyone holding
//! `(G, H, M, Z)` that both points share the same discrete logarithm, without
//! revealing `x`. The construction is the Chaum-Pedersen sigma protocol made
//! non-interactive with the Fiat-Shamir transformation: the challenge is the
//! hash of `G ‖ H ‖ M ‖ Z ‖ A ‖ B` reduced modulo the group order.
//!
//! Curves are pluggable through the [`Curve`] trait. NIST P-256 is backed by
//! the `p256` crate; secp256k1 and arbitrary prime-order short Weierstrass
//! curves are provided by [`CurveParams`].
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use dleq::{Curve, EncodedProof, HashAlgorithm, NistP256, Point, Proof, SecureRng};
//! use num_bigint::BigUint;
//!
//! let curve: Arc<dyn Curve> = Arc::new(NistP256::new());
//! let mut rng = SecureRng::new();
//!
//! let g = Point::generator(Arc::clone(&curve));
//! let (_, k) = dleq::random_scalar(&*curve, &mut rng).unwrap();
//! let m = g.mul(&k).unwrap();
//!
//! let x = BigUint::from(0x5ec2e7u32);
//! let h = g.mul(&x).unwrap();
//! let z = m.mul(&x).unwrap();
//!
//! let proof = Proof::new(HashAlgorithm::Sha256, &g, &h, &m, &z, &x, &mut rng).unwrap();
//! assert!(proof.verify());
//!
//! let json = serde_json::to_string(&EncodedProof::from_proof(&proof).unwrap()).unwrap();
//! let received: EncodedProof = serde_json::from_str(&json).unwrap();
//! assert!(received.verify());
//! ```

#![forbid(unsafe_code)]

/// Command-line configuration.
#[cfg(feature = "cli")]
pub mod config;
/// Error types.
pub mod error;
/// Curves, points, scalars, hashing and randomness.
pub mod primitives;
/// Proof construction, verification and encoding.
pub mod protocol;

pub use error::{Error, Result};
pub use primitives::{
    curves, random_scalar, Affine, Curve, CurveParams, HashAlgorithm, NistP256, Point, SecureRng,
};
pub use protocol::{EncodedProof, Proof, Transcript};
