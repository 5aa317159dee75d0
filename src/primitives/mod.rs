//! Core cryptographic primitives for DLEQ proofs.
//!
//! This module contains the leaves the proof engine is built on:
//! - **curve**: the curve provider trait and affine coordinates
//! - **curves**: concrete curve providers (P-256, secp256k1, custom parameters)
//! - **point**: curve points with validation and a canonical encoding
//! - **scalar**: fixed-width scalar encoding
//! - **rng**: secure randomness and unbiased scalar sampling
//! - **hash**: hash functions selectable by identifier

/// Curve provider trait.
pub mod curve;
/// Built-in curve implementations.
pub mod curves;
/// Hash function selection.
pub mod hash;
/// Curve points.
pub mod point;
/// Cryptographically secure random number generation.
pub mod rng;
/// Scalar encoding.
pub mod scalar;

pub use curve::{Affine, Curve};
pub use curves::{CurveParams, NistP256};
pub use hash::HashAlgorithm;
pub use point::Point;
pub use rng::{random_scalar, SecureRng};
