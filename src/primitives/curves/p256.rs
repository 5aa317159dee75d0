//! NIST P-256 (secp256r1) backed by the RustCrypto `p256` crate.
//!
//! # Security Level
//!
//! P-256 provides approximately 128 bits of security against classical attacks.
//!
//! # Performance
//!
//! Scalar multiplication runs in constant time inside `p256`; only the
//! conversions between big integers and field bytes happen here.

use num_bigint::BigUint;
use p256::elliptic_curve::ops::Reduce;
use p256::elliptic_curve::sec1::{Coordinates, FromEncodedPoint, ToEncodedPoint};
use p256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar as P256Scalar, U256};

use super::weierstrass::{hex_constant, P256_B, P256_GX, P256_GY, P256_N, P256_P};
use crate::primitives::curve::{Affine, Curve};
use crate::{Error, Result};

/// Number of bytes in a P-256 field element (32 bytes).
const P256_FIELD_BYTES: usize = 32;

/// NIST P-256 elliptic curve.
#[derive(Clone, Debug)]
pub struct NistP256 {
    p: BigUint,
    n: BigUint,
    a: BigUint,
    b: BigUint,
}

impl NistP256 {
    /// Creates a handle to the P-256 curve.
    pub fn new() -> Self {
        let p = hex_constant(P256_P);
        Self {
            n: hex_constant(P256_N),
            a: &p - 3u32,
            b: hex_constant(P256_B),
            p,
        }
    }

    fn to_projective(&self, point: &Affine) -> Result<ProjectivePoint> {
        if point.is_infinity() {
            return Ok(ProjectivePoint::IDENTITY);
        }

        let x = field_bytes(&point.x).ok_or(Error::PointOffCurve)?;
        let y = field_bytes(&point.y).ok_or(Error::PointOffCurve)?;
        let encoded = EncodedPoint::from_affine_coordinates(&x, &y, false);

        Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .map(ProjectivePoint::from)
            .ok_or(Error::PointOffCurve)
    }
}

impl Default for NistP256 {
    fn default() -> Self {
        Self::new()
    }
}

/// Left-pads a non-negative integer into 32 big-endian bytes.
fn field_bytes(value: &BigUint) -> Option<FieldBytes> {
    let bytes = value.to_bytes_be();
    if bytes.len() > P256_FIELD_BYTES {
        return None;
    }
    let mut out = FieldBytes::default();
    out[P256_FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
    Some(out)
}

fn from_projective(point: &ProjectivePoint) -> Affine {
    let encoded = point.to_affine().to_encoded_point(false);
    match encoded.coordinates() {
        Coordinates::Uncompressed { x, y } => {
            Affine::new(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y))
        }
        _ => Affine::infinity(),
    }
}

impl Curve for NistP256 {
    fn name(&self) -> &str {
        super::P256_NAME
    }

    fn field_modulus(&self) -> &BigUint {
        &self.p
    }

    fn order(&self) -> &BigUint {
        &self.n
    }

    fn a(&self) -> &BigUint {
        &self.a
    }

    fn b(&self) -> &BigUint {
        &self.b
    }

    fn base_point(&self) -> Affine {
        Affine::new(hex_constant(P256_GX), hex_constant(P256_GY))
    }

    fn is_on_curve(&self, point: &Affine) -> bool {
        !point.is_infinity() && self.to_projective(point).is_ok()
    }

    fn add(&self, a: &Affine, b: &Affine) -> Result<Affine> {
        let a = self.to_projective(a)?;
        let b = self.to_projective(b)?;
        Ok(from_projective(&(a + b)))
    }

    fn scalar_mult(&self, point: &Affine, k: &BigUint) -> Result<Affine> {
        let point = self.to_projective(point)?;
        let reduced = k % &self.n;
        let bytes = field_bytes(&reduced)
            .unwrap_or_else(|| unreachable!("scalars reduced modulo n fit in 32 bytes"));
        let scalar = <P256Scalar as Reduce<U256>>::reduce_bytes(&bytes);
        Ok(from_projective(&(point * scalar)))
    }
}
