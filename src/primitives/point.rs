use core::fmt;
use std::sync::Arc;

use num_bigint::BigUint;

use super::curve::{Affine, Curve};
use crate::{Error, Result};

/// SEC1 tag byte for uncompressed points.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// A point on an elliptic curve, together with the curve it belongs to.
///
/// Points are immutable values. Constructing a point only checks that its
/// coordinates are field elements; curve membership is a separate, explicit
/// step ([`Point::is_on_curve`]) that must pass before the point is trusted.
#[derive(Clone)]
pub struct Point {
    curve: Arc<dyn Curve>,
    coords: Affine,
}

impl Point {
    /// Creates a point from coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPoint`] if either coordinate is not smaller than
    /// the field modulus.
    pub fn new(curve: Arc<dyn Curve>, x: BigUint, y: BigUint) -> Result<Self> {
        if &x >= curve.field_modulus() || &y >= curve.field_modulus() {
            return Err(Error::InvalidPoint);
        }
        Ok(Self {
            curve,
            coords: Affine::new(x, y),
        })
    }

    /// Returns the base point of `curve`.
    pub fn generator(curve: Arc<dyn Curve>) -> Self {
        let coords = curve.base_point();
        Self { curve, coords }
    }

    /// Returns the curve this point belongs to.
    pub fn curve(&self) -> &Arc<dyn Curve> {
        &self.curve
    }

    /// Returns the x-coordinate.
    pub fn x(&self) -> &BigUint {
        &self.coords.x
    }

    /// Returns the y-coordinate.
    pub fn y(&self) -> &BigUint {
        &self.coords.y
    }

    /// Checks whether the point satisfies its curve equation.
    pub fn is_on_curve(&self) -> bool {
        self.curve.is_on_curve(&self.coords)
    }

    /// Checks whether both points belong to the same group.
    ///
    /// Two curves are the same group when their names, field moduli,
    /// coefficients, base points and subgroup orders all match, so different
    /// providers of one curve interoperate.
    pub fn same_curve(&self, other: &Point) -> bool {
        let (lhs, rhs) = (&self.curve, &other.curve);
        lhs.name() == rhs.name()
            && lhs.field_modulus() == rhs.field_modulus()
            && lhs.a() == rhs.a()
            && lhs.b() == rhs.b()
            && lhs.order() == rhs.order()
            && lhs.base_point() == rhs.base_point()
    }

    /// Encodes the point as `0x04 || X || Y`.
    ///
    /// Each coordinate is big-endian and left-padded to the byte length of the
    /// field modulus, so the encoding has a fixed size per curve.
    pub fn marshal(&self) -> Vec<u8> {
        let len = self.curve.coordinate_len();
        let mut out = vec![0u8; 1 + 2 * len];
        out[0] = UNCOMPRESSED_TAG;
        fill_be(&mut out[1..1 + len], &self.coords.x);
        fill_be(&mut out[1 + len..], &self.coords.y);
        out
    }

    /// Decodes a point produced by [`Point::marshal`].
    ///
    /// The result is NOT checked for curve membership.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPoint`] on a wrong length or tag byte, or if a
    /// coordinate is not smaller than the field modulus.
    pub fn unmarshal(curve: Arc<dyn Curve>, data: &[u8]) -> Result<Self> {
        let len = curve.coordinate_len();
        if data.len() != 1 + 2 * len || data[0] != UNCOMPRESSED_TAG {
            return Err(Error::InvalidPoint);
        }
        let x = BigUint::from_bytes_be(&data[1..1 + len]);
        let y = BigUint::from_bytes_be(&data[1 + len..]);
        Self::new(curve, x, y)
    }

    /// Multiplies the point by `k`.
    pub fn mul(&self, k: &BigUint) -> Result<Self> {
        let coords = self.curve.scalar_mult(&self.coords, k)?;
        Ok(Self {
            curve: Arc::clone(&self.curve),
            coords,
        })
    }

    /// Adds two points on the same curve.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InconsistentCurves`] if the points belong to different
    /// groups.
    pub fn add(&self, other: &Point) -> Result<Self> {
        if !self.same_curve(other) {
            return Err(Error::InconsistentCurves);
        }
        let coords = self.curve.add(&self.coords, &other.coords)?;
        Ok(Self {
            curve: Arc::clone(&self.curve),
            coords,
        })
    }
}

/// Writes `value` big-endian into `buf`, left-padded with zeros.
///
/// Coordinates are always smaller than the field modulus, so they fit.
fn fill_be(buf: &mut [u8], value: &BigUint) {
    let bytes = value.to_bytes_be();
    let offset = buf.len().saturating_sub(bytes.len());
    let start = bytes.len().saturating_sub(buf.len());
    buf[offset..].copy_from_slice(&bytes[start..]);
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.same_curve(other) && self.coords == other.coords
    }
}

impl Eq for Point {}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("curve", &self.curve.name())
            .field("x", &format_args!("{:x}", self.coords.x))
            .field("y", &format_args!("{:x}", self.coords.y))
            .finish()
    }
}
