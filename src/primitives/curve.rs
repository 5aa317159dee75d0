use core::fmt::Debug;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::Result;

/// Affine coordinates of a curve point.
///
/// The point at infinity is represented as `(0, 0)`, which never satisfies a
/// short Weierstrass equation with a non-zero constant term.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Affine {
    /// The x-coordinate.
    pub x: BigUint,
    /// The y-coordinate.
    pub y: BigUint,
}

impl Affine {
    /// Creates a coordinate pair.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// Returns the point at infinity.
    pub fn infinity() -> Self {
        Self::default()
    }

    /// Checks if this is the point at infinity.
    pub fn is_infinity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

/// Trait for elliptic curves usable in DLEQ proofs.
///
/// This is the capability set the proof engine relies on: membership testing,
/// point addition, scalar multiplication and the public curve parameters.
/// Implementations must be immutable and shareable across threads.
pub trait Curve: Debug + Send + Sync {
    /// Returns the name identifying this curve.
    fn name(&self) -> &str;

    /// Returns the prime `p` of the underlying field.
    fn field_modulus(&self) -> &BigUint;

    /// Returns the order `n` of the subgroup generated by the base point.
    fn order(&self) -> &BigUint;

    /// Returns the coefficient `a` of `y^2 = x^3 + ax + b`.
    fn a(&self) -> &BigUint;

    /// Returns the coefficient `b` of `y^2 = x^3 + ax + b`.
    fn b(&self) -> &BigUint;

    /// Returns the base point of the curve.
    fn base_point(&self) -> Affine;

    /// Checks whether `point` satisfies the curve equation.
    ///
    /// The point at infinity is never on the curve.
    fn is_on_curve(&self, point: &Affine) -> bool;

    /// Adds two points.
    ///
    /// Either input may be the point at infinity. Fails with
    /// [`Error::PointOffCurve`](crate::Error::PointOffCurve) if a finite
    /// input is not on the curve.
    fn add(&self, a: &Affine, b: &Affine) -> Result<Affine>;

    /// Multiplies `point` by the scalar `k`.
    ///
    /// `k` may be any non-negative integer; it is reduced modulo the order.
    fn scalar_mult(&self, point: &Affine, k: &BigUint) -> Result<Affine>;

    /// Returns the byte length of an encoded field element.
    fn coordinate_len(&self) -> usize {
        (self.field_modulus().bits() as usize).div_ceil(8)
    }
}
