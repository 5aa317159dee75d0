//! Generic short Weierstrass curves `y^2 = x^3 + ax + b` over a prime field.
//!
//! Arithmetic is done in affine coordinates with arbitrary-precision integers.
//! It is variable-time and considerably slower than a dedicated implementation
//! such as [`NistP256`](super::NistP256), but it works for any parameter set,
//! including the tiny curves used to test statistical properties.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::primitives::curve::{Affine, Curve};
use crate::{Error, Result};

const SECP256K1_P: &str = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";
const SECP256K1_N: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";
const SECP256K1_GX: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
const SECP256K1_GY: &str = "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

pub(crate) const P256_P: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";
pub(crate) const P256_N: &str = "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";
pub(crate) const P256_B: &str = "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b";
pub(crate) const P256_GX: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";
pub(crate) const P256_GY: &str = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";

/// Small primes used as Miller-Rabin witnesses.
///
/// The test is deterministic below 3.3 * 10^24 and probabilistic above.
const PRIMALITY_WITNESSES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Miller-Rabin primality test over a fixed witness set.
pub(crate) fn is_probable_prime(n: &BigUint) -> bool {
    if n < &BigUint::from(2u32) {
        return false;
    }
    for w in PRIMALITY_WITNESSES {
        let w = BigUint::from(w);
        if n == &w {
            return true;
        }
        if (n % &w).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for w in PRIMALITY_WITNESSES {
        let mut x = BigUint::from(w).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Parses a hex constant known at compile time.
pub(crate) fn hex_constant(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 16)
        .unwrap_or_else(|| unreachable!("curve constants are valid hex"))
}

/// Parameters of a short Weierstrass curve with cofactor 1.
#[derive(Clone, Debug)]
pub struct CurveParams {
    name: String,
    p: BigUint,
    a: BigUint,
    b: BigUint,
    n: BigUint,
    base: Affine,
}

impl CurveParams {
    /// Creates a curve from its parameters.
    ///
    /// `n` must be the order of the whole group, i.e. the cofactor is 1.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `p` is smaller than 5 or fails a Miller-Rabin primality test
    /// - `a` or `b` are not reduced modulo `p`, or `b` is zero
    /// - the curve is singular
    /// - `n` fails a Miller-Rabin primality test
    /// - the base point is not on the curve
    pub fn new(
        name: impl Into<String>,
        p: BigUint,
        a: BigUint,
        b: BigUint,
        n: BigUint,
        base: Affine,
    ) -> Result<Self> {
        if p < BigUint::from(5u32) || !is_probable_prime(&p) {
            return Err(Error::InvalidParams(
                "field modulus must be an odd prime".to_string(),
            ));
        }
        if a >= p || b >= p {
            return Err(Error::InvalidParams(
                "coefficients must be reduced modulo p".to_string(),
            ));
        }
        // (0, 0) stands for the point at infinity and must not be a curve point.
        if b.is_zero() {
            return Err(Error::InvalidParams(
                "coefficient b cannot be zero".to_string(),
            ));
        }
        let discriminant = (&a * &a * &a * 4u32 + &b * &b * 27u32) % &p;
        if discriminant.is_zero() {
            return Err(Error::InvalidParams("curve is singular".to_string()));
        }
        if !is_probable_prime(&n) {
            return Err(Error::InvalidParams(
                "subgroup order must be prime".to_string(),
            ));
        }

        let curve = Self {
            name: name.into(),
            p,
            a,
            b,
            n,
            base,
        };
        if !curve.is_on_curve(&curve.base) {
            return Err(Error::InvalidParams(
                "base point is not on the curve".to_string(),
            ));
        }
        Ok(curve)
    }

    /// The secp256k1 curve used by Bitcoin.
    pub fn secp256k1() -> Self {
        Self {
            name: "secp256k1".to_string(),
            p: hex_constant(SECP256K1_P),
            a: BigUint::zero(),
            b: BigUint::from(7u32),
            n: hex_constant(SECP256K1_N),
            base: Affine::new(hex_constant(SECP256K1_GX), hex_constant(SECP256K1_GY)),
        }
    }

    /// NIST P-256 evaluated with the generic formulas.
    ///
    /// It is the same group as [`NistP256`](super::NistP256) and points from
    /// the two implementations can be combined freely.
    pub fn p256() -> Self {
        let p = hex_constant(P256_P);
        Self {
            name: super::P256_NAME.to_string(),
            a: &p - 3u32,
            b: hex_constant(P256_B),
            n: hex_constant(P256_N),
            base: Affine::new(hex_constant(P256_GX), hex_constant(P256_GY)),
            p,
        }
    }

    fn ensure_valid(&self, point: &Affine) -> Result<()> {
        if point.is_infinity() || self.is_on_curve(point) {
            Ok(())
        } else {
            Err(Error::PointOffCurve)
        }
    }

    fn sub_mod(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + &self.p - (b % &self.p)) % &self.p
    }

    fn inv_mod(&self, a: &BigUint) -> BigUint {
        let exp = &self.p - 2u32;
        a.modpow(&exp, &self.p)
    }

    fn add_unchecked(&self, a: &Affine, b: &Affine) -> Affine {
        if a.is_infinity() {
            return b.clone();
        }
        if b.is_infinity() {
            return a.clone();
        }

        let p = &self.p;
        let lambda = if a.x == b.x {
            // Covers both P + (-P) and doubling a point with y = 0.
            if ((&a.y + &b.y) % p).is_zero() {
                return Affine::infinity();
            }
            let num = (&a.x * &a.x * 3u32 + &self.a) % p;
            let den = self.inv_mod(&((&a.y + &a.y) % p));
            (num * den) % p
        } else {
            let num = self.sub_mod(&b.y, &a.y);
            let den = self.inv_mod(&self.sub_mod(&b.x, &a.x));
            (num * den) % p
        };

        let x3 = self.sub_mod(&self.sub_mod(&((&lambda * &lambda) % p), &a.x), &b.x);
        let y3 = self.sub_mod(&((&lambda * self.sub_mod(&a.x, &x3)) % p), &a.y);
        Affine::new(x3, y3)
    }
}

impl Curve for CurveParams {
    fn name(&self) -> &str {
        &self.name
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
        self.base.clone()
    }

    fn is_on_curve(&self, point: &Affine) -> bool {
        if point.is_infinity() || point.x >= self.p || point.y >= self.p {
            return false;
        }
        let p = &self.p;
        let lhs = (&point.y * &point.y) % p;
        let rhs = (&point.x * &point.x * &point.x + &self.a * &point.x + &self.b) % p;
        lhs == rhs
    }

    fn add(&self, a: &Affine, b: &Affine) -> Result<Affine> {
        self.ensure_valid(a)?;
        self.ensure_valid(b)?;
        Ok(self.add_unchecked(a, b))
    }

    fn scalar_mult(&self, point: &Affine, k: &BigUint) -> Result<Affine> {
        self.ensure_valid(point)?;

        let k = k % &self.n;
        let mut acc = Affine::infinity();
        for i in (0..k.bits()).rev() {
            acc = self.add_unchecked(&acc, &acc);
            if k.bit(i) {
                acc = self.add_unchecked(&acc, point);
            }
        }
        Ok(acc)
    }
}
