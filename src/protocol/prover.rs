use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use tracing::debug;
use zeroize::Zeroizing;

use super::{Proof, Transcript};
use crate::primitives::{random_scalar, HashAlgorithm, Point};
use crate::{Error, Result};

impl Proof {
    /// Proves that `log_g(h) == log_m(z)` given the common exponent `x`.
    ///
    /// `g` and `m` are generators known to both parties, `h = xG` and `z = xM`.
    /// If the verifier already knows the four points, `(R, C)` is all it needs.
    ///
    /// # Security
    ///
    /// - `rng` must be a cryptographically secure source; [`SecureRng`](crate::SecureRng)
    ///   is the default choice
    /// - `x` and the nonce never leave this function
    ///
    /// # Errors
    ///
    /// - [`Error::InconsistentCurves`] if the points are on different curves
    /// - [`Error::PointOffCurve`] if a point does not satisfy its curve equation
    /// - [`Error::Entropy`] if `rng` fails
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    ///
    /// use dleq::{Curve, HashAlgorithm, NistP256, Point, Proof, SecureRng};
    /// use num_bigint::BigUint;
    ///
    /// let curve: Arc<dyn Curve> = Arc::new(NistP256::new());
    /// let g = Point::generator(Arc::clone(&curve));
    /// let m = g.mul(&BigUint::from(77u32)).unwrap();
    /// let x = BigUint::from(1234u32);
    /// let h = g.mul(&x).unwrap();
    /// let z = m.mul(&x).unwrap();
    ///
    /// let mut rng = SecureRng::new();
    /// let proof = Proof::new(HashAlgorithm::Sha256, &g, &h, &m, &z, &x, &mut rng).unwrap();
    /// assert!(proof.verify());
    /// ```
    pub fn new<R: CryptoRngCore + ?Sized>(
        hash: HashAlgorithm,
        g: &Point,
        h: &Point,
        m: &Point,
        z: &Point,
        x: &BigUint,
        rng: &mut R,
    ) -> Result<Self> {
        if !(g.same_curve(h) && h.same_curve(m) && m.same_curve(z)) {
            return Err(Error::InconsistentCurves);
        }
        if !(g.is_on_curve() && h.is_on_curve() && m.is_on_curve() && z.is_on_curve()) {
            return Err(Error::PointOffCurve);
        }
        let curve = g.curve();
        let order = curve.order();

        // s is a random element of Z/nZ
        let (_s_bytes, s) = random_scalar(&**curve, rng)?;
        let s = Zeroizing::new(s);

        // (A, B) = (sG, sM)
        let a = g.mul(&s)?;
        let b = m.mul(&s)?;

        // c = H(G, H, M, Z, A, B)
        let mut transcript = Transcript::new(hash);
        transcript.append_statement(g, h, m, z);
        transcript.append_commitment(&a, &b);
        let c = transcript.challenge(order);

        // r = s - cx (mod n)
        let x = Zeroizing::new(x % order);
        let cx = Zeroizing::new((&c * &*x) % order);
        let r = (&*s + order - &*cx) % order;

        debug!(curve = curve.name(), %hash, "constructed DLEQ proof");

        Ok(Self {
            g: g.clone(),
            m: m.clone(),
            h: h.clone(),
            z: z.clone(),
            r,
            c,
            hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::primitives::{Curve, CurveParams, NistP256};

    struct Setup {
        g: Point,
        h: Point,
        m: Point,
        z: Point,
        x: BigUint,
    }

    fn setup(curve: Arc<dyn Curve>) -> Setup {
        let g = Point::generator(curve);
        let m = g.mul(&BigUint::from(0xfeed_u32)).unwrap();
        let x = BigUint::from(0x00c0_ffee_u32);
        let h = g.mul(&x).unwrap();
        let z = m.mul(&x).unwrap();
        Setup { g, h, m, z, x }
    }

    #[test]
    fn response_satisfies_relation() {
        let s = setup(Arc::new(NistP256::new()));
        let mut rng = StdRng::seed_from_u64(3);
        let proof = Proof::new(HashAlgorithm::Sha256, &s.g, &s.h, &s.m, &s.z, &s.x, &mut rng)
            .unwrap();

        // rG + cH must equal the commitment sG, which is recoverable from the
        // same seeded source.
        let curve = s.g.curve();
        let (_, nonce) = random_scalar(&**curve, &mut StdRng::seed_from_u64(3)).unwrap();
        let a = s.g.mul(&nonce).unwrap();
        let recomputed = s
            .g
            .mul(proof.r())
            .unwrap()
            .add(&s.h.mul(proof.c()).unwrap())
            .unwrap();
        assert_eq!(recomputed, a);
    }

    #[test]
    fn rejects_inconsistent_curves() {
        let s = setup(Arc::new(NistP256::new()));
        let other = Point::generator(Arc::new(CurveParams::secp256k1()));
        let mut rng = StdRng::seed_from_u64(0);

        let result = Proof::new(HashAlgorithm::Sha256, &s.g, &s.h, &other, &s.z, &s.x, &mut rng);
        assert!(matches!(result, Err(Error::InconsistentCurves)));
    }

    #[test]
    fn rejects_off_curve_point() {
        let s = setup(Arc::new(NistP256::new()));
        let off = Point::new(Arc::clone(s.z.curve()), s.z.x().clone(), s.z.y() + 1u32).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let result = Proof::new(HashAlgorithm::Sha256, &s.g, &s.h, &s.m, &off, &s.x, &mut rng);
        assert!(matches!(result, Err(Error::PointOffCurve)));
    }

    #[test]
    fn secret_scalars_are_wiped() {
        use num_traits::Zero;
        use zeroize::Zeroize;

        let mut nonce = Zeroizing::new(BigUint::from(0xdead_beef_u64) << 200u32);
        assert!(!nonce.is_zero());
        nonce.zeroize();
        assert!(nonce.is_zero());
    }

    #[test]
    fn scalars_are_reduced() {
        let s = setup(Arc::new(NistP256::new()));
        let order = s.g.curve().order().clone();
        let mut rng = StdRng::seed_from_u64(11);

        // x + n is the same exponent as x.
        let x = &s.x + &order;
        let proof = Proof::new(HashAlgorithm::Sha512, &s.g, &s.h, &s.m, &s.z, &x, &mut rng)
            .unwrap();
        assert!(proof.r() < &order);
        assert!(proof.c() < &order);
        assert!(proof.verify());
    }
}
