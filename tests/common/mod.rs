//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use dleq::{Affine, Curve, CurveParams, NistP256, Point};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Initialize test tracing (call once at the beginning of tests).
///
/// This sets up tracing for tests with DEBUG level output to the test writer,
/// so rejection reasons show up next to failing assertions.
/// Subsequent calls are safe and will be ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("dleq=debug");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// `y^2 = x^3 + x + 1` over GF(1051), a group of prime order 1009.
pub fn toy_curve() -> Arc<dyn Curve> {
    Arc::new(
        CurveParams::new(
            "toy-1051",
            BigUint::from(1051u32),
            BigUint::from(1u32),
            BigUint::from(1u32),
            BigUint::from(1009u32),
            Affine::new(BigUint::from(263u32), BigUint::from(393u32)),
        )
        .expect("toy curve parameters are valid"),
    )
}

/// `y^2 = x^3 + 6x + 44` over GF(1051): a different group that shares the
/// name, field and order of [`toy_curve`].
pub fn toy_curve_twin() -> Arc<dyn Curve> {
    Arc::new(
        CurveParams::new(
            "toy-1051",
            BigUint::from(1051u32),
            BigUint::from(6u32),
            BigUint::from(44u32),
            BigUint::from(1009u32),
            Affine::new(BigUint::from(1u32), BigUint::from(247u32)),
        )
        .expect("twin curve parameters are valid"),
    )
}

pub fn p256() -> Arc<dyn Curve> {
    Arc::new(NistP256::new())
}

pub fn secp256k1() -> Arc<dyn Curve> {
    Arc::new(CurveParams::secp256k1())
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A DLEQ statement `(G, H, M, Z)` together with its witness `x`.
pub struct Statement {
    pub g: Point,
    pub h: Point,
    pub m: Point,
    pub z: Point,
    pub x: BigUint,
}

/// Builds a statement with `G` the base point, `M = kG` and `x` as given.
pub fn statement(curve: Arc<dyn Curve>, k: u64, x: u64) -> Statement {
    let g = Point::generator(curve);
    let m = g.mul(&BigUint::from(k)).expect("valid multiplier");
    let x = BigUint::from(x);
    let h = g.mul(&x).expect("valid witness");
    let z = m.mul(&x).expect("valid witness");
    Statement { g, h, m, z, x }
}
