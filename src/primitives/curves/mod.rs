//! Built-in curve providers.

use std::sync::Arc;

use crate::primitives::curve::Curve;
use crate::{Error, Result};

/// NIST P-256 backed by the `p256` crate.
pub mod p256;
/// Generic short Weierstrass curves (secp256k1, custom parameters).
pub mod weierstrass;

pub use self::p256::NistP256;
pub use weierstrass::CurveParams;

/// Name shared by both P-256 implementations.
pub(crate) const P256_NAME: &str = "P-256";

/// Names accepted by [`by_name`].
pub const CURVE_NAMES: &[&str] = &[P256_NAME, "secp256k1"];

/// Resolves one of the built-in curves by name.
///
/// Lookup is case-insensitive; `secp256r1` and `prime256v1` are accepted as
/// aliases for P-256.
pub fn by_name(name: &str) -> Result<Arc<dyn Curve>> {
    match name.to_ascii_lowercase().as_str() {
        "p-256" | "p256" | "secp256r1" | "prime256v1" => Ok(Arc::new(NistP256::new())),
        "secp256k1" => Ok(Arc::new(CurveParams::secp256k1())),
        _ => Err(Error::UnknownCurve(name.to_string())),
    }
}
