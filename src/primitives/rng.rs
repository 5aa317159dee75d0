//! Cryptographically secure randomness and unbiased scalar sampling.

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::{CryptoRng, CryptoRngCore, OsRng, RngCore};
use tracing::trace;
use zeroize::Zeroizing;

use super::curve::Curve;
use crate::{Error, Result};

/// Masks for the most significant byte, indexed by `bit_len % 8`.
///
/// Index 0 keeps the whole byte; index `i` keeps the low `i` bits, discarding
/// bits beyond the order's bit length when it is not a whole number of bytes.
const MASK: [u8; 8] = [0xff, 0x01, 0x03, 0x07, 0x0f, 0x1f, 0x3f, 0x7f];

/// Maximum number of consecutive rejected candidates before giving up.
///
/// Each masked candidate is accepted with probability above 1/2, so a healthy
/// source exceeds this bound with probability below 2^-256.
const MAX_SAMPLING_ATTEMPTS: usize = 256;

/// Cryptographically secure random number generator.
///
/// This is a thin wrapper around `OsRng` that provides a consistent interface
/// for cryptographic randomness throughout the library.
pub struct SecureRng(OsRng);

impl SecureRng {
    /// Creates a new cryptographically secure random number generator.
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SecureRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand_core::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRng {}

/// Samples a uniformly random scalar in `[0, n)` where `n` is the curve order.
///
/// Returns both the big-endian byte form (zeroized on drop) and the integer.
///
/// # Errors
///
/// Fails with [`Error::Entropy`] if the entropy source cannot supply bytes and
/// with [`Error::SamplingExhausted`] if it keeps producing out-of-range values.
pub fn random_scalar<R: CryptoRngCore + ?Sized>(
    curve: &dyn Curve,
    rng: &mut R,
) -> Result<(Zeroizing<Vec<u8>>, BigUint)> {
    sample_below(curve.order(), rng)
}

/// Rejection-samples a value below `order`.
///
/// Reducing a random value modulo `order` would bias the result towards small
/// values whenever `order` is not a power of two.
pub(crate) fn sample_below<R: CryptoRngCore + ?Sized>(
    order: &BigUint,
    rng: &mut R,
) -> Result<(Zeroizing<Vec<u8>>, BigUint)> {
    if order.is_zero() {
        return Err(Error::InvalidParams(
            "subgroup order cannot be zero".to_string(),
        ));
    }

    let bit_len = order.bits() as usize;
    let byte_len = bit_len.div_ceil(8);
    let mut buf = Zeroizing::new(vec![0u8; byte_len]);

    for attempt in 0..MAX_SAMPLING_ATTEMPTS {
        rng.try_fill_bytes(&mut buf)?;
        buf[0] &= MASK[bit_len % 8];

        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate < order {
            return Ok((buf, candidate));
        }
        trace!(attempt, "rejected out-of-range scalar candidate");
    }

    Err(Error::SamplingExhausted(MAX_SAMPLING_ATTEMPTS))
}
