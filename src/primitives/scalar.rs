//! Fixed-width encoding of scalars modulo a subgroup order.
//!
//! Scalars are unsigned, big-endian and left-padded to the byte length of the
//! order, so every value in `[0, n)` has exactly one encoding.

use num_bigint::BigUint;

use crate::{Error, Result};

/// Returns the number of bytes in an encoded scalar for `order`.
pub fn scalar_len(order: &BigUint) -> usize {
    (order.bits() as usize).div_ceil(8)
}

/// Encodes `value`, which must be smaller than `order`.
pub fn encode_scalar(value: &BigUint, order: &BigUint) -> Result<Vec<u8>> {
    if value >= order {
        return Err(Error::InvalidScalar(
            "Scalar value must be less than group order".to_string(),
        ));
    }
    let len = scalar_len(order);
    let bytes = value.to_bytes_be();
    let mut out = vec![0u8; len];
    out[len - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

/// Decodes a scalar produced by [`encode_scalar`].
pub fn decode_scalar(bytes: &[u8], order: &BigUint) -> Result<BigUint> {
    let len = scalar_len(order);
    if bytes.len() != len {
        return Err(Error::InvalidScalar(format!(
            "Expected {} bytes, got {}",
            len,
            bytes.len()
        )));
    }
    let value = BigUint::from_bytes_be(bytes);
    if &value >= order {
        return Err(Error::InvalidScalar(
            "Scalar value must be less than group order".to_string(),
        ));
    }
    Ok(value)
}
