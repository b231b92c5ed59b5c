//! Big-endian conversions between `BigUint` and byte strings

use ecsig_api::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// Number of significant bits in `n` (zero has length zero)
pub fn bit_length(n: &BigUint) -> usize {
    n.bits() as usize
}

/// Bytes needed to hold any value below `order`
pub fn orderlen(order: &BigUint) -> usize {
    (bit_length(order) + 7) / 8
}

/// Interpret `bytes` as an unsigned big-endian integer
pub fn int_from_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Minimal big-endian encoding; zero encodes as a single `0x00`
pub fn int_to_bytes(value: &BigUint) -> Vec<u8> {
    value.to_bytes_be()
}

/// Encode `value` left-padded with zeros to exactly `len` bytes.
///
/// Fails if the value does not fit.
pub fn int_to_fixed_bytes(value: &BigUint, len: usize) -> Result<Vec<u8>> {
    if value.is_zero() {
        return Ok(vec![0u8; len]);
    }
    let raw = value.to_bytes_be();
    if raw.len() > len {
        return Err(Error::InvalidLength {
            context: "int_to_fixed_bytes",
            expected: len,
            actual: raw.len(),
        });
    }
    let mut out = vec![0u8; len - raw.len()];
    out.extend_from_slice(&raw);
    Ok(out)
}

/// Encode `value` to exactly `len` bytes, keeping the least significant
/// bytes when it is too wide
pub fn int_to_bytes_crop(value: &BigUint, len: usize) -> Vec<u8> {
    let raw = value.to_bytes_be();
    if raw.len() >= len {
        return raw[raw.len() - len..].to_vec();
    }
    let mut out = vec![0u8; len - raw.len()];
    out.extend_from_slice(&raw);
    out
}
