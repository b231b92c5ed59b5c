//! Utilities for the ecsig library
//!
//! Conversions between big integers and fixed-width big-endian byte strings,
//! plus the helpers that turn an entropy source (or a seed) into a scalar in
//! `[1, n-1]`.

pub mod convert;
pub mod entropy;

pub use convert::{
    bit_length, int_from_bytes, int_to_bytes, int_to_bytes_crop, int_to_fixed_bytes, orderlen,
};
pub use entropy::{random_scalar, scalar_from_seed, SeededPrng};
