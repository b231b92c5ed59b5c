//! Constant values for the ecsig library
//!
//! Pure data: named-curve domain parameters, object identifiers, PEM labels
//! and hash sizes. No code in this crate depends on a big-integer type.

pub mod traditional;
pub mod utils;
