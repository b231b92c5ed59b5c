//! Validation helpers for primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Require at least `min` bytes of input, reporting truncation as an
/// encoding error
#[inline(always)]
pub fn available(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::encoding(
            context,
            format!("truncated: need {} bytes, have {}", min, actual),
        ));
    }
    Ok(())
}
