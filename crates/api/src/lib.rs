//! Public API types for the ecsig library
//!
//! This crate holds the error type shared by every ecsig component together
//! with the result alias and the helpers used to attach context to failures
//! as they cross crate boundaries.

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use error::validate;
