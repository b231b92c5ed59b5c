//! Key agreement for the ecsig library
//!
//! [`Ecdh`] wraps the `d * Q` primitive of `ecsig-sign` in a session that
//! tracks the working curve and both keys, and reports which piece is
//! missing or mismatched.

#![forbid(unsafe_code)]

pub mod ecdh;
pub mod error;

pub use ecdh::{Ecdh, EcdhConfig, SharedSecretFormat, ZeroSecretPolicy};
pub use error::{Error, Result};
