//! ECDSA signatures over the named short Weierstrass curves
//!
//! [`SigningKey`] and [`VerifyingKey`] are bound to a curve from the
//! `ecsig_algorithms` registry. Signing is deterministic (RFC 6979) unless
//! the caller supplies a nonce, an RNG or extra entropy; verification
//! returns `Ok(false)` for a well-formed signature that does not match and
//! an error for one that is malformed.

#![forbid(unsafe_code)]

pub mod ecdsa;
pub mod error;

pub use ecdsa::{
    EcdhConfig, PrivateKeyFormat, SharedSecretFormat, SignOptions, Signature, SigningKey,
    VerifyingKey, ZeroSecretPolicy,
};
