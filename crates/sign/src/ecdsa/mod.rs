//! ECDSA (FIPS 186-4 section 6, SEC 1 section 4.1) over the registry curves
//!
//! Signing runs the RFC 6979 nonce derivation and retries with the next
//! candidate nonce if one produces `r = 0` or `s = 0`. Key agreement
//! (`d * Q`) lives on [`SigningKey`] as well, with the policy for degenerate
//! results in [`EcdhConfig`].

pub mod ecdh;
pub mod keys;
pub mod rfc6979;
pub mod signature;

pub use ecdh::{EcdhConfig, SharedSecretFormat, ZeroSecretPolicy};
pub use keys::{PrivateKeyFormat, SignOptions, SigningKey, VerifyingKey};
pub use signature::Signature;
