//! # ecsig
//!
//! ECDSA and ECDH over named short Weierstrass curves, in pure Rust.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecsig = "0.3"
//! ```
//!
//! ```
//! use ecsig::prelude::*;
//!
//! let key = SigningKey::from_seed(nist256p(), b"example seed").unwrap();
//! let signature = key.sign::<Sha256>(b"hello").unwrap();
//! assert!(key.verifying_key().verify::<Sha256>(&signature, b"hello").unwrap());
//! ```
//!
//! ## Features
//!
//! - `sign` (default): ECDSA keys, RFC 6979 signing and the `d * Q` primitive
//! - `kem` (default): the stateful [`kem::Ecdh`] session
//! - `trace`: `log` events from the scheme crates
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecsig-api`]: the shared error type
//! - [`ecsig-algorithms`]: field and point arithmetic, the curve registry,
//!   hashes, HMAC, DER and PEM
//! - [`ecsig-sign`]: ECDSA signing and verifying keys
//! - [`ecsig-kem`]: key agreement sessions

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use ecsig_algorithms as algorithms;
pub use ecsig_api as api;
pub use ecsig_common as common;
pub use ecsig_internal as internal;
pub use ecsig_params as params;
pub use ecsig_utils as utils;

// Feature-gated re-exports
#[cfg(feature = "kem")]
pub use ecsig_kem as kem;

#[cfg(feature = "sign")]
pub use ecsig_sign as sign;

// Third-party types that appear in the public API
pub use num_bigint;
pub use rand;
pub use zeroize;

/// Common imports for ecsig users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Curves and hashes
    pub use crate::algorithms::ec::{
        brainpoolp256r1, curve_by_name, curve_by_oid, curves, nist192p, nist224p, nist256p,
        nist384p, nist521p, secp256k1, Curve, Point, PointEncoding,
    };
    pub use crate::algorithms::hash::{HashFunction, Sha224, Sha256, Sha384, Sha512};

    // Re-export security types
    pub use crate::common::SecretVec;

    #[cfg(feature = "sign")]
    pub use crate::sign::{
        EcdhConfig, PrivateKeyFormat, SharedSecretFormat, SignOptions, Signature, SigningKey,
        VerifyingKey, ZeroSecretPolicy,
    };

    #[cfg(feature = "kem")]
    pub use crate::kem::Ecdh;
}
