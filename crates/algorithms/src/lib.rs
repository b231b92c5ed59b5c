//! Primitives underneath ECDSA and ECDH
//!
//! Prime-field arithmetic, short Weierstrass curves and their group law,
//! the named-curve registry, SHA-2 and HMAC, and the strict DER/PEM codec
//! used for keys and signatures.
//!
//! Curve arithmetic runs on arbitrary-precision integers and is not
//! constant-time. Scalar multiplication uses a Montgomery ladder so the
//! sequence of group operations does not depend on secret bits, but the
//! underlying bignum operations still do.

#![forbid(unsafe_code)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic-curve arithmetic and named curves
pub mod ec;
pub use ec::{
    curve_by_name, curve_by_oid, curves, Curve, CurveFp, Point, PointEncoding, PrimeField,
};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha224, Sha256, Sha384, Sha512};

// MAC implementations
pub mod mac;
pub use mac::Hmac;

// DER / PEM
pub mod encoding;
