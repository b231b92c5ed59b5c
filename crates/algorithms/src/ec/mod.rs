//! Elliptic-curve arithmetic over prime fields
//!
//! Curves of the form `y^2 = x^3 + ax + b (mod p)` with parameters chosen at
//! runtime. [`registry`] holds the named curves; [`Point`] implements the
//! group law.

pub mod curve;
pub mod field;
pub mod point;
pub mod registry;

pub use curve::{Curve, CurveFp};
pub use field::{inverse_mod, jacobi, sqrt_mod_p, PrimeField};
pub use point::{Point, PointEncoding};
pub use registry::{
    brainpoolp256r1, curve_by_name, curve_by_oid, curves, nist192p, nist224p, nist256p, nist384p,
    nist521p, secp256k1,
};

#[cfg(test)]
mod tests;
