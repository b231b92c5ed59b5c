//! Process-wide registry of named curves
//!
//! Built on first use from `ecsig_params` and read-only afterwards, so
//! lookups are safe from any thread.

use once_cell::sync::Lazy;

use super::curve::Curve;
use crate::error::{Error, Result};
use ecsig_params::traditional::ecdsa::NAMED_CURVES;

static CURVES: Lazy<Vec<Curve>> = Lazy::new(|| NAMED_CURVES.iter().map(Curve::from_params).collect());

/// Every registered curve
pub fn curves() -> &'static [Curve] {
    CURVES.as_slice()
}

/// Look a curve up by registry name (`NIST256p`) or OpenSSL name
/// (`prime256v1`)
pub fn curve_by_name(name: &str) -> Result<&'static Curve> {
    curves()
        .iter()
        .find(|c| c.name() == name || c.openssl_name() == name)
        .ok_or_else(|| Error::UnknownCurve {
            name: name.to_string(),
        })
}

/// Look a curve up by the arcs of its object identifier
pub fn curve_by_oid(oid: &[u64]) -> Result<&'static Curve> {
    curves().iter().find(|c| c.oid() == oid).ok_or_else(|| {
        let dotted: Vec<String> = oid.iter().map(|arc| arc.to_string()).collect();
        Error::UnknownCurve {
            name: dotted.join("."),
        }
    })
}

/// NIST P-192
pub fn nist192p() -> &'static Curve {
    &curves()[0]
}

/// NIST P-224
pub fn nist224p() -> &'static Curve {
    &curves()[1]
}

/// NIST P-256
pub fn nist256p() -> &'static Curve {
    &curves()[2]
}

/// NIST P-384
pub fn nist384p() -> &'static Curve {
    &curves()[3]
}

/// NIST P-521
pub fn nist521p() -> &'static Curve {
    &curves()[4]
}

/// secp256k1
pub fn secp256k1() -> &'static Curve {
    &curves()[5]
}

/// brainpoolP256r1
pub fn brainpoolp256r1() -> &'static Curve {
    &curves()[6]
}
