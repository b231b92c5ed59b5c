//! ECDSA signature value and its wire encodings

use ecsig_algorithms::ec::Curve;
use ecsig_algorithms::encoding::der;
use ecsig_api::{validate, Result};
use ecsig_utils::int_to_fixed_bytes;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::Error;

/// The pair `(r, s)`.
///
/// Values decoded from the wire are only checked for shape; range checks
/// against a curve order happen at verification.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    pub fn r(&self) -> &BigUint {
        &self.r
    }

    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// `SEQUENCE { INTEGER r, INTEGER s }`
    pub fn to_der(&self) -> Vec<u8> {
        der::encode_sequence([der::encode_unsigned(&self.r), der::encode_unsigned(&self.s)])
    }

    /// Parse the DER form; trailing bytes after the sequence or inside it
    /// are rejected, as are negative components
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let (body, rest) = der::decode_sequence(bytes)?;
        if !rest.is_empty() {
            return Err(Error::encoding("signature", "trailing bytes after the sequence").into());
        }
        let (r, body) = der::remove_integer(body)?;
        let (s, body) = der::remove_integer(body)?;
        if !body.is_empty() {
            return Err(Error::encoding("signature", "trailing bytes inside the sequence").into());
        }
        Ok(Self { r, s })
    }

    /// Fixed-width `r || s`, each `baselen` bytes
    pub fn to_bytes(&self, curve: &Curve) -> Result<Vec<u8>> {
        let mut out = int_to_fixed_bytes(&self.r, curve.baselen())?;
        out.extend(int_to_fixed_bytes(&self.s, curve.baselen())?);
        Ok(out)
    }

    /// Split a fixed-width `r || s` of exactly `2 * baselen` bytes
    pub fn from_bytes(bytes: &[u8], curve: &Curve) -> Result<Self> {
        let len = curve.baselen();
        validate::length("signature bytes", bytes.len(), 2 * len)?;
        Ok(Self {
            r: BigUint::from_bytes_be(&bytes[..len]),
            s: BigUint::from_bytes_be(&bytes[len..]),
        })
    }

    /// Whether `s <= n/2`
    pub fn is_low_s(&self, order: &BigUint) -> bool {
        self.s <= order >> 1
    }

    /// Replace `s` by `n - s` when `s > n/2`; both forms verify
    pub fn normalize_s(&self, order: &BigUint) -> Self {
        if self.is_low_s(order) || self.s.is_zero() || self.s >= *order {
            return self.clone();
        }
        Self {
            r: self.r.clone(),
            s: order - &self.s,
        }
    }
}
