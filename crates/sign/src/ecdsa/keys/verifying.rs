//! Public half of an ECDSA key pair

use ecsig_algorithms::ec::{inverse_mod, Curve, Point, PointEncoding};
use ecsig_algorithms::encoding::pem;
use ecsig_algorithms::hash::HashFunction;
use ecsig_api::Result;
use ecsig_internal::constant_time::ct_eq;
use ecsig_params::traditional::ecdh::PEM_PUBLIC_KEY_LABEL;
use ecsig_utils::int_to_fixed_bytes;
use num_bigint::BigUint;
use num_traits::Zero;

use super::encoding::{decode_spki, encode_spki};
use super::{digest_to_int, SignOptions};
use crate::ecdsa::Signature;
use crate::error::Error;

/// A validated public point on a named curve: never the identity, always on
/// the curve and in the prime-order subgroup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyingKey {
    curve: &'static Curve,
    point: Point<'static>,
    options: SignOptions,
}

impl VerifyingKey {
    /// Wrap an existing point, re-validating it against `curve`
    pub fn from_public_point(curve: &'static Curve, point: &Point<'_>) -> Result<Self> {
        match (point.x(), point.y()) {
            (Some(x), Some(y)) => Self::from_affine(curve, x.clone(), y.clone()),
            _ => Err(Error::InvalidPoint {
                context: "verifying key",
                details: "the point at infinity is not a public key".into(),
            }
            .into()),
        }
    }

    /// Validate affine coordinates as a public key on `curve`
    pub fn from_affine(curve: &'static Curve, x: BigUint, y: BigUint) -> Result<Self> {
        let point = curve.point(x, y)?;
        Ok(Self::from_trusted_point(curve, point))
    }

    pub(crate) fn from_trusted_point(curve: &'static Curve, point: Point<'static>) -> Self {
        Self {
            curve,
            point,
            options: SignOptions::default(),
        }
    }

    /// Decode a raw, uncompressed, compressed or hybrid point encoding
    pub fn from_bytes(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        let point = curve.decode_point(bytes)?;
        Ok(Self::from_trusted_point(curve, point))
    }

    pub fn to_bytes(&self, encoding: PointEncoding) -> Result<Vec<u8>> {
        Ok(self.point.to_bytes(encoding)?)
    }

    /// Parse a DER `SubjectPublicKeyInfo`; the curve comes from its OID
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let (curve, point) = decode_spki(der)?;
        Self::from_bytes(curve, point)
    }

    /// DER `SubjectPublicKeyInfo` with the point in `encoding`
    pub fn to_der(&self, encoding: PointEncoding) -> Result<Vec<u8>> {
        if encoding == PointEncoding::Raw {
            return Err(Error::encoding("subject public key info", "raw points have no SEC1 prefix").into());
        }
        encode_spki(self.curve, &self.to_bytes(encoding)?)
    }

    pub fn from_pem(text: &str) -> Result<Self> {
        Self::from_der(&pem::from_pem(text, PEM_PUBLIC_KEY_LABEL)?)
    }

    pub fn to_pem(&self, encoding: PointEncoding) -> Result<String> {
        Ok(pem::to_pem(&self.to_der(encoding)?, PEM_PUBLIC_KEY_LABEL))
    }

    pub fn with_options(mut self, options: SignOptions) -> Self {
        self.options = options;
        self
    }

    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    pub fn point(&self) -> &Point<'static> {
        &self.point
    }

    /// Verify `signature` over a precomputed `digest`.
    ///
    /// `r` or `s` outside `[1, n-1]` is an error; a well-formed signature
    /// that does not match gives `Ok(false)`.
    pub fn verify_digest(&self, signature: &Signature, digest: &[u8]) -> Result<bool> {
        let n = self.curve.order();
        let (r, s) = (signature.r(), signature.s());
        if r.is_zero() || r >= n || s.is_zero() || s >= n {
            #[cfg(feature = "trace")]
            log::debug!("{}: signature component out of range", self.curve.name());
            return Err(Error::signature("verify", "r or s outside [1, n-1]").into());
        }

        let z = digest_to_int(self.curve, digest, self.options.allow_truncate)?;

        // w = s^-1, u1 = z*w, u2 = r*w
        let w = inverse_mod(s, n)?;
        let u1 = (&z * &w) % n;
        let u2 = (r * &w) % n;

        let candidate = self.curve.generator().mul_add(&u1, &self.point, &u2);
        let x = match candidate.x() {
            Some(x) => x % n,
            None => return Ok(false),
        };

        let len = self.curve.baselen();
        let matched = ct_eq(int_to_fixed_bytes(&x, len)?, int_to_fixed_bytes(r, len)?);
        #[cfg(feature = "trace")]
        if !matched {
            log::debug!("{}: signature did not verify", self.curve.name());
        }
        Ok(matched)
    }

    /// Hash `message` with `H` and verify
    pub fn verify<H: HashFunction>(&self, signature: &Signature, message: &[u8]) -> Result<bool> {
        self.verify_digest(signature, &H::digest(message))
    }

    /// [`VerifyingKey::verify_digest`] for a DER-encoded signature
    pub fn verify_digest_der(&self, der: &[u8], digest: &[u8]) -> Result<bool> {
        self.verify_digest(&Signature::from_der(der)?, digest)
    }

    /// [`VerifyingKey::verify_digest`] for a fixed-width `r || s` signature
    pub fn verify_digest_bytes(&self, bytes: &[u8], digest: &[u8]) -> Result<bool> {
        self.verify_digest(&Signature::from_bytes(bytes, self.curve)?, digest)
    }
}
