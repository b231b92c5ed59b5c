//! Secret half of an ECDSA key pair

use ecsig_algorithms::ec::{inverse_mod, Curve, Point, PointEncoding};
use ecsig_algorithms::encoding::pem;
use ecsig_algorithms::hash::HashFunction;
use ecsig_api::Result;
use ecsig_common::SecretVec;
use ecsig_params::traditional::ecdh::{PEM_EC_PRIVATE_KEY_LABEL, PEM_PKCS8_PRIVATE_KEY_LABEL};
use ecsig_utils::{bit_length, int_to_fixed_bytes, random_scalar, scalar_from_seed};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::encoding::{
    decode_ec_private_key, decode_pkcs8, detect_private_format, encode_ec_private_key,
    encode_pkcs8, PrivateKeyFormat,
};
use super::{digest_to_int, SignOptions, VerifyingKey};
use crate::ecdsa::ecdh::EcdhConfig;
use crate::ecdsa::{rfc6979, Signature};
use crate::error::Error;

/// A secret exponent `d` in `[1, n-1]` on a named curve, with its public
/// point `d*G`.
///
/// `d` is stored as `baselen` big-endian bytes in a buffer that is wiped on
/// drop.
#[derive(Clone)]
pub struct SigningKey {
    curve: &'static Curve,
    secret: SecretVec,
    verifying_key: VerifyingKey,
    options: SignOptions,
}

impl SigningKey {
    /// Draw `d` uniformly from `[1, n-1]`
    pub fn generate<R: RngCore + CryptoRng>(curve: &'static Curve, rng: &mut R) -> Result<Self> {
        let d = random_scalar(rng, curve.order())?;
        #[cfg(feature = "trace")]
        log::trace!("generated {} signing key", curve.name());
        Self::from_secret_exponent(curve, &d)
    }

    /// Derive `d` reproducibly from `seed`
    pub fn from_seed(curve: &'static Curve, seed: &[u8]) -> Result<Self> {
        let d = scalar_from_seed(seed, curve.order())?;
        Self::from_secret_exponent(curve, &d)
    }

    pub fn from_secret_exponent(curve: &'static Curve, d: &BigUint) -> Result<Self> {
        if !curve.is_valid_scalar(d) {
            return Err(Error::key("signing key", "secret exponent outside [1, n-1]").into());
        }
        let secret = SecretVec::new(int_to_fixed_bytes(d, curve.baselen())?);
        let point = curve.generator().mul(d);
        Ok(Self {
            curve,
            secret,
            verifying_key: VerifyingKey::from_trusted_point(curve, point),
            options: SignOptions::default(),
        })
    }

    /// Parse a big-endian secret exponent of exactly `baselen` bytes
    pub fn from_bytes(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        ecsig_api::validate::length("signing key bytes", bytes.len(), curve.baselen())?;
        let d = BigUint::from_bytes_be(bytes);
        Self::from_secret_exponent(curve, &d)
    }

    /// The secret exponent as `baselen` big-endian bytes
    pub fn to_bytes(&self) -> SecretVec {
        self.secret.clone()
    }

    /// Parse an RFC 5915 `ECPrivateKey` or a PKCS#8 `PrivateKeyInfo`.
    ///
    /// An embedded public key, when present, must match the secret.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let parsed = match detect_private_format(der)? {
            PrivateKeyFormat::Sec1 => decode_ec_private_key(der, None)?,
            PrivateKeyFormat::Pkcs8 => {
                let (curve, inner) = decode_pkcs8(der)?;
                decode_ec_private_key(inner, Some(curve))?
            }
        };

        let curve = parsed.curve;
        if parsed.secret.len() > curve.baselen() {
            return Err(Error::key("private key der", "secret exponent wider than the curve order").into());
        }
        let d = BigUint::from_bytes_be(parsed.secret);
        let key = Self::from_secret_exponent(curve, &d)?;

        if let Some(encoded) = parsed.public_point {
            let embedded = VerifyingKey::from_bytes(curve, encoded)?;
            if embedded != key.verifying_key {
                return Err(Error::key("private key der", "embedded public key does not match").into());
            }
        }
        Ok(key)
    }

    pub fn to_der(&self, format: PrivateKeyFormat) -> Result<Vec<u8>> {
        let public = self.verifying_key.to_bytes(PointEncoding::Uncompressed)?;
        let ec_key = Zeroizing::new(encode_ec_private_key(self.curve, self.secret.as_slice(), &public)?);
        match format {
            PrivateKeyFormat::Sec1 => Ok(ec_key.to_vec()),
            PrivateKeyFormat::Pkcs8 => encode_pkcs8(self.curve, &ec_key),
        }
    }

    /// Accepts `EC PRIVATE KEY` and `PRIVATE KEY` blocks; other blocks such
    /// as `EC PARAMETERS` are skipped
    pub fn from_pem(text: &str) -> Result<Self> {
        let der = match pem::from_pem(text, PEM_EC_PRIVATE_KEY_LABEL) {
            Ok(der) => der,
            Err(_) => pem::from_pem(text, PEM_PKCS8_PRIVATE_KEY_LABEL)?,
        };
        let der = Zeroizing::new(der);
        Self::from_der(&der)
    }

    pub fn to_pem(&self, format: PrivateKeyFormat) -> Result<String> {
        let der = Zeroizing::new(self.to_der(format)?);
        let label = match format {
            PrivateKeyFormat::Sec1 => PEM_EC_PRIVATE_KEY_LABEL,
            PrivateKeyFormat::Pkcs8 => PEM_PKCS8_PRIVATE_KEY_LABEL,
        };
        Ok(pem::to_pem(&der, label))
    }

    /// Options also apply to the derived verifying key
    pub fn with_options(mut self, options: SignOptions) -> Self {
        self.options = options;
        self.verifying_key = self.verifying_key.with_options(options);
        self
    }

    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    fn secret_exponent(&self) -> BigUint {
        BigUint::from_bytes_be(self.secret.as_slice())
    }

    /* --------------------------------------------------------------------- */
    /*                                 Signing                               */
    /* --------------------------------------------------------------------- */

    /// Deterministic signature (RFC 6979) over a precomputed digest
    pub fn sign_digest<H: HashFunction>(&self, digest: &[u8]) -> Result<Signature> {
        self.sign_digest_hedged::<H>(digest, &[])
    }

    /// RFC 6979 with `extra_entropy` mixed into the nonce derivation
    pub fn sign_digest_hedged<H: HashFunction>(&self, digest: &[u8], extra_entropy: &[u8]) -> Result<Signature> {
        let z = digest_to_int(self.curve, digest, self.options.allow_truncate)?;
        let d = self.secret_exponent();
        let n = self.curve.order();

        let mut retry_gen = 0;
        loop {
            let k = rfc6979::generate_k::<H>(n, &d, digest, retry_gen, extra_entropy)?;
            if let Some(signature) = self.sign_number(&z, &k)? {
                return Ok(signature);
            }
            #[cfg(feature = "trace")]
            log::debug!("{}: nonce gave r = 0 or s = 0, retry {}", self.curve.name(), retry_gen + 1);
            retry_gen += 1;
        }
    }

    /// Sign with a caller-chosen nonce `k` in `[1, n-1]`.
    ///
    /// A nonce giving `r = 0` or `s = 0` is reported, not retried.
    pub fn sign_digest_with_k(&self, digest: &[u8], k: &BigUint) -> Result<Signature> {
        if !self.curve.is_valid_scalar(k) {
            return Err(ecsig_api::Error::invalid_parameter("nonce", "k outside [1, n-1]"));
        }
        let z = digest_to_int(self.curve, digest, self.options.allow_truncate)?;
        self.sign_number(&z, k)?
            .ok_or_else(|| ecsig_api::Error::invalid_parameter("nonce", "k gives r = 0 or s = 0"))
    }

    /// Sign with nonces drawn from `rng`
    pub fn sign_digest_with_rng<R: RngCore + CryptoRng>(&self, digest: &[u8], rng: &mut R) -> Result<Signature> {
        let z = digest_to_int(self.curve, digest, self.options.allow_truncate)?;
        loop {
            let k = random_scalar(rng, self.curve.order())?;
            if let Some(signature) = self.sign_number(&z, &k)? {
                return Ok(signature);
            }
        }
    }

    /// Hash `message` with `H` and sign deterministically
    pub fn sign<H: HashFunction>(&self, message: &[u8]) -> Result<Signature> {
        self.sign_digest::<H>(&H::digest(message))
    }

    /// `r = (k*G).x mod n`, `s = k^-1 (z + r*d) mod n`; `None` when either
    /// is zero.
    ///
    /// `k*G` is computed as `(k + n)*G` or `(k + 2n)*G`, whichever has one
    /// bit more than `n`, so the ladder always runs the same number of steps.
    fn sign_number(&self, z: &BigUint, k: &BigUint) -> Result<Option<Signature>> {
        let n = self.curve.order();
        let ks = k + n;
        let kt = &ks + n;
        let scalar = if bit_length(&ks) == bit_length(n) { kt } else { ks };
        let point = self.curve.generator().mul_unreduced(&scalar);

        let r = match point.x() {
            Some(x) => x % n,
            None => return Ok(None),
        };
        if r.is_zero() {
            return Ok(None);
        }

        let d = self.secret_exponent();
        let k_inv = inverse_mod(k, n)?;
        let s = (k_inv * ((z + (&d * &r) % n) % n)) % n;
        if s.is_zero() {
            return Ok(None);
        }
        Ok(Some(Signature::new(r, s)))
    }

    /* --------------------------------------------------------------------- */
    /*                              Key agreement                            */
    /* --------------------------------------------------------------------- */

    /// `d * Q` for the peer's public point `Q`
    pub fn ecdh(&self, peer: &VerifyingKey) -> Result<Point<'static>> {
        if peer.curve() != self.curve {
            return Err(Error::CurveMismatch {
                expected: self.curve.name(),
                actual: peer.curve().name(),
            }
            .into());
        }
        let q = peer.point();
        if q.is_identity() || !q.is_on_curve() {
            return Err(Error::InvalidPoint {
                context: "ecdh",
                details: "peer point is the identity or off the curve".into(),
            }
            .into());
        }

        let shared = q.mul(&self.secret_exponent());
        if shared.is_identity() {
            #[cfg(feature = "trace")]
            log::debug!("{}: ecdh produced the point at infinity", self.curve.name());
            return Err(Error::InvalidSharedSecret("agreement produced the point at infinity").into());
        }
        Ok(shared)
    }

    /// Shared secret bytes per `config`
    pub fn shared_secret(&self, peer: &VerifyingKey, config: &EcdhConfig) -> Result<SecretVec> {
        let point = self.ecdh(peer)?;
        config.encode(&point, self.curve.curve().coordinate_len())
    }
}

impl core::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SigningKey")
            .field("curve", &self.curve.name())
            .field("secret", &"<redacted>")
            .field("verifying_key", &self.verifying_key)
            .finish()
    }
}
