//! Stateful elliptic-curve Diffie-Hellman
//!
//! An [`Ecdh`] session holds our private key and the peer's public key on a
//! single curve. The curve may be set up front or is taken from the first
//! key that is loaded; every later key must agree with it.
//!
//! ```
//! use ecsig_algorithms::ec::nist256p;
//! use ecsig_kem::{Ecdh, EcdhConfig};
//! use rand::rngs::OsRng;
//!
//! let mut alice = Ecdh::new(EcdhConfig::default()).with_curve(nist256p());
//! let mut bob = Ecdh::new(EcdhConfig::default()).with_curve(nist256p());
//! let alice_public = alice.generate_private_key(&mut OsRng).unwrap();
//! let bob_public = bob.generate_private_key(&mut OsRng).unwrap();
//!
//! alice.load_received_public_key(bob_public).unwrap();
//! bob.load_received_public_key(alice_public).unwrap();
//! assert_eq!(
//!     alice.generate_sharedsecret_bytes().unwrap(),
//!     bob.generate_sharedsecret_bytes().unwrap()
//! );
//! ```

use ecsig_algorithms::ec::{Curve, Point};
use ecsig_api::ResultExt;
use ecsig_common::SecretVec;
use ecsig_sign::{SigningKey, VerifyingKey};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};

pub use ecsig_sign::{EcdhConfig, SharedSecretFormat, ZeroSecretPolicy};

/// Key-agreement session
#[derive(Clone, Debug, Default)]
pub struct Ecdh {
    curve: Option<&'static Curve>,
    private_key: Option<SigningKey>,
    public_key: Option<VerifyingKey>,
    config: EcdhConfig,
}

impl Ecdh {
    /// A session with no curve and no keys
    pub fn new(config: EcdhConfig) -> Self {
        Self {
            curve: None,
            private_key: None,
            public_key: None,
            config,
        }
    }

    pub fn with_curve(mut self, curve: &'static Curve) -> Self {
        self.curve = Some(curve);
        self
    }

    /// Set the working curve. Keys already loaded are not re-checked.
    pub fn set_curve(&mut self, curve: &'static Curve) {
        self.curve = Some(curve);
    }

    pub fn curve(&self) -> Option<&'static Curve> {
        self.curve
    }

    pub fn config(&self) -> &EcdhConfig {
        &self.config
    }

    fn require_curve(&self, operation: &'static str) -> Result<&'static Curve> {
        self.curve.ok_or(Error::NoCurve(operation))
    }

    /// Adopt `curve` if the session has none, otherwise insist it matches
    fn bind_curve(&mut self, curve: &'static Curve) -> Result<()> {
        match self.curve {
            None => {
                self.curve = Some(curve);
                Ok(())
            }
            Some(current) if current == curve => Ok(()),
            Some(current) => {
                #[cfg(feature = "trace")]
                log::debug!("ecdh: rejected {} key in a {} session", curve.name(), current.name());
                Err(Error::InvalidCurve {
                    expected: current.name(),
                    actual: curve.name(),
                })
            }
        }
    }

    /* --------------------------------------------------------------------- */
    /*                                Our key                                */
    /* --------------------------------------------------------------------- */

    /// Generate our private key on the session curve and return its public
    /// half for sending to the peer
    pub fn generate_private_key<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> Result<VerifyingKey> {
        let curve = self.require_curve("key generation")?;
        let key = SigningKey::generate(curve, rng)?;
        self.load_private_key(key)
    }

    pub fn load_private_key(&mut self, key: SigningKey) -> Result<VerifyingKey> {
        self.bind_curve(key.curve())?;
        let public = key.verifying_key().clone();
        self.private_key = Some(key);
        Ok(public)
    }

    /// Raw `baselen`-byte secret exponent on the session curve
    pub fn load_private_key_bytes(&mut self, bytes: &[u8]) -> Result<VerifyingKey> {
        let curve = self.require_curve("private key load")?;
        let key = SigningKey::from_bytes(curve, bytes).with_context("private key bytes")?;
        self.load_private_key(key)
    }

    /// RFC 5915 or PKCS#8; the curve comes from the encoding
    pub fn load_private_key_der(&mut self, der: &[u8]) -> Result<VerifyingKey> {
        let key = SigningKey::from_der(der)?;
        self.load_private_key(key)
    }

    pub fn load_private_key_pem(&mut self, pem: &str) -> Result<VerifyingKey> {
        let key = SigningKey::from_pem(pem)?;
        self.load_private_key(key)
    }

    /// The public key matching our private key
    pub fn get_public_key(&self) -> Result<&VerifyingKey> {
        self.private_key
            .as_ref()
            .map(SigningKey::verifying_key)
            .ok_or(Error::NoKey("private key"))
    }

    /* --------------------------------------------------------------------- */
    /*                               Peer's key                              */
    /* --------------------------------------------------------------------- */

    pub fn load_received_public_key(&mut self, key: VerifyingKey) -> Result<()> {
        self.bind_curve(key.curve())?;
        self.public_key = Some(key);
        Ok(())
    }

    /// Any SEC1 point encoding on the session curve
    pub fn load_received_public_key_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let curve = self.require_curve("public key load")?;
        let key = VerifyingKey::from_bytes(curve, bytes).with_context("received public key")?;
        self.load_received_public_key(key)
    }

    /// SubjectPublicKeyInfo; the curve comes from the encoding
    pub fn load_received_public_key_der(&mut self, der: &[u8]) -> Result<()> {
        let key = VerifyingKey::from_der(der)?;
        self.load_received_public_key(key)
    }

    pub fn load_received_public_key_pem(&mut self, pem: &str) -> Result<()> {
        let key = VerifyingKey::from_pem(pem)?;
        self.load_received_public_key(key)
    }

    /* --------------------------------------------------------------------- */
    /*                               Agreement                               */
    /* --------------------------------------------------------------------- */

    /// `d * Q`, after checking that both keys are loaded and on the session
    /// curve
    fn agree(&self) -> Result<(&'static Curve, Point<'static>)> {
        let private = self.private_key.as_ref().ok_or(Error::NoKey("private key"))?;
        let public = self.public_key.as_ref().ok_or(Error::NoKey("public key"))?;
        let curve = self.require_curve("shared secret")?;
        for key_curve in [private.curve(), public.curve()] {
            if key_curve != curve {
                return Err(Error::InvalidCurve {
                    expected: curve.name(),
                    actual: key_curve.name(),
                });
            }
        }

        let shared = private.ecdh(public).map_err(shared_secret_error)?;
        Ok((curve, shared))
    }

    /// The x-coordinate of the agreed point. The same on both sides.
    pub fn generate_sharedsecret(&self) -> Result<BigUint> {
        let (_, shared) = self.agree()?;
        self.config.accept(&shared).map_err(shared_secret_error)
    }

    /// The shared secret as bytes, per the session's output format.
    ///
    /// The x-coordinate form is padded to the byte length of the curve
    /// order.
    pub fn generate_sharedsecret_bytes(&self) -> Result<SecretVec> {
        let (curve, shared) = self.agree()?;
        self.config
            .encode(&shared, curve.baselen())
            .map_err(shared_secret_error)
    }
}

/// Rejected agreement results become [`Error::InvalidSharedSecret`]; anything
/// else passes through unchanged
fn shared_secret_error(err: ecsig_api::Error) -> Error {
    match err {
        ecsig_api::Error::InvalidKey {
            context: "shared secret",
            message,
        } => {
            #[cfg(feature = "trace")]
            log::debug!("ecdh: {}", message);
            Error::InvalidSharedSecret(message)
        }
        other => Error::Api(other),
    }
}
