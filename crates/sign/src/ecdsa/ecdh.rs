//! Policy for turning a Diffie-Hellman result into shared-secret bytes

use ecsig_algorithms::ec::{Point, PointEncoding};
use ecsig_api::Result;
use ecsig_common::SecretVec;
use ecsig_utils::int_to_fixed_bytes;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::Error;

/// What to do when the agreed point has x-coordinate zero.
///
/// Such a point exists only on curves where `b` is a square; the key
/// agreement standards disagree on whether it is usable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ZeroSecretPolicy {
    /// Fail with an invalid-shared-secret error
    #[default]
    Reject,
    /// Return the all-zero secret
    Allow,
}

/// Which part of the agreed point becomes the shared secret
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SharedSecretFormat {
    /// Fixed-width big-endian x-coordinate
    #[default]
    XCoordinate,
    /// Uncompressed SEC1 encoding of the whole point
    FullPoint,
}

/// Key-agreement configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EcdhConfig {
    pub zero_secret: ZeroSecretPolicy,
    pub output: SharedSecretFormat,
}

impl EcdhConfig {
    pub fn with_zero_secret(mut self, policy: ZeroSecretPolicy) -> Self {
        self.zero_secret = policy;
        self
    }

    pub fn with_output(mut self, output: SharedSecretFormat) -> Self {
        self.output = output;
        self
    }

    /// The x-coordinate of an agreement result, after the identity and
    /// zero-x checks
    pub fn accept(&self, point: &Point<'_>) -> Result<BigUint> {
        let x = point
            .x()
            .ok_or(Error::InvalidSharedSecret("agreement produced the point at infinity"))?;
        if x.is_zero() && self.zero_secret == ZeroSecretPolicy::Reject {
            return Err(Error::InvalidSharedSecret("agreement produced a zero x-coordinate").into());
        }
        Ok(x.clone())
    }

    /// Encode an accepted agreement result; `width` is the byte length of
    /// an x-coordinate
    pub fn encode(&self, point: &Point<'_>, width: usize) -> Result<SecretVec> {
        let x = self.accept(point)?;
        let bytes = match self.output {
            SharedSecretFormat::XCoordinate => int_to_fixed_bytes(&x, width)?,
            SharedSecretFormat::FullPoint => point.to_bytes(PointEncoding::Uncompressed)?,
        };
        Ok(SecretVec::new(bytes))
    }
}
