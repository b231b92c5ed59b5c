//! Signing and verifying keys, and their DER/PEM containers

mod encoding;
mod signing;
mod verifying;

pub use encoding::PrivateKeyFormat;
pub use signing::SigningKey;
pub use verifying::VerifyingKey;

use ecsig_algorithms::ec::Curve;
use ecsig_api::Result;
use ecsig_utils::bit_length;
use num_bigint::BigUint;

use crate::ecdsa::rfc6979::bits2int;
use crate::error::Error;

/// How digests are mapped to integers when signing and verifying
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SignOptions {
    /// Keep the leftmost `bitlen(n)` bits of a digest longer than the
    /// order. When false such digests are rejected and shorter ones are
    /// used whole.
    pub allow_truncate: bool,
}

impl Default for SignOptions {
    fn default() -> Self {
        Self {
            allow_truncate: true,
        }
    }
}

pub(crate) fn digest_to_int(curve: &Curve, digest: &[u8], allow_truncate: bool) -> Result<BigUint> {
    if allow_truncate {
        return Ok(bits2int(digest, bit_length(curve.order())));
    }
    if digest.len() > curve.baselen() {
        return Err(Error::DigestTooLong {
            max: curve.baselen(),
            actual: digest.len(),
        }
        .into());
    }
    Ok(BigUint::from_bytes_be(digest))
}
