//! Deterministic nonce generation (RFC 6979, section 3.2)
//!
//! The nonce is an HMAC-DRBG output keyed by the secret exponent and the
//! message digest, so the same key and digest always give the same `k`.
//! Appending `extra_entropy` to the seed material gives the hedged variant
//! of section 3.6.

use ecsig_algorithms::hash::HashFunction;
use ecsig_algorithms::mac::Hmac;
use ecsig_api::Result;
use ecsig_utils::{bit_length, int_to_bytes_crop, int_to_fixed_bytes, orderlen};
use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::Zeroizing;

use crate::error::Error;

const SEPARATOR_ZERO: &[u8] = &[0x00];
const SEPARATOR_ONE: &[u8] = &[0x01];

/// Leftmost `qlen` bits of `data` as an integer (RFC 6979, 2.3.2)
pub fn bits2int(data: &[u8], qlen: usize) -> BigUint {
    let x = BigUint::from_bytes_be(data);
    let blen = data.len() * 8;
    if blen > qlen {
        x >> (blen - qlen)
    } else {
        x
    }
}

/// `bits2int(data)` reduced once modulo `order`, as `rlen` bytes
/// (RFC 6979, 2.3.4)
pub fn bits2octets(data: &[u8], order: &BigUint) -> Vec<u8> {
    let z1 = bits2int(data, bit_length(order));
    let z2 = if z1 >= *order { z1 - order } else { z1 };
    int_to_bytes_crop(&z2, orderlen(order))
}

fn hmac<H: HashFunction>(key: &[u8], parts: &[&[u8]]) -> Zeroizing<Vec<u8>> {
    let mut mac = Hmac::<H>::new(key);
    for part in parts {
        mac.update(part);
    }
    Zeroizing::new(mac.finalize())
}

/// Derive the nonce for signing `digest` with `secret_exponent`.
///
/// `retry_gen` skips that many valid candidates; signing bumps it when a
/// nonce yields `r = 0` or `s = 0`. `extra_entropy` may be empty.
pub fn generate_k<H: HashFunction>(
    order: &BigUint,
    secret_exponent: &BigUint,
    digest: &[u8],
    retry_gen: usize,
    extra_entropy: &[u8],
) -> Result<BigUint> {
    if secret_exponent.is_zero() || secret_exponent >= order {
        return Err(Error::key("rfc6979", "secret exponent outside [1, n-1]").into());
    }

    let qlen = bit_length(order);
    let holen = H::output_size();
    let rolen = orderlen(order);

    // int2octets(x) || bits2octets(h1) || extra
    let mut seed = Zeroizing::new(int_to_fixed_bytes(secret_exponent, rolen)?);
    seed.extend_from_slice(&bits2octets(digest, order));
    seed.extend_from_slice(extra_entropy);

    let mut v = Zeroizing::new(vec![0x01u8; holen]);
    let mut k = Zeroizing::new(vec![0x00u8; holen]);

    // steps d-g
    k = hmac::<H>(&k, &[v.as_slice(), SEPARATOR_ZERO, seed.as_slice()]);
    v = hmac::<H>(&k, &[v.as_slice()]);
    k = hmac::<H>(&k, &[v.as_slice(), SEPARATOR_ONE, seed.as_slice()]);
    v = hmac::<H>(&k, &[v.as_slice()]);

    let mut skip = retry_gen;
    loop {
        let mut t = Zeroizing::new(Vec::with_capacity(rolen + holen));
        while t.len() < rolen {
            v = hmac::<H>(&k, &[v.as_slice()]);
            t.extend_from_slice(&v);
        }

        let candidate = bits2int(&t, qlen);
        if !candidate.is_zero() && candidate < *order {
            if skip == 0 {
                return Ok(candidate);
            }
            skip -= 1;
        }

        k = hmac::<H>(&k, &[v.as_slice(), SEPARATOR_ZERO]);
        v = hmac::<H>(&k, &[v.as_slice()]);
    }
}
