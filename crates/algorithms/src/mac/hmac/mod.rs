//! HMAC (RFC 2104 / FIPS 198-1) over any [`HashFunction`]
//!
//! Keyed state is kept in zeroizing buffers. Used by the RFC 6979 nonce
//! derivation, which feeds its inputs piecewise through [`Hmac::update`].

use crate::hash::HashFunction;
use ecsig_common::SecretVec;
use subtle::ConstantTimeEq;

/// HMAC instance keyed at construction.
#[derive(Clone)]
pub struct Hmac<H: HashFunction> {
    inner: H,
    opad: SecretVec,
}

impl<H: HashFunction> Hmac<H> {
    const IPAD_BYTE: u8 = 0x36;
    const OPAD_BYTE: u8 = 0x5c;

    /// Create a new HMAC instance from `key`.
    ///
    /// Keys longer than the block size are hashed first.
    pub fn new(key: &[u8]) -> Self {
        let bs = H::block_size();

        let mut k_prime = SecretVec::zeroed(bs);
        if key.len() > bs {
            let hashed = SecretVec::new(H::digest(key));
            k_prime.as_mut_slice()[..hashed.len()].copy_from_slice(hashed.as_slice());
        } else {
            k_prime.as_mut_slice()[..key.len()].copy_from_slice(key);
        }

        let mut ipad = SecretVec::zeroed(bs);
        let mut opad = SecretVec::zeroed(bs);
        for ((i, o), k) in ipad
            .as_mut_slice()
            .iter_mut()
            .zip(opad.as_mut_slice().iter_mut())
            .zip(k_prime.as_slice())
        {
            *i = k ^ Self::IPAD_BYTE;
            *o = k ^ Self::OPAD_BYTE;
        }

        let mut inner = H::new();
        inner.update(ipad.as_slice());

        Self { inner, opad }
    }

    /// Feed additional `data` into the MAC.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalise and return the tag.
    pub fn finalize(mut self) -> Vec<u8> {
        let inner_hash = self.inner.finalize();

        let mut outer = H::new();
        outer.update(self.opad.as_slice());
        outer.update(&inner_hash);
        outer.finalize()
    }

    /// One-shot MAC helper.
    pub fn mac(key: &[u8], data: &[u8]) -> Vec<u8> {
        let mut h = Self::new(key);
        h.update(data);
        h.finalize()
    }

    /// Constant-time verification of `tag` against `key` / `data`.
    pub fn verify(key: &[u8], data: &[u8], tag: &[u8]) -> bool {
        let expected = Self::mac(key, data);
        expected.len() == tag.len() && bool::from(expected.as_slice().ct_eq(tag))
    }
}

#[cfg(test)]
mod tests;
