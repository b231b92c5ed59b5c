//! Scalars from an entropy source or from a seed

use ecsig_api::{validate, Error, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::convert::bit_length;

/// Draw a scalar uniformly from `[1, order-1]`.
///
/// Rejection sampling over `bitlen(order)` random bits. A failing entropy
/// source is reported, never papered over.
pub fn random_scalar<R>(rng: &mut R, order: &BigUint) -> Result<BigUint>
where
    R: RngCore + CryptoRng,
{
    validate::parameter(*order > BigUint::one(), "random_scalar", "order must exceed 1")?;

    let bits = bit_length(order);
    let len = (bits + 7) / 8;
    let top_mask = 0xffu8 >> (len * 8 - bits);
    let mut buf = Zeroizing::new(vec![0u8; len]);

    loop {
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| Error::RandomGenerationError {
                context: "random_scalar",
                message: e.to_string(),
            })?;
        buf[0] &= top_mask;

        let candidate = BigUint::from_bytes_be(&buf);
        if !candidate.is_zero() && candidate < *order {
            return Ok(candidate);
        }
    }
}

/// Deterministic byte stream derived from a seed.
///
/// Block `i` is `SHA-256("prng-" || i || "-" || seed)` with `i` in decimal.
/// Reproducible key derivation from a passphrase-like seed; it is NOT a
/// `CryptoRng` and must not be used for nonces.
pub struct SeededPrng {
    seed: Zeroizing<Vec<u8>>,
    counter: u64,
    block: Zeroizing<[u8; 32]>,
    offset: usize,
}

impl SeededPrng {
    pub fn new(seed: &[u8]) -> Self {
        let mut prng = Self {
            seed: Zeroizing::new(seed.to_vec()),
            counter: 0,
            block: Zeroizing::new([0u8; 32]),
            offset: 0,
        };
        prng.refill();
        prng
    }

    fn refill(&mut self) {
        let mut hasher = Sha256::new();
        hasher.update(format!("prng-{}-", self.counter).as_bytes());
        hasher.update(self.seed.as_slice());
        self.block.copy_from_slice(&hasher.finalize());
        self.counter += 1;
        self.offset = 0;
    }
}

impl RngCore for SeededPrng {
    fn next_u32(&mut self) -> u32 {
        let mut b = [0u8; 4];
        self.fill_bytes(&mut b);
        u32::from_be_bytes(b)
    }

    fn next_u64(&mut self) -> u64 {
        let mut b = [0u8; 8];
        self.fill_bytes(&mut b);
        u64::from_be_bytes(b)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            if self.offset == self.block.len() {
                self.refill();
            }
            *byte = self.block[self.offset];
            self.offset += 1;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Derive a scalar in `[1, order-1]` from `seed`.
///
/// Reads `bitlen(order-1)` bits from a [`SeededPrng`], adds one, and tries
/// again while the candidate is out of range.
pub fn scalar_from_seed(seed: &[u8], order: &BigUint) -> Result<BigUint> {
    validate::parameter(*order > BigUint::one(), "scalar_from_seed", "order must exceed 1")?;

    let bits = bit_length(&(order - 1u32));
    let whole = bits / 8;
    let extra = bits % 8;
    let mut prng = SeededPrng::new(seed);

    loop {
        let mut buf = Zeroizing::new(vec![0u8; whole + usize::from(extra > 0)]);
        if extra > 0 {
            prng.fill_bytes(&mut buf[..1]);
            buf[0] &= (1u8 << extra) - 1;
            prng.fill_bytes(&mut buf[1..]);
        } else {
            prng.fill_bytes(&mut buf);
        }

        let guess = BigUint::from_bytes_be(&buf) + 1u32;
        if guess < *order {
            return Ok(guess);
        }
    }
}
