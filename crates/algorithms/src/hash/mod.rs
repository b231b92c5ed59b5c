//! Hash functions as a capability passed to signing and verification
//!
//! Signing code only needs a digest size, a block size (for HMAC) and a way
//! to compute a digest; [`HashFunction`] is exactly that. The SHA-2 family is
//! provided by wrapping the `sha2` crate.

pub mod sha;

pub use sha::{Sha224, Sha256, Sha384, Sha512};

/// Digest bytes
pub type Hash = Vec<u8>;

/// Incremental hash function
pub trait HashFunction: Clone {
    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Updates the hash function state with new data
    fn update(&mut self, data: &[u8]);

    /// Returns the digest and resets the state
    fn finalize(&mut self) -> Hash;

    /// Output size of the hash function in bytes
    fn output_size() -> usize;

    /// Block size of the hash function in bytes
    fn block_size() -> usize;

    /// Hash `data` in a single call
    fn digest(data: &[u8]) -> Hash
    where
        Self: Sized,
    {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Name of the hash function
    fn name() -> &'static str;
}
