//! SHA-2 digests (FIPS 180-4)

use ::sha2::Digest;

use super::{Hash, HashFunction};
use ecsig_params::utils::hash::{
    SHA224_OUTPUT_SIZE, SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE,
    SHA512_BLOCK_SIZE, SHA512_OUTPUT_SIZE,
};

macro_rules! sha2_hash {
    ($name:ident, $inner:ty, $output:expr, $block:expr, $label:expr) => {
        #[doc = concat!($label, " hash function")]
        #[derive(Clone, Default)]
        pub struct $name {
            inner: $inner,
        }

        impl HashFunction for $name {
            fn new() -> Self {
                Self::default()
            }

            fn update(&mut self, data: &[u8]) {
                Digest::update(&mut self.inner, data);
            }

            fn finalize(&mut self) -> Hash {
                self.inner.finalize_reset().to_vec()
            }

            fn output_size() -> usize {
                $output
            }

            fn block_size() -> usize {
                $block
            }

            fn name() -> &'static str {
                $label
            }
        }
    };
}

sha2_hash!(Sha224, ::sha2::Sha224, SHA224_OUTPUT_SIZE, SHA256_BLOCK_SIZE, "SHA-224");
sha2_hash!(Sha256, ::sha2::Sha256, SHA256_OUTPUT_SIZE, SHA256_BLOCK_SIZE, "SHA-256");
sha2_hash!(Sha384, ::sha2::Sha384, SHA384_OUTPUT_SIZE, SHA512_BLOCK_SIZE, "SHA-384");
sha2_hash!(Sha512, ::sha2::Sha512, SHA512_OUTPUT_SIZE, SHA512_BLOCK_SIZE, "SHA-512");
