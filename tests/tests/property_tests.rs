//! Property-based tests for encodings, signing and key agreement

use ecsig_algorithms::ec::{curves, PointEncoding};
use ecsig_algorithms::encoding::der;
use ecsig_algorithms::hash::Sha256;
use ecsig_kem::{Ecdh, EcdhConfig};
use ecsig_sign::{Signature, SigningKey};
use num_bigint::{BigInt, BigUint, Sign};
use proptest::prelude::*;

/// Index into the curve registry
fn curve_index() -> impl Strategy<Value = usize> {
    0..curves().len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn der_integer_roundtrip(negative in any::<bool>(), magnitude in prop::collection::vec(any::<u8>(), 0..80)) {
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        let value = BigInt::from_bytes_be(sign, &magnitude);
        let encoded = der::encode_integer(&value);
        let (decoded, rest) = der::decode_integer(&encoded).unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert!(rest.is_empty());
    }

    #[test]
    fn signature_der_parser_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..96)) {
        if let Ok(sig) = Signature::from_der(&bytes) {
            // anything accepted is canonical
            prop_assert_eq!(sig.to_der(), bytes);
        }
    }

    #[test]
    fn sign_then_verify(idx in curve_index(), seed in prop::collection::vec(any::<u8>(), 1..48), message in prop::collection::vec(any::<u8>(), 0..128)) {
        let curve = &curves()[idx];
        let key = SigningKey::from_seed(curve, &seed).unwrap();
        let sig = key.sign::<Sha256>(&message).unwrap();
        prop_assert!(key.verifying_key().verify::<Sha256>(&sig, &message).unwrap());

        let mut altered = message.clone();
        altered.push(0x00);
        prop_assert!(!key.verifying_key().verify::<Sha256>(&sig, &altered).unwrap());
    }

    #[test]
    fn compressed_point_roundtrip(idx in curve_index(), seed in prop::collection::vec(any::<u8>(), 1..48)) {
        let curve = &curves()[idx];
        let vk = SigningKey::from_seed(curve, &seed).unwrap().verifying_key().clone();
        let compressed = vk.to_bytes(PointEncoding::Compressed).unwrap();
        prop_assert_eq!(compressed.len(), 1 + curve.curve().coordinate_len());
        let decoded = ecsig_sign::VerifyingKey::from_bytes(curve, &compressed).unwrap();
        prop_assert_eq!(decoded, vk);
    }

    #[test]
    fn ecdh_is_symmetric(idx in curve_index(), seed_a in any::<[u8; 16]>(), seed_b in any::<[u8; 16]>()) {
        let curve = &curves()[idx];
        let a = SigningKey::from_seed(curve, &seed_a).unwrap();
        let b = SigningKey::from_seed(curve, &seed_b).unwrap();

        let mut alice = Ecdh::new(EcdhConfig::default());
        alice.load_private_key(a.clone()).unwrap();
        alice.load_received_public_key(b.verifying_key().clone()).unwrap();

        let mut bob = Ecdh::new(EcdhConfig::default());
        bob.load_private_key(b).unwrap();
        bob.load_received_public_key(a.verifying_key().clone()).unwrap();

        let shared: BigUint = alice.generate_sharedsecret().unwrap();
        prop_assert_eq!(shared, bob.generate_sharedsecret().unwrap());
    }
}
