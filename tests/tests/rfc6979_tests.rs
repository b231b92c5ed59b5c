//! RFC 6979 known answers across the registry's NIST curves

use ecsig_sign::{Signature, SigningKey};
use ecsig_tests::vectors::{HashAlg, RFC6979_VECTORS, RFC4231_HMAC_SHA256};
use ecsig_algorithms::hash::Sha256;
use ecsig_algorithms::mac::Hmac;

#[test]
fn test_nonces_match_published_k() {
    for v in RFC6979_VECTORS.iter() {
        let digest = v.hash.digest(v.message);
        let k = v.hash.generate_k(v.curve.order(), &v.secret, &digest).unwrap();
        assert_eq!(k, v.k, "{} {:?} {:?}", v.curve.name(), v.hash, v.message);
    }
}

#[test]
fn test_signatures_match_published_values() {
    for v in RFC6979_VECTORS.iter() {
        let key = SigningKey::from_secret_exponent(v.curve, &v.secret).unwrap();
        let sig = v.hash.sign(&key, v.message).unwrap();
        assert_eq!(sig, Signature::new(v.r.clone(), v.s.clone()), "{} {:?}", v.curve.name(), v.hash);

        let digest = v.hash.digest(v.message);
        assert!(key.verifying_key().verify_digest(&sig, &digest).unwrap());
        assert!(!key.verifying_key().verify_digest(&sig, &HashAlg::Sha256.digest(b"other")).unwrap());
    }
}

#[test]
fn test_explicit_k_reproduces_vectors() {
    for v in RFC6979_VECTORS.iter() {
        let key = SigningKey::from_secret_exponent(v.curve, &v.secret).unwrap();
        let digest = v.hash.digest(v.message);
        let sig = key.sign_digest_with_k(&digest, &v.k).unwrap();
        assert_eq!(sig.r(), &v.r);
        assert_eq!(sig.s(), &v.s);
    }
}

#[test]
fn test_fixed_width_and_der_signatures_verify() {
    for v in RFC6979_VECTORS.iter() {
        let key = SigningKey::from_secret_exponent(v.curve, &v.secret).unwrap();
        let digest = v.hash.digest(v.message);
        let sig = Signature::new(v.r.clone(), v.s.clone());
        let vk = key.verifying_key();

        let fixed = sig.to_bytes(v.curve).unwrap();
        assert_eq!(fixed.len(), 2 * v.curve.baselen());
        assert!(vk.verify_digest_bytes(&fixed, &digest).unwrap());
        assert!(vk.verify_digest_der(&sig.to_der(), &digest).unwrap());
    }
}

#[test]
fn test_hmac_sha256_rfc4231() {
    for &(key, data, mac) in RFC4231_HMAC_SHA256 {
        let key = hex::decode(key).unwrap();
        let data = hex::decode(data).unwrap();
        let expected = hex::decode(mac).unwrap();
        assert_eq!(Hmac::<Sha256>::mac(&key, &data), expected);
        assert!(Hmac::<Sha256>::verify(&key, &data, &expected));
    }
}
