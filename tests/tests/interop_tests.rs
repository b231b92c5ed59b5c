//! Keys and signatures produced by OpenSSL

use ecsig_algorithms::ec::{nist256p, nist384p, secp256k1, PointEncoding};
use ecsig_algorithms::hash::Sha256;
use ecsig_sign::{PrivateKeyFormat, Signature, SigningKey, VerifyingKey};
use ecsig_tests::vectors::openssl::*;

#[test]
fn test_verify_openssl_p256_signature() {
    let vk = VerifyingKey::from_pem(P256_PUBLIC_KEY_PEM).unwrap();
    assert_eq!(vk.curve(), nist256p());

    let der = hex::decode(P256_SHA256_SIGNATURE_DER).unwrap();
    let sig = Signature::from_der(&der).unwrap();
    assert!(vk.verify::<Sha256>(&sig, SIGNED_MESSAGE).unwrap());
    assert!(!vk.verify::<Sha256>(&sig, b"interoperability!").unwrap());
    assert_eq!(sig.to_der(), der);
}

#[test]
fn test_verify_openssl_secp256k1_signature() {
    let key = SigningKey::from_pem(SECP256K1_EC_PRIVATE_KEY_PEM).unwrap();
    let vk = VerifyingKey::from_pem(SECP256K1_PUBLIC_KEY_PEM).unwrap();
    assert_eq!(key.curve(), secp256k1());
    assert_eq!(key.verifying_key(), &vk);

    let sig = Signature::from_der(&hex::decode(SECP256K1_SHA256_SIGNATURE_DER).unwrap()).unwrap();
    assert!(vk.verify::<Sha256>(&sig, SIGNED_MESSAGE).unwrap());

    // our own signature over the same message verifies with the parsed key
    let ours = key.sign::<Sha256>(SIGNED_MESSAGE).unwrap();
    assert!(vk.verify::<Sha256>(&ours, SIGNED_MESSAGE).unwrap());
}

#[test]
fn test_reencode_matches_openssl() {
    let key = SigningKey::from_pem(P256_EC_PRIVATE_KEY_PEM).unwrap();
    assert_eq!(key.to_pem(PrivateKeyFormat::Sec1).unwrap(), P256_EC_PRIVATE_KEY_PEM);
    assert_eq!(
        key.verifying_key().to_pem(PointEncoding::Uncompressed).unwrap(),
        P256_PUBLIC_KEY_PEM
    );
}

#[test]
fn test_parameters_block_is_skipped() {
    let key = SigningKey::from_pem(P256_WITH_PARAMETERS_PEM).unwrap();
    let reference = SigningKey::from_pem(P256_EC_PRIVATE_KEY_PEM).unwrap();
    assert_eq!(key.to_bytes(), reference.to_bytes());
}

#[test]
fn test_pkcs8_without_inner_parameters() {
    let key = SigningKey::from_pem(P384_PKCS8_PEM).unwrap();
    assert_eq!(key.curve(), nist384p());

    // written back with the curve in both places, and still readable
    let der = key.to_der(PrivateKeyFormat::Pkcs8).unwrap();
    let again = SigningKey::from_der(&der).unwrap();
    assert_eq!(again.verifying_key(), key.verifying_key());
}

#[test]
fn test_public_key_from_private_pem_is_rejected() {
    assert!(VerifyingKey::from_pem(P256_EC_PRIVATE_KEY_PEM).is_err());
    assert!(SigningKey::from_pem(P256_PUBLIC_KEY_PEM).is_err());
}
