//! Key agreement between sessions and raw signing keys

use ecsig_algorithms::ec::{curves, nist256p, PointEncoding};
use ecsig_kem::{Ecdh, EcdhConfig, Error};
use ecsig_sign::{PrivateKeyFormat, SigningKey};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_sessions_agree_on_every_curve() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    for curve in curves() {
        let mut alice = Ecdh::new(EcdhConfig::default()).with_curve(curve);
        let mut bob = Ecdh::new(EcdhConfig::default()).with_curve(curve);
        let alice_public = alice.generate_private_key(&mut rng).unwrap();
        let bob_public = bob.generate_private_key(&mut rng).unwrap();

        // exchange over the wire as compressed points
        alice
            .load_received_public_key_bytes(&bob_public.to_bytes(PointEncoding::Compressed).unwrap())
            .unwrap();
        bob.load_received_public_key_bytes(&alice_public.to_bytes(PointEncoding::Compressed).unwrap())
            .unwrap();

        let a = alice.generate_sharedsecret_bytes().unwrap();
        let b = bob.generate_sharedsecret_bytes().unwrap();
        assert_eq!(a, b, "{}", curve.name());
        assert_eq!(a.len(), curve.baselen());
    }
}

#[test]
fn test_session_matches_signing_key_primitive() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let ours = SigningKey::generate(nist256p(), &mut rng).unwrap();
    let theirs = SigningKey::generate(nist256p(), &mut rng).unwrap();

    let mut session = Ecdh::new(EcdhConfig::default());
    session
        .load_private_key_pem(&ours.to_pem(PrivateKeyFormat::Pkcs8).unwrap())
        .unwrap();
    session
        .load_received_public_key_der(&theirs.verifying_key().to_der(PointEncoding::Uncompressed).unwrap())
        .unwrap();

    let from_session = session.generate_sharedsecret().unwrap();
    let from_key = ours.ecdh(theirs.verifying_key()).unwrap();
    assert_eq!(Some(&from_session), from_key.x());

    let bytes = ours
        .shared_secret(theirs.verifying_key(), &EcdhConfig::default())
        .unwrap();
    assert_eq!(bytes, session.generate_sharedsecret_bytes().unwrap());
}

#[test]
fn test_session_errors_convert_to_api_errors() {
    let session = Ecdh::default();
    let err = session.generate_sharedsecret().unwrap_err();
    assert_eq!(err, Error::NoKey("private key"));

    let api: ecsig_api::Error = err.into();
    assert!(matches!(api, ecsig_api::Error::InvalidParameter { .. }));
}
