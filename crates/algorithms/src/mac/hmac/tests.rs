use super::*;
use crate::hash::{Sha224, Sha256, Sha512};

/// Test vectors for HMAC-SHA-256 from RFC 4231
#[test]
fn test_hmac_sha256_rfc4231() {
    // Test Case 1 - Key and data shorter than block size
    let key = hex::decode("0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b").unwrap();
    let expected =
        hex::decode("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7").unwrap();
    assert_eq!(Hmac::<Sha256>::mac(&key, b"Hi There"), expected);

    // Test Case 2 - Key shorter than block size
    let expected =
        hex::decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843").unwrap();
    assert_eq!(
        Hmac::<Sha256>::mac(b"Jefe", b"what do ya want for nothing?"),
        expected
    );

    // Test Case 3 - 20-byte key, 50 bytes of 0xdd
    let key = [0xaau8; 20];
    let data = [0xddu8; 50];
    let expected =
        hex::decode("773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe").unwrap();
    assert_eq!(Hmac::<Sha256>::mac(&key, &data), expected);

    // Test Case 6 - Key larger than block size, hashed first
    let key = [0xaau8; 131];
    let expected =
        hex::decode("60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54").unwrap();
    assert_eq!(
        Hmac::<Sha256>::mac(&key, b"Test Using Larger Than Block-Size Key - Hash Key First"),
        expected
    );
}

#[test]
fn test_hmac_other_digests() {
    let data = b"what do ya want for nothing?";
    assert_eq!(
        hex::encode(Hmac::<Sha224>::mac(b"Jefe", data)),
        "a30e01098bc6dbbf45690f3a7e9e6d0f8bbea2a39e6148008fd05e44"
    );
    assert_eq!(
        hex::encode(Hmac::<Sha512>::mac(b"Jefe", data)),
        "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
         9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
    );
}

#[test]
fn test_piecewise_update_matches_one_shot() {
    let mut h = Hmac::<Sha256>::new(b"key");
    h.update(b"what do ya ").update(b"want for nothing?");
    assert_eq!(
        h.finalize(),
        Hmac::<Sha256>::mac(b"key", b"what do ya want for nothing?")
    );
}

#[test]
fn test_verify() {
    let tag = Hmac::<Sha256>::mac(b"k", b"m");
    assert!(Hmac::<Sha256>::verify(b"k", b"m", &tag));
    assert!(!Hmac::<Sha256>::verify(b"k", b"m2", &tag));
    assert!(!Hmac::<Sha256>::verify(b"k", b"m", &tag[..31]));
}
