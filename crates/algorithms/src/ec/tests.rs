use super::*;
use num_bigint::BigUint;
use num_traits::One;

#[test]
fn test_registry_contents() {
    let names: Vec<&str> = curves().iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        [
            "NIST192p",
            "NIST224p",
            "NIST256p",
            "NIST384p",
            "NIST521p",
            "SECP256k1",
            "BRAINPOOLP256r1"
        ]
    );
    assert_eq!(nist192p().name(), "NIST192p");
    assert_eq!(nist521p().name(), "NIST521p");
    assert_eq!(secp256k1().name(), "SECP256k1");
    assert_eq!(brainpoolp256r1().name(), "BRAINPOOLP256r1");
}

#[test]
fn test_every_generator_is_valid() {
    for c in curves() {
        let g = c.generator();
        assert!(g.is_on_curve(), "{}", c.name());
        assert!(c.cofactor().is_one());
        assert_eq!(c.baselen(), c.curve().coordinate_len(), "{}", c.name());
    }
}

#[test]
fn test_lookup_by_name() {
    assert_eq!(curve_by_name("NIST256p").unwrap(), nist256p());
    assert_eq!(curve_by_name("prime256v1").unwrap(), nist256p());
    assert_eq!(curve_by_name("secp384r1").unwrap(), nist384p());
    assert!(matches!(
        curve_by_name("NIST999p"),
        Err(crate::error::Error::UnknownCurve { name }) if name == "NIST999p"
    ));
}

#[test]
fn test_lookup_by_oid() {
    assert_eq!(curve_by_oid(&[1, 2, 840, 10045, 3, 1, 7]).unwrap(), nist256p());
    assert_eq!(curve_by_oid(&[1, 3, 132, 0, 10]).unwrap(), secp256k1());
    match curve_by_oid(&[1, 2, 3]) {
        Err(crate::error::Error::UnknownCurve { name }) => assert_eq!(name, "1.2.3"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_curve_point_validation() {
    let c = nist256p();
    let g = c.generator();
    let (x, y) = (g.x().unwrap().clone(), g.y().unwrap().clone());
    assert_eq!(c.point(x.clone(), y.clone()).unwrap(), g);
    assert!(c.point(x, y + 1u32).is_err());
}

#[test]
fn test_scalar_range() {
    let c = nist192p();
    assert!(!c.is_valid_scalar(&BigUint::from(0u32)));
    assert!(c.is_valid_scalar(&BigUint::one()));
    assert!(!c.is_valid_scalar(c.order()));
}

#[test]
fn test_singular_curve_rejected() {
    // y^2 = x^3 over GF(23)
    assert!(CurveFp::new(BigUint::from(23u32), BigUint::from(0u32), BigUint::from(0u32)).is_err());
}
