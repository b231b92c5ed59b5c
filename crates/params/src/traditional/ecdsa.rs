//! Domain parameters for the named short Weierstrass curves
//!
//! Every curve here has the form `y^2 = x^3 + ax + b (mod p)`. Values are
//! big-endian hexadecimal strings so the table stays independent of any
//! big-integer representation; `ecsig-algorithms` parses them once when the
//! curve registry is first touched.

/// Object identifier of `id-ecPublicKey` (RFC 5480)
pub const ID_EC_PUBLIC_KEY_OID: &[u64] = &[1, 2, 840, 10045, 2, 1];

/// Version field of an RFC 5915 `ECPrivateKey`
pub const EC_PRIVATE_KEY_VERSION: u8 = 1;

/// Version field of a PKCS#8 `PrivateKeyInfo`
pub const PKCS8_VERSION: u8 = 0;

/// Static description of a named curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedCurveParams {
    /// Registry name, e.g. `NIST256p`
    pub name: &'static str,
    /// Name used by OpenSSL
    pub openssl_name: &'static str,
    /// Object identifier arcs of the named curve
    pub oid: &'static [u64],
    /// Field prime
    pub p: &'static str,
    /// Curve coefficient `a`
    pub a: &'static str,
    /// Curve coefficient `b`
    pub b: &'static str,
    /// Generator x-coordinate
    pub gx: &'static str,
    /// Generator y-coordinate
    pub gy: &'static str,
    /// Order of the generator
    pub n: &'static str,
    /// Cofactor
    pub h: u32,
}

/// NIST P-192 (secp192r1 / prime192v1)
pub const NIST_P192: NamedCurveParams = NamedCurveParams {
    name: "NIST192p",
    openssl_name: "prime192v1",
    oid: &[1, 2, 840, 10045, 3, 1, 1],
    p: "fffffffffffffffffffffffffffffffeffffffffffffffff",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffc",
    b: "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
    gx: "188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
    gy: "07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
    n: "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
    h: 1,
};

/// NIST P-224 (secp224r1)
pub const NIST_P224: NamedCurveParams = NamedCurveParams {
    name: "NIST224p",
    openssl_name: "secp224r1",
    oid: &[1, 3, 132, 0, 33],
    p: "ffffffffffffffffffffffffffffffff000000000000000000000001",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffffffffffe",
    b: "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
    gx: "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
    gy: "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
    n: "ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
    h: 1,
};

/// NIST P-256 (secp256r1 / prime256v1)
pub const NIST_P256: NamedCurveParams = NamedCurveParams {
    name: "NIST256p",
    openssl_name: "prime256v1",
    oid: &[1, 2, 840, 10045, 3, 1, 7],
    p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    a: "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
    b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    gx: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    gy: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    n: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
    h: 1,
};

/// NIST P-384 (secp384r1)
pub const NIST_P384: NamedCurveParams = NamedCurveParams {
    name: "NIST384p",
    openssl_name: "secp384r1",
    oid: &[1, 3, 132, 0, 34],
    p: concat!(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe",
        "ffffffff0000000000000000ffffffff",
    ),
    a: concat!(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe",
        "ffffffff0000000000000000fffffffc",
    ),
    b: concat!(
        "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a",
        "c656398d8a2ed19d2a85c8edd3ec2aef",
    ),
    gx: concat!(
        "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38",
        "5502f25dbf55296c3a545e3872760ab7",
    ),
    gy: concat!(
        "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0",
        "0a60b1ce1d7e819d7a431d7c90ea0e5f",
    ),
    n: concat!(
        "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf",
        "581a0db248b0a77aecec196accc52973",
    ),
    h: 1,
};

/// NIST P-521 (secp521r1)
pub const NIST_P521: NamedCurveParams = NamedCurveParams {
    name: "NIST521p",
    openssl_name: "secp521r1",
    oid: &[1, 3, 132, 0, 35],
    p: concat!(
        "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "ffff",
    ),
    a: concat!(
        "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "fffc",
    ),
    b: concat!(
        "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef1",
        "09e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b50",
        "3f00",
    ),
    gx: concat!(
        "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d",
        "3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5",
        "bd66",
    ),
    gy: concat!(
        "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e",
        "662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd1",
        "6650",
    ),
    n: concat!(
        "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e9138",
        "6409",
    ),
    h: 1,
};

/// SEC 2 secp256k1, the Koblitz curve used by Bitcoin
pub const SECP256K1: NamedCurveParams = NamedCurveParams {
    name: "SECP256k1",
    openssl_name: "secp256k1",
    oid: &[1, 3, 132, 0, 10],
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    a: "00",
    b: "07",
    gx: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    gy: "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    n: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
    h: 1,
};

/// Brainpool P-256r1 (RFC 5639)
pub const BRAINPOOL_P256R1: NamedCurveParams = NamedCurveParams {
    name: "BRAINPOOLP256r1",
    openssl_name: "brainpoolP256r1",
    oid: &[1, 3, 36, 3, 3, 2, 8, 1, 1, 7],
    p: "a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377",
    a: "7d5a0975fc2c3057eef67530417affe7fb8055c126dc5c6ce94a4b44f330b5d9",
    b: "26dc5c6ce94a4b44f330b5d9bbd77cbf958416295cf7e1ce6bccdc18ff8c07b6",
    gx: "8bd2aeb9cb7e57cb2c4b482ffc81b7afb9de27e1e3bd23c23a4453bd9ace3262",
    gy: "547ef835c3dac4fd97f8461a14611dc9c27745132ded8e545c1d54c72f046997",
    n: "a9fb57dba1eea9bc3e660a909d838d718c397aa3b561a6f7901e0e82974856a7",
    h: 1,
};

/// All curves known to the registry, in registration order
pub const NAMED_CURVES: &[NamedCurveParams] = &[
    NIST_P192,
    NIST_P224,
    NIST_P256,
    NIST_P384,
    NIST_P521,
    SECP256K1,
    BRAINPOOL_P256R1,
];
