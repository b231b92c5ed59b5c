//! Constants for Elliptic Curve Diffie-Hellman

/// Largest field byte length among the registered curves (P-521)
pub const ECDH_MAX_SHARED_SECRET_SIZE: usize = 66;

/// PEM label of a SubjectPublicKeyInfo
pub const PEM_PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// PEM label of an RFC 5915 ECPrivateKey
pub const PEM_EC_PRIVATE_KEY_LABEL: &str = "EC PRIVATE KEY";

/// PEM label of a PKCS#8 PrivateKeyInfo
pub const PEM_PKCS8_PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";
