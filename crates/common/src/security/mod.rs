//! Secure storage for secret material

pub mod secret;

pub use secret::SecretVec;
