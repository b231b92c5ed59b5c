//! Common functionality shared by the ecsig scheme crates
//!
//! At present this is the zeroizing storage used for secret exponents and
//! derived shared secrets.

pub mod security;

// Re-export core security types
pub use security::SecretVec;
