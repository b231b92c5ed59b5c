//! Constants for the traditional elliptic-curve schemes

pub mod ecdh;
pub mod ecdsa;
