//! DER and PEM codecs for keys and signatures

pub mod der;
pub mod pem;

pub use pem::{from_pem, to_pem};
