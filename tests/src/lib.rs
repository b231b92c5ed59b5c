//! Shared fixtures for the ecsig integration tests
//!
//! Published vectors live in [`vectors`], parsed once on first use.
pub mod vectors;
