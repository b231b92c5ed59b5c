//! Internal helpers shared by the ecsig crates. Not part of the public API.

pub mod constant_time;
