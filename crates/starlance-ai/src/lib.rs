//! Enemy decision layer for STARLANCE.
//!
//! Pure functions over an injected RNG — no engine or pool dependency,
//! so decision behavior is reproducible under a fixed seed.

pub mod decisions;

pub use decisions::{decide, Decision};
