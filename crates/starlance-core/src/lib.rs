//! Core types and definitions for the STARLANCE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, the entity record and pool, sprite models, input, events,
//! snapshots, and constants. It has no dependency on any runtime
//! framework and carries no RNG — all stochastic behavior lives in the
//! sim and ai crates.

pub mod commands;
pub mod constants;
pub mod entity;
pub mod enums;
pub mod envelope;
pub mod events;
pub mod geometry;
pub mod input;
pub mod model;
pub mod pool;
pub mod state;

#[cfg(test)]
mod tests;
