//! Simulation engine for STARLANCE.
//!
//! Owns the entity pool, runs the per-tick system pipeline, and
//! produces FrameSnapshots for the shell. Completely headless,
//! enabling deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{EngineConfig, GameEngine};
pub use starlance_core as core;
