//! Systems that operate on the entity pool each tick.
//!
//! Systems are functions over explicit state — the pool, bounds, match
//! state, and RNG are passed in by the engine; nothing is global. The
//! ordering the engine applies (movement, then the combat pass, with
//! AI/spawn at the logic cadence) is part of the correctness contract.

pub mod combat;
pub mod movement;
pub mod snapshot;
pub mod spawner;
