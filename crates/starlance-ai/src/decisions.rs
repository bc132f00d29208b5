//! Per-step stochastic decisions for enemy ships.
//!
//! Each enemy is evaluated independently at the logic cadence. Both
//! draws scale with the elapsed step, so the decision rate is
//! independent of frame rate. The fire decision expresses intent only;
//! the sim gates it against the global enemy-shot cap.

use rand::Rng;

use starlance_core::constants::{AI_FIRE_PROB_PER_SEC, AI_TURN_MAX_DEG, AI_TURN_PROB_PER_SEC};

/// Outcome of one decision step for one enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// Heading perturbation to apply, if any (degrees).
    pub turn_delta_deg: Option<f32>,
    /// Whether the enemy wants to fire this step.
    pub fire: bool,
}

/// Evaluate one enemy for an elapsed step of `dt_secs`.
pub fn decide<R: Rng>(rng: &mut R, dt_secs: f32) -> Decision {
    let turn_delta_deg = if rng.gen::<f32>() < AI_TURN_PROB_PER_SEC * dt_secs {
        Some(rng.gen_range(-AI_TURN_MAX_DEG..AI_TURN_MAX_DEG))
    } else {
        None
    };

    let fire = rng.gen::<f32>() < AI_FIRE_PROB_PER_SEC * dt_secs;

    Decision {
        turn_delta_deg,
        fire,
    }
}
