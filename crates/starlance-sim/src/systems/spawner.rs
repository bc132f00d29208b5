//! Spawn controller: rejection-sampling placement of enemies and the
//! score-scaled drain of pending spawn credits.

use glam::vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starlance_core::constants::*;
use starlance_core::events::GameEvent;
use starlance_core::geometry::Bounds;
use starlance_core::model::ModelTable;
use starlance_core::pool::EntityPool;

use crate::engine::MatchState;
use crate::world_setup;

/// Interval between spawns for a score: base / (1 + score/K), floored.
/// Monotonically non-increasing in score.
pub fn spawn_cooldown(score: u32) -> f32 {
    let cd = SPAWN_BASE_COOLDOWN / (1.0 + score as f32 / SPAWN_SCORE_K);
    cd.max(SPAWN_MIN_COOLDOWN)
}

/// Attempt to place one enemy. Rejects outright when the pool is full
/// or the live-enemy cap is reached; otherwise draws up to
/// `SPAWN_ATTEMPTS` candidates and accepts the first that is outside
/// the player's safety radius and collides with nothing. Returns false
/// when every attempt is rejected — the caller keeps its credit.
pub fn try_spawn_enemy(
    pool: &mut EntityPool,
    models: &ModelTable,
    bounds: &Bounds,
    rng: &mut ChaCha8Rng,
    spawn_cycle: &mut usize,
) -> bool {
    if pool.is_full() || pool.enemy_count() >= MAX_ENEMIES_ALIVE {
        return false;
    }
    let player_pos = match pool.player() {
        Some(p) => p.position,
        None => return false,
    };
    let enemy_models = models.enemy_model_count();
    if enemy_models == 0 {
        return false;
    }

    // Candidate tests read cached envelopes; make them current.
    pool.refresh_envelopes(models);

    let area = bounds.inset(SPAWN_MARGIN);
    let model_id = ENEMY_MODEL_START + (*spawn_cycle % enemy_models);

    for _ in 0..SPAWN_ATTEMPTS {
        let position = vec2(
            rng.gen_range(area.min.x..area.max.x),
            rng.gen_range(area.min.y..area.max.y),
        );
        let rotation = rng.gen_range(0.0..360.0);
        let speed = rng.gen_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX);

        let candidate = world_setup::make_enemy(models, position, rotation, speed, model_id);

        if candidate.position.distance_squared(player_pos) < SPAWN_SAFE_RADIUS * SPAWN_SAFE_RADIUS
        {
            continue;
        }
        if pool.entities().iter().any(|e| e.collides(&candidate)) {
            continue;
        }

        *spawn_cycle += 1;
        return pool.append(candidate);
    }
    false
}

/// Drain pending spawn credits at the dynamic cooldown. Runs at the
/// logic cadence; paused while the live-enemy cap is hit, independent
/// of the pending counter.
pub fn run(
    pool: &mut EntityPool,
    models: &ModelTable,
    bounds: &Bounds,
    rng: &mut ChaCha8Rng,
    spawn_cycle: &mut usize,
    state: &mut MatchState,
    events: &mut Vec<GameEvent>,
    dt_logic: f32,
) {
    if state.pending_spawns == 0 {
        return;
    }

    state.spawn_accum += dt_logic;
    let mut cd = spawn_cooldown(state.score);

    if pool.enemy_count() >= MAX_ENEMIES_ALIVE {
        return;
    }

    while state.pending_spawns > 0 && state.spawn_accum >= cd {
        if pool.enemy_count() >= MAX_ENEMIES_ALIVE {
            break;
        }
        if try_spawn_enemy(pool, models, bounds, rng, spawn_cycle) {
            state.pending_spawns -= 1;
            if let Some(spawned) = pool.entities().last() {
                events.push(GameEvent::EnemySpawned {
                    model_id: spawned.model_id,
                });
            }
        }
        state.spawn_accum -= cd;
        cd = spawn_cooldown(state.score);
    }
}
