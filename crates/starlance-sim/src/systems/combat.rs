//! The ordered combat pass: shot resolution, player damage, off-arena
//! culling, and the victory check.
//!
//! The step order is load-bearing. Envelopes are refreshed before any
//! test and again after every removal, because swap-remove relocates
//! the last slot. Paired removals go highest index first.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starlance_core::constants::*;
use starlance_core::enums::Owner;
use starlance_core::events::GameEvent;
use starlance_core::geometry::Bounds;
use starlance_core::model::ModelTable;
use starlance_core::pool::EntityPool;

use crate::engine::MatchState;

/// Terminal transitions requested by the combat pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombatOutcome {
    pub defeat: bool,
    pub victory: bool,
}

pub fn run(
    pool: &mut EntityPool,
    models: &ModelTable,
    bounds: &Bounds,
    rng: &mut ChaCha8Rng,
    state: &mut MatchState,
    events: &mut Vec<GameEvent>,
) -> CombatOutcome {
    pool.refresh_envelopes(models);

    resolve_player_shots(pool, models, rng, state, events);

    if resolve_enemy_shots(pool, models, state, events) {
        // Lives exhausted: no further combat processing this tick.
        return CombatOutcome {
            defeat: true,
            victory: false,
        };
    }

    cull_stray_shots(pool, bounds);

    if pool.enemy_count() == 0 && state.pending_spawns == 0 {
        events.push(GameEvent::Victory);
        return CombatOutcome {
            defeat: false,
            victory: true,
        };
    }

    CombatOutcome::default()
}

/// Player shots vs enemies. A hit removes both (higher index first),
/// awards score, and credits 1–2 pending spawns.
fn resolve_player_shots(
    pool: &mut EntityPool,
    models: &ModelTable,
    rng: &mut ChaCha8Rng,
    state: &mut MatchState,
    events: &mut Vec<GameEvent>,
) {
    let mut i = 0;
    while i < pool.len() {
        let shot = pool.entities()[i];
        if !shot.is_shot_of(Owner::Player) {
            i += 1;
            continue;
        }

        let mut hit = false;
        for j in 0..pool.len() {
            let target = pool.entities()[j];
            if !target.is_enemy() || !shot.collides(&target) {
                continue;
            }

            state.score += SCORE_PER_KILL;
            pool.remove(i.max(j));
            pool.remove(i.min(j));
            state.pending_spawns += if rng.gen_bool(0.5) { 1 } else { 2 };
            events.push(GameEvent::EnemyDestroyed {
                score_awarded: SCORE_PER_KILL,
            });
            pool.refresh_envelopes(models);
            hit = true;
            break;
        }

        // On a hit the swapped-in entity now sits at i; re-examine it.
        if !hit {
            i += 1;
        }
    }
}

/// Enemy shots vs the player. A hit costs a life and resets the player
/// from its backup pose. Returns true when lives reach zero.
fn resolve_enemy_shots(
    pool: &mut EntityPool,
    models: &ModelTable,
    state: &mut MatchState,
    events: &mut Vec<GameEvent>,
) -> bool {
    let mut i = 0;
    while i < pool.len() {
        let shot = pool.entities()[i];
        if !shot.is_shot_of(Owner::Enemy) {
            i += 1;
            continue;
        }

        let player = pool.entities()[0];
        if !player.collides(&shot) {
            i += 1;
            continue;
        }

        state.lives = state.lives.saturating_sub(1);
        pool.restore_player();
        pool.remove(i);
        pool.refresh_envelopes(models);
        events.push(GameEvent::PlayerHit {
            lives_left: state.lives,
        });

        if state.lives == 0 {
            events.push(GameEvent::Defeat);
            return true;
        }
    }
    false
}

/// Remove shots that drifted past the arena bounds plus margin.
fn cull_stray_shots(pool: &mut EntityPool, bounds: &Bounds) {
    let mut i = 0;
    while i < pool.len() {
        let e = pool.entities()[i];
        if e.is_shot() && !bounds.contains_with_margin(e.position, CULL_MARGIN) {
            pool.remove(i);
            continue;
        }
        i += 1;
    }
}
