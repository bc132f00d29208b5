//! Snapshot assembly: project the pool and match state into the
//! read-only view consumed by the renderer.

use starlance_core::enums::{GamePhase, MenuItem};
use starlance_core::events::GameEvent;
use starlance_core::pool::EntityPool;
use starlance_core::state::{EntityView, FrameSnapshot, HudView};

use crate::engine::MatchState;

pub fn build(
    pool: &EntityPool,
    phase: GamePhase,
    menu_cursor: MenuItem,
    countdown_remaining: f32,
    player_thrusting: bool,
    state: &MatchState,
    events: Vec<GameEvent>,
) -> FrameSnapshot {
    let entities = pool
        .entities()
        .iter()
        .map(|e| EntityView {
            position: e.position,
            rotation_deg: e.rotation_deg,
            scale: e.scale,
            pivot: e.pivot,
            model_id: e.model_id,
            kind: e.kind(),
            owner: e.owner,
        })
        .collect();

    FrameSnapshot {
        phase,
        hud: HudView {
            score: state.score,
            lives: state.lives,
            elapsed_secs: state.elapsed_secs,
            enemies_alive: pool.enemy_count(),
        },
        countdown_remaining,
        player_thrusting,
        menu_cursor,
        entities,
        events,
    }
}
