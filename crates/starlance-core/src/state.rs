//! Frame snapshot — the complete visible state handed to the renderer
//! each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, GamePhase, MenuItem, Owner};
use crate::events::GameEvent;

/// One drawable entity. Draw dispatch keys off `kind` (and `owner` for
/// shot coloring); the renderer never touches the pool directly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EntityView {
    pub position: Vec2,
    pub rotation_deg: f32,
    pub scale: Vec2,
    pub pivot: Vec2,
    pub model_id: usize,
    pub kind: EntityKind,
    pub owner: Option<Owner>,
}

/// HUD readouts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    pub lives: u32,
    pub elapsed_secs: f32,
    pub enemies_alive: usize,
}

/// Everything the shell needs to draw one frame and react to what
/// happened during the tick that produced it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub hud: HudView,
    /// Seconds left on the pre-match countdown (0 outside `Countdown`).
    pub countdown_remaining: f32,
    /// Whether forward thrust is applied (drives the exhaust flame).
    pub player_thrusting: bool,
    pub menu_cursor: MenuItem,
    pub entities: Vec<EntityView>,
    pub events: Vec<GameEvent>,
}
