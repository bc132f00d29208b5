//! The entity record: one ship or shot in the arena.
//!
//! Plain copyable data; game logic lives in the sim systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{ENEMY_MODEL_START, ID_MODEL_SHOT};
use crate::enums::{EntityKind, Owner};
use crate::envelope::{self, Envelope};
use crate::geometry;
use crate::model::ModelTable;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Entity {
    /// World-space anchor.
    pub position: Vec2,
    /// Unit heading; kept in sync with `rotation_deg`.
    pub direction: Vec2,
    pub rotation_deg: f32,
    /// Per-axis multiplier on the model's cell grid.
    pub scale: Vec2,
    /// Offset of `position` from the model origin, in model cells.
    pub pivot: Vec2,
    /// Index into the model table. The id range determines the kind.
    pub model_id: usize,
    /// Scalar speed along `direction` (units/s).
    pub speed: f32,
    /// Projectile owner tag. `None` for ships; never `None` for a shot.
    pub owner: Option<Owner>,
    /// Cached envelope corners; valid only after the per-tick refresh.
    pub envelope: Envelope,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            direction: Vec2::Y,
            rotation_deg: 0.0,
            scale: Vec2::ONE,
            pivot: Vec2::ZERO,
            model_id: 0,
            speed: 0.0,
            owner: None,
            envelope: [Vec2::ZERO; 4],
        }
    }
}

impl Entity {
    /// Classification derived from the model-id partition.
    pub fn kind(&self) -> EntityKind {
        if self.model_id >= ENEMY_MODEL_START {
            EntityKind::EnemyShip
        } else if self.model_id == ID_MODEL_SHOT {
            EntityKind::Shot
        } else {
            EntityKind::PlayerShip
        }
    }

    pub fn is_enemy(&self) -> bool {
        self.kind() == EntityKind::EnemyShip
    }

    pub fn is_shot(&self) -> bool {
        self.kind() == EntityKind::Shot
    }

    /// Whether this is a live shot belonging to `owner`.
    pub fn is_shot_of(&self, owner: Owner) -> bool {
        self.is_shot() && self.owner == Some(owner)
    }

    /// Rotate in place by `deg`, keeping heading and angle in sync.
    pub fn rotate_by(&mut self, deg: f32) {
        self.rotation_deg += deg;
        self.direction = geometry::rotate_deg(self.direction, deg);
    }

    /// Set the absolute rotation, rebuilding the heading from the base axis.
    pub fn set_rotation(&mut self, deg: f32) {
        self.rotation_deg = deg;
        self.direction = geometry::heading_from_deg(deg);
    }

    /// Advance the position along the heading.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.direction * self.speed * dt;
    }

    /// Recompute the cached envelope from the current pose.
    pub fn refresh_envelope(&mut self, models: &ModelTable) {
        let (cols, rows) = models.dims(self.model_id);
        self.envelope = envelope::oriented_envelope(
            self.position,
            self.direction,
            self.pivot,
            self.scale,
            cols,
            rows,
        );
    }

    /// Edge-intersection test against another entity's cached envelope.
    pub fn collides(&self, other: &Entity) -> bool {
        envelope::envelopes_intersect(&self.envelope, &other.envelope)
    }
}
