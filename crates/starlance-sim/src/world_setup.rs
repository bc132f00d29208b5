//! Entity spawn factories: the player ship and shots.
//!
//! Enemy placement lives in `systems::spawner`, which needs the RNG and
//! rejection-sampling loop; the factories here are deterministic.

use glam::{vec2, Vec2};

use starlance_core::constants::*;
use starlance_core::entity::Entity;
use starlance_core::enums::Owner;
use starlance_core::geometry;
use starlance_core::model::ModelTable;
use starlance_core::pool::EntityPool;

/// Create the player at the arena center in slot 0 and snapshot its
/// pose as the respawn backup.
pub fn create_player(pool: &mut EntityPool, models: &ModelTable) {
    let (cols, _) = models.dims(ID_MODEL_PLAYER);
    let mut player = Entity {
        position: Vec2::ZERO,
        scale: Vec2::splat(PLAYER_SCALE),
        // Pivot at the model's width center so the ship rotates in place.
        pivot: vec2(cols as f32 * 0.5, 0.0),
        model_id: ID_MODEL_PLAYER,
        ..Entity::default()
    };
    player.set_rotation(PLAYER_START_ROTATION_DEG);
    player.refresh_envelope(models);

    pool.append(player);
    pool.snapshot_player();
}

/// Spawn a shot from the entity in `shooter_idx`, inheriting its
/// heading. Slot 0 tags the shot as the player's; anything else as an
/// enemy's. Returns false when the pool is full or the shooter is gone.
pub fn spawn_shot(pool: &mut EntityPool, models: &ModelTable, shooter_idx: usize) -> bool {
    if pool.is_full() {
        return false;
    }
    let shooter = match pool.get(shooter_idx) {
        Some(e) => *e,
        None => return false,
    };

    let owner = if shooter_idx == 0 {
        Owner::Player
    } else {
        Owner::Enemy
    };
    let speed = match owner {
        Owner::Player => PLAYER_SHOT_SPEED + (shooter.speed * SHOT_SPEED_INHERIT).max(0.0),
        Owner::Enemy => ENEMY_SHOT_SPEED,
    };

    // Muzzle sits past the shooter's nose so the shot clears its envelope.
    let (_, rows) = models.dims(shooter.model_id);
    let muzzle = shooter.position
        + shooter.direction * (rows as f32 * shooter.scale.y) * SHOT_MUZZLE_FACTOR;

    let mut shot = Entity {
        position: muzzle,
        direction: shooter.direction,
        rotation_deg: shooter.rotation_deg,
        scale: Vec2::splat(SHOT_SCALE),
        pivot: SHOT_PIVOT,
        model_id: ID_MODEL_SHOT,
        speed,
        owner: Some(owner),
        ..Entity::default()
    };
    shot.refresh_envelope(models);

    pool.append(shot)
}

/// Build an enemy entity for a pose drawn by the spawn controller.
pub fn make_enemy(models: &ModelTable, position: Vec2, rotation_deg: f32, speed: f32, model_id: usize) -> Entity {
    let mut enemy = Entity {
        position,
        direction: geometry::heading_from_deg(rotation_deg),
        rotation_deg,
        scale: Vec2::splat(ENEMY_SCALE),
        pivot: ENEMY_PIVOT,
        model_id,
        speed,
        ..Entity::default()
    };
    enemy.refresh_envelope(models);
    enemy
}
