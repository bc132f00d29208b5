//! Kinematic integration: player steering, position advance, and
//! arena-edge handling.

use starlance_core::constants::*;
use starlance_core::geometry::Bounds;
use starlance_core::input::InputState;
use starlance_core::pool::EntityPool;

/// Player steering state carried between ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerControl {
    /// Current angular velocity (deg/s).
    pub ang_vel_deg: f32,
    /// Whether forward thrust was applied this tick (for the renderer's
    /// exhaust flame).
    pub thrusting: bool,
}

/// Advance every entity for one tick: steer and integrate the player,
/// integrate enemies and shots, bounce enemies off the arena edges.
pub fn run(
    pool: &mut EntityPool,
    bounds: &Bounds,
    input: &InputState,
    ctrl: &mut PlayerControl,
    dt: f32,
) {
    steer_player(pool, input, ctrl, dt);

    if let Some(player) = pool.player_mut() {
        player.integrate(dt);
        player.position = bounds.clamp(player.position, POSITION_CLAMP_INSET);
    }

    let edge = bounds.inset(EDGE_BOUNCE_INSET);
    for entity in pool.entities_mut().iter_mut().skip(1) {
        entity.integrate(dt);
        if entity.is_enemy() {
            let p = entity.position;
            if p.x <= edge.min.x || p.x >= edge.max.x {
                entity.rotate_by(180.0);
            }
            if p.y <= edge.min.y || p.y >= edge.max.y {
                entity.rotate_by(180.0);
            }
            entity.position = bounds.clamp(entity.position, POSITION_CLAMP_INSET);
        }
    }
}

/// Smoothed rotation and thrust from held-key input.
fn steer_player(pool: &mut EntityPool, input: &InputState, ctrl: &mut PlayerControl, dt: f32) {
    let player = match pool.player_mut() {
        Some(p) => p,
        None => return,
    };

    let mut rot_dir = 0.0;
    if input.rotate_left {
        rot_dir += 1.0;
    }
    if input.rotate_right {
        rot_dir -= 1.0;
    }

    // Angular velocity chases the target under a capped acceleration.
    let target_ang_vel = rot_dir * ROT_SPEED_DEG;
    let diff = (target_ang_vel - ctrl.ang_vel_deg).clamp(-ANG_ACCEL_DEG * dt, ANG_ACCEL_DEG * dt);
    ctrl.ang_vel_deg += diff;

    if rot_dir == 0.0 {
        ctrl.ang_vel_deg -= ctrl.ang_vel_deg * ANG_DAMP * dt;
    }

    let d_ang = ctrl.ang_vel_deg * dt;
    if d_ang != 0.0 {
        player.rotate_by(d_ang);
    }

    let mut accel = 0.0;
    if input.thrust {
        accel += THRUST_ACC;
    }
    if input.brake {
        accel -= BRAKE_ACC;
    }
    ctrl.thrusting = accel > 0.0;

    player.speed += accel * dt;
    if accel <= 0.0 {
        let drag = player.speed * LINEAR_DAMPING * dt;
        player.speed = if player.speed > drag {
            player.speed - drag
        } else {
            0.0
        };
    }
    player.speed = player.speed.clamp(0.0, MAX_PLAYER_SPEED);
}
