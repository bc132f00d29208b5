//! Simulation constants and tuning parameters.

use glam::Vec2;

// --- Arena ---

/// Half extent of the square base arena (world units). Bounds run -d..+d.
pub const ARENA_HALF_EXTENT: f32 = 20.0;

/// Distance outside the arena beyond which projectiles are culled.
pub const CULL_MARGIN: f32 = 2.0;

/// Inset from the arena edge at which enemies reverse heading.
pub const EDGE_BOUNCE_INSET: f32 = 1.0;

/// Inset used when clamping ship positions to the arena.
pub const POSITION_CLAMP_INSET: f32 = 0.5;

// --- Entity pool ---

/// Fixed capacity of the entity pool.
pub const MAX_ENTITIES: usize = 500;

// --- Model table layout ---

/// Model id of the player ship.
pub const ID_MODEL_PLAYER: usize = 0;

/// Model id of the shot pellet.
pub const ID_MODEL_SHOT: usize = 1;

/// First enemy-ship model id. Every id at or above this is an enemy model.
pub const ENEMY_MODEL_START: usize = 2;

// --- Match rules ---

/// Lives at match start.
pub const STARTING_LIVES: u32 = 3;

/// Score awarded per enemy destroyed.
pub const SCORE_PER_KILL: u32 = 100;

/// Enemies owed to the arena when a match begins (drained gradually).
pub const FIRST_WAVE_SIZE: u32 = 10;

/// Cap on simultaneously live enemies.
pub const MAX_ENEMIES_ALIVE: usize = 8;

/// Cap on live player-owned shots.
pub const MAX_PLAYER_SHOTS: usize = 20;

/// Cap on live enemy-owned shots.
pub const MAX_ENEMY_SHOTS: usize = 100;

/// Countdown length before a match goes live (seconds).
pub const COUNTDOWN_SECS: f32 = 3.0;

// --- Timing ---

/// Upper clamp on a single tick's dt (seconds).
pub const MAX_TICK_STEP: f32 = 0.1;

/// Accumulated real time between AI/spawn decision steps (seconds).
pub const LOGIC_INTERVAL: f32 = 0.1;

// --- Player kinematics ---

/// Target angular speed under rotation input (deg/s).
pub const ROT_SPEED_DEG: f32 = 180.0;

/// Angular acceleration toward the target angular speed (deg/s²).
pub const ANG_ACCEL_DEG: f32 = 720.0;

/// Angular damping applied when no rotation input is held (1/s).
pub const ANG_DAMP: f32 = 8.0;

/// Forward thrust acceleration (units/s²).
pub const THRUST_ACC: f32 = 7.0;

/// Brake deceleration (units/s²).
pub const BRAKE_ACC: f32 = 12.0;

/// Linear damping applied while coasting (1/s).
pub const LINEAR_DAMPING: f32 = 1.5;

/// Top player speed (units/s).
pub const MAX_PLAYER_SPEED: f32 = 6.0;

/// Player ship rotation at match start (degrees).
pub const PLAYER_START_ROTATION_DEG: f32 = -90.0;

/// Player ship sprite scale.
pub const PLAYER_SCALE: f32 = 0.7;

// --- Shots ---

/// Player shot speed (units/s).
pub const PLAYER_SHOT_SPEED: f32 = 16.0;

/// Enemy shot speed (units/s).
pub const ENEMY_SHOT_SPEED: f32 = 4.5;

/// Fraction of the shooter's speed inherited by a player shot.
pub const SHOT_SPEED_INHERIT: f32 = 0.3;

/// Shot sprite scale.
pub const SHOT_SCALE: f32 = 0.38;

/// Muzzle offset as a multiple of the shooter model's scaled height.
pub const SHOT_MUZZLE_FACTOR: f32 = 1.30;

/// Shot pivot (model cells).
pub const SHOT_PIVOT: Vec2 = Vec2::new(0.5, 0.0);

/// Seconds between successive player shots.
pub const PLAYER_FIRE_COOLDOWN: f32 = 0.18;

// --- Enemies ---

/// Enemy speed band (units/s).
pub const ENEMY_SPEED_MIN: f32 = 0.7;
pub const ENEMY_SPEED_MAX: f32 = 2.2;

/// Enemy ship sprite scale.
pub const ENEMY_SCALE: f32 = 0.6;

/// Enemy pivot (model cells).
pub const ENEMY_PIVOT: Vec2 = Vec2::new(0.5, 0.0);

// --- Spawn controller ---

/// Placement attempts per spawn before reporting failure.
pub const SPAWN_ATTEMPTS: usize = 120;

/// Inset from the arena edge for candidate spawn positions.
pub const SPAWN_MARGIN: f32 = 2.0;

/// Minimum distance between a spawn candidate and the player.
pub const SPAWN_SAFE_RADIUS: f32 = 4.0;

/// Base interval between spawns at score 0 (seconds).
pub const SPAWN_BASE_COOLDOWN: f32 = 1.0;

/// Score at which the spawn rate has doubled.
pub const SPAWN_SCORE_K: f32 = 500.0;

/// Floor on the spawn interval regardless of score (seconds).
pub const SPAWN_MIN_COOLDOWN: f32 = 0.25;

// --- Enemy AI ---

/// Per-second probability of an enemy perturbing its heading.
pub const AI_TURN_PROB_PER_SEC: f32 = 0.5;

/// Maximum heading perturbation magnitude (degrees).
pub const AI_TURN_MAX_DEG: f32 = 30.0;

/// Per-second probability of an enemy firing.
pub const AI_FIRE_PROB_PER_SEC: f32 = 0.7;
