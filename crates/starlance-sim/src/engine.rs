//! Game engine — owns all match state and drives the tick pipeline.
//!
//! `GameEngine` holds the entity pool, model table, arena bounds, and a
//! seeded RNG, and advances the game one variable-dt tick at a time.
//! Physics integrates every tick; AI and spawn decisions run at a fixed
//! accumulated cadence so the stochastic decision rate is independent
//! of frame rate. Headless: the shell feeds it input and draws the
//! snapshots it returns.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starlance_core::commands::UiCommand;
use starlance_core::constants::*;
use starlance_core::enums::{GamePhase, MenuItem, Owner};
use starlance_core::events::GameEvent;
use starlance_core::geometry::Bounds;
use starlance_core::input::InputState;
use starlance_core::model::ModelTable;
use starlance_core::pool::EntityPool;
use starlance_core::state::FrameSnapshot;

use crate::systems;
use crate::systems::movement::PlayerControl;
use crate::world_setup;

/// Configuration for a new engine.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed + same input = same game.
    pub seed: u64,
    /// Half extent of the initial square arena.
    pub arena_half_extent: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena_half_extent: ARENA_HALF_EXTENT,
        }
    }
}

/// Mutable per-match bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchState {
    pub score: u32,
    pub lives: u32,
    pub elapsed_secs: f32,
    /// Enemies still owed to the arena.
    pub pending_spawns: u32,
    /// Time accumulated toward the next pending-spawn drain.
    pub spawn_accum: f32,
}

pub struct GameEngine {
    pool: EntityPool,
    models: ModelTable,
    bounds: Bounds,
    rng: ChaCha8Rng,
    phase: GamePhase,
    menu_cursor: MenuItem,
    state: MatchState,
    countdown_remaining: f32,
    logic_accum: f32,
    fire_cooldown: f32,
    player_ctrl: PlayerControl,
    /// Enemies spawned so far; cycles the enemy model set.
    spawn_cycle: usize,
    events: Vec<GameEvent>,
}

impl GameEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            pool: EntityPool::default(),
            models: ModelTable::standard_set(),
            bounds: Bounds::from_half_extent(config.arena_half_extent),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            phase: GamePhase::default(),
            menu_cursor: MenuItem::default(),
            state: MatchState::default(),
            countdown_remaining: 0.0,
            logic_accum: 0.0,
            fire_cooldown: 0.0,
            player_ctrl: PlayerControl::default(),
            spawn_cycle: 0,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn pool(&self) -> &EntityPool {
        &self.pool
    }

    pub fn models(&self) -> &ModelTable {
        &self.models
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn lives(&self) -> u32 {
        self.state.lives
    }

    /// Replace the arena bounds (window resize). Takes effect on the
    /// next tick's clamping and culling.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Apply a discrete UI command between ticks.
    pub fn ui_command(&mut self, cmd: UiCommand) {
        match self.phase {
            GamePhase::Menu => match cmd {
                UiCommand::MenuUp => self.menu_cursor = self.menu_cursor.prev(),
                UiCommand::MenuDown => self.menu_cursor = self.menu_cursor.next(),
                UiCommand::MenuSelect => match self.menu_cursor {
                    MenuItem::Start => {
                        self.reset_match();
                        self.phase = GamePhase::Countdown;
                        self.countdown_remaining = COUNTDOWN_SECS;
                    }
                    MenuItem::Help => self.phase = GamePhase::Help,
                    MenuItem::Quit => self.events.push(GameEvent::QuitRequested),
                },
                UiCommand::Cancel => self.events.push(GameEvent::QuitRequested),
            },
            GamePhase::Help => {
                if cmd == UiCommand::Cancel {
                    self.phase = GamePhase::Menu;
                }
            }
            GamePhase::Countdown | GamePhase::Playing => {
                if cmd == UiCommand::Cancel {
                    self.phase = GamePhase::Menu;
                }
            }
            GamePhase::GameOver | GamePhase::Victory => {
                if matches!(cmd, UiCommand::Cancel | UiCommand::MenuSelect) {
                    self.phase = GamePhase::Menu;
                }
            }
        }
    }

    /// Advance the simulation by `dt` seconds (clamped) and return the
    /// frame snapshot, with the tick's events drained into it.
    pub fn tick(&mut self, dt: f32, input: &InputState) -> FrameSnapshot {
        let dt = dt.clamp(0.0, MAX_TICK_STEP);

        if self.fire_cooldown > 0.0 {
            self.fire_cooldown = (self.fire_cooldown - dt).max(0.0);
        }

        match self.phase {
            GamePhase::Countdown => {
                self.countdown_remaining -= dt;
                if self.countdown_remaining <= 0.0 {
                    self.countdown_remaining = 0.0;
                    self.begin_playing();
                }
            }
            GamePhase::Playing => self.playing_tick(dt, input),
            _ => {}
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.pool,
            self.phase,
            self.menu_cursor,
            self.countdown_remaining,
            self.player_ctrl.thrusting,
            &self.state,
            events,
        )
    }

    /// One live-gameplay tick: fire input, logic-cadence AI + spawn,
    /// movement, then the ordered combat pass.
    fn playing_tick(&mut self, dt: f32, input: &InputState) {
        self.state.elapsed_secs += dt;

        if input.fire && self.fire_cooldown <= 0.0 {
            if self.pool.shot_count(Owner::Player) < MAX_PLAYER_SHOTS
                && world_setup::spawn_shot(&mut self.pool, &self.models, 0)
            {
                self.events.push(GameEvent::ShotFired {
                    owner: Owner::Player,
                });
            }
            self.fire_cooldown = PLAYER_FIRE_COOLDOWN;
        }

        self.logic_accum += dt;
        if self.logic_accum >= LOGIC_INTERVAL {
            let step = self.logic_accum;
            self.logic_accum = 0.0;
            self.enemy_decisions(step);
            systems::spawner::run(
                &mut self.pool,
                &self.models,
                &self.bounds,
                &mut self.rng,
                &mut self.spawn_cycle,
                &mut self.state,
                &mut self.events,
                step,
            );
        }

        systems::movement::run(
            &mut self.pool,
            &self.bounds,
            input,
            &mut self.player_ctrl,
            dt,
        );

        let outcome = systems::combat::run(
            &mut self.pool,
            &self.models,
            &self.bounds,
            &mut self.rng,
            &mut self.state,
            &mut self.events,
        );
        if outcome.defeat {
            self.phase = GamePhase::GameOver;
        } else if outcome.victory {
            self.phase = GamePhase::Victory;
        }
    }

    /// Evaluate every enemy's maneuver/fire decision for one logic step.
    /// Shots appended mid-scan land at the tail and are skipped by the
    /// enemy filter.
    fn enemy_decisions(&mut self, step: f32) {
        let mut i = 1;
        while i < self.pool.len() {
            if !self.pool.entities()[i].is_enemy() {
                i += 1;
                continue;
            }

            let decision = starlance_ai::decide(&mut self.rng, step);
            if let Some(delta) = decision.turn_delta_deg {
                if let Some(enemy) = self.pool.get_mut(i) {
                    enemy.rotate_by(delta);
                }
            }
            if decision.fire
                && self.pool.shot_count(Owner::Enemy) < MAX_ENEMY_SHOTS
                && world_setup::spawn_shot(&mut self.pool, &self.models, i)
            {
                self.events.push(GameEvent::ShotFired {
                    owner: Owner::Enemy,
                });
            }
            i += 1;
        }
    }

    /// Clear the arena and stand the player up at the center.
    fn reset_match(&mut self) {
        self.pool.clear();
        self.state = MatchState {
            lives: STARTING_LIVES,
            ..MatchState::default()
        };
        self.player_ctrl = PlayerControl::default();
        self.fire_cooldown = 0.0;
        self.logic_accum = 0.0;
        self.spawn_cycle = 0;
        world_setup::create_player(&mut self.pool, &self.models);
    }

    /// Countdown expired: go live and owe the first wave.
    fn begin_playing(&mut self) {
        self.phase = GamePhase::Playing;
        self.state.pending_spawns = FIRST_WAVE_SIZE;
        self.state.spawn_accum = 0.0;
    }

    // --- Test support ---

    /// Jump straight into a live match with an empty wave, for tests
    /// that stage their own entities.
    #[cfg(test)]
    pub(crate) fn begin_test_match(&mut self) {
        self.reset_match();
        self.phase = GamePhase::Playing;
    }

    #[cfg(test)]
    pub(crate) fn insert_test_entity(
        &mut self,
        entity: starlance_core::entity::Entity,
    ) -> bool {
        let mut entity = entity;
        entity.refresh_envelope(&self.models);
        self.pool.append(entity)
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &MatchState {
        &self.state
    }
}
