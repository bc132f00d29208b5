//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side a projectile belongs to. Governs the collision rule
/// applied to it: player shots test against enemies, enemy shots
/// against the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// Entity classification, derived from the model id partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    PlayerShip,
    Shot,
    EnemyShip,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Help,
    Countdown,
    Playing,
    GameOver,
    Victory,
}

/// Main menu entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuItem {
    #[default]
    Start,
    Help,
    Quit,
}

impl MenuItem {
    /// Next entry, wrapping.
    pub fn next(self) -> Self {
        match self {
            MenuItem::Start => MenuItem::Help,
            MenuItem::Help => MenuItem::Quit,
            MenuItem::Quit => MenuItem::Start,
        }
    }

    /// Previous entry, wrapping.
    pub fn prev(self) -> Self {
        match self {
            MenuItem::Start => MenuItem::Quit,
            MenuItem::Help => MenuItem::Start,
            MenuItem::Quit => MenuItem::Help,
        }
    }
}
