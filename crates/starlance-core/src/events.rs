//! Events emitted by the simulation for UI and audio feedback.
//!
//! Drained into each frame snapshot; the shell reacts and discards.

use serde::{Deserialize, Serialize};

use crate::enums::Owner;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A shot left a muzzle.
    ShotFired { owner: Owner },
    /// The spawn controller placed a new enemy.
    EnemySpawned { model_id: usize },
    /// A player shot destroyed an enemy.
    EnemyDestroyed { score_awarded: u32 },
    /// An enemy shot connected; the player respawned from backup.
    PlayerHit { lives_left: u32 },
    /// Lives exhausted; the match is lost.
    Defeat,
    /// The wave is cleared; the match is won.
    Victory,
    /// The shell should shut down (menu quit).
    QuitRequested,
}
