//! Control input as plain current-state booleans, sampled each tick.

use serde::{Deserialize, Serialize};

/// Held-key state for the player ship. The engine reads this every
/// tick; there is no event queue.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputState {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub brake: bool,
    pub fire: bool,
}
