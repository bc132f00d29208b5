//! Discrete UI commands sent from the shell to the engine.
//!
//! Applied between ticks; continuous control goes through `InputState`.

use serde::{Deserialize, Serialize};

/// Menu navigation and phase-level actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiCommand {
    /// Move the menu cursor up.
    MenuUp,
    /// Move the menu cursor down.
    MenuDown,
    /// Activate the highlighted menu entry.
    MenuSelect,
    /// Back out: help/countdown/playing/terminal screens return to the
    /// menu; from the menu, requests shutdown.
    Cancel,
}
