//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and drained at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Input ---
    /// A logical game key was pressed.
    KeyDown { key: GameKey },
    /// A logical game key was released.
    KeyUp { key: GameKey },

    // --- Level control ---
    /// Start the given level (only honored if campaign progress allows it).
    StartLevel { level: LevelId },
    /// Restart the current level from scratch with the same settings.
    RestartLevel,
    /// Return to the main menu, discarding the current level instance.
    ReturnToMenu,

    // --- Simulation control ---
    /// Suspend the update loop.
    Pause,
    /// Resume a paused level.
    Resume,

    // --- Progress ---
    /// Wipe campaign progress back to level one.
    ResetProgress,
}
