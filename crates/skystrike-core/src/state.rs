//! Game state snapshot — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{GameTime, Position};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: GameTime,
    pub phase: GamePhase,
    pub level: Option<LevelId>,
    pub player: Option<PlayerView>,
    pub boss: Option<BossView>,
    /// Every live actor, sorted by id for stable iteration order.
    pub actors: Vec<ActorView>,
    pub events: Vec<GameEvent>,
}

/// A visible actor on the playfield.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorView {
    pub id: u32,
    pub kind: ActorKind,
    /// Top-left corner in screen pixels.
    pub position: Position,
    pub visible: bool,
}

/// Player status for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub health: i32,
    pub kills: u32,
    /// Kills still needed to finish the level (zero on the boss level).
    pub kills_remaining: u32,
    pub invincible: bool,
}

/// Boss status for the HUD (only present on the boss level).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BossView {
    pub health: i32,
    pub shielded: bool,
}
