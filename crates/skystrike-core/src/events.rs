//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// One-shot events raised during a tick, drained into the next snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The player took a point of damage.
    PlayerHit { remaining_health: i32 },
    /// The player's plane was destroyed.
    PlayerDown,
    /// The player fired a shot.
    PlayerFired,
    /// An enemy plane was destroyed by weapons fire or collision.
    EnemyDown { kind: ActorKind },
    /// An enemy crossed the left boundary and was removed (player penalized).
    EnemyPenetrated,
    /// The boss raised its shield.
    BossShieldUp,
    /// The boss dropped its shield.
    BossShieldDown,
    /// The level's win predicate was satisfied.
    LevelComplete { level: LevelId },
    /// The player was destroyed before winning.
    LevelFailed { level: LevelId },
}
