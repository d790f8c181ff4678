//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::ActorKind;

/// Stable identifier assigned at spawn, used for deterministic snapshot
/// ordering and for the frontend to correlate actors across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Fixed sprite extent and current visibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sprite {
    pub width: f64,
    pub height: f64,
    pub visible: bool,
}

/// Terminal, monotonic destruction flag. Set exactly once; never cleared.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Destructible {
    pub destroyed: bool,
}

/// Integer hit points for planes. Never decremented below zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
}

/// Player-only state: movement intents, score, and tick countdowns.
///
/// The countdowns only advance while the level ticks, so pausing the
/// loop freezes them too.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerState {
    /// Vertical intent multiplier in {-1, 0, 1} (-1 = up).
    pub vertical_mult: i32,
    /// Horizontal intent multiplier in {-1, 0, 1} (-1 = left).
    pub horizontal_mult: i32,
    /// Whether the fire key is currently held.
    pub fire_held: bool,
    /// Enemies destroyed this level, reconciled from the enemy-count delta.
    pub kills: u32,
    /// Remaining invincibility window; collision passes skip the player
    /// while this is nonzero.
    pub invincible_ticks: u32,
    /// Remaining ticks before the fire key may emit another shot.
    pub fire_cooldown_ticks: u32,
}

/// Boss-only state: the shuffled move pattern and the shield.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossState {
    /// 15-entry multiset of {+v, -v, 0}, reshuffled in place.
    pub pattern: Vec<f64>,
    /// Current pattern position.
    pub cursor: usize,
    /// Consecutive draws taken from the current position.
    pub consecutive_uses: u32,
    pub shielded: bool,
    /// Ticks the shield has been continuously active.
    pub shield_ticks: u32,
}

/// Enemies track their spawn X so boundary penetration can be measured as
/// total horizontal displacement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Penetrator {
    pub origin_x: f64,
}

// --- Collection markers ---
// The four ordered collections of the update loop, expressed as tags.

/// Member of the friendly-units collection (the player plane).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FriendlyUnit;

/// Member of the enemy-units collection (enemy, elite, boss).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HostileUnit;

/// Member of the player-projectiles collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerProjectile;

/// Member of the enemy-projectiles collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyProjectile;

// ActorKind (enums.rs) and Position/Velocity (types.rs) are also attached
// directly as components.

impl Health {
    pub fn new(current: i32) -> Self {
        Self { current }
    }
}

impl Sprite {
    pub fn new((width, height): (f64, f64)) -> Self {
        Self {
            width,
            height,
            visible: true,
        }
    }
}

impl ActorKind {
    /// Collision-box size for this kind.
    pub fn size(self) -> (f64, f64) {
        use crate::constants::*;
        match self {
            ActorKind::Player => PLAYER_SIZE,
            ActorKind::Enemy => ENEMY_SIZE,
            ActorKind::Elite => ELITE_SIZE,
            ActorKind::Boss => BOSS_SIZE,
            ActorKind::PlayerShot => PLAYER_SHOT_SIZE,
            ActorKind::EnemyShot => ENEMY_SHOT_SIZE,
            ActorKind::EliteShot => ELITE_SHOT_SIZE,
            ActorKind::BossShot => BOSS_SHOT_SIZE,
        }
    }
}
