//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Every concrete actor variety in the game.
///
/// Per-kind behavior (movement, fire, damage) is dispatched on this tag
/// inside the simulation systems rather than through an inheritance chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    /// The player-controlled fighter.
    Player,
    /// Standard enemy plane: constant leftward drift, occasional fire.
    Enemy,
    /// Elite enemy plane: tougher, faster shots, higher fire rate.
    Elite,
    /// The level-three boss: pattern movement, shield, heavy fire.
    Boss,
    /// Projectile fired by the player.
    PlayerShot,
    /// Projectile fired by a standard enemy.
    EnemyShot,
    /// Projectile fired by an elite enemy.
    EliteShot,
    /// Fireball fired by the boss.
    BossShot,
}

impl ActorKind {
    /// Whether this kind is a projectile (destroyed on any contact).
    pub fn is_projectile(self) -> bool {
        matches!(
            self,
            ActorKind::PlayerShot | ActorKind::EnemyShot | ActorKind::EliteShot | ActorKind::BossShot
        )
    }
}

/// Top-level phase of a level instance.
///
/// `Won` and `Lost` are terminal: no further update ticks execute for
/// that level instance until a new level is started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No level active; waiting for a `StartLevel` command.
    #[default]
    Menu,
    /// The update loop runs every tick.
    Running,
    /// Tick suspended entirely; all countdowns freeze.
    Paused,
    /// Win predicate satisfied at end of a tick.
    Won,
    /// Player destroyed.
    Lost,
}

/// The three hand-authored levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelId {
    One,
    Two,
    Three,
}

impl LevelId {
    /// The level that follows this one in the campaign, if any.
    pub fn next(self) -> Option<LevelId> {
        match self {
            LevelId::One => Some(LevelId::Two),
            LevelId::Two => Some(LevelId::Three),
            LevelId::Three => None,
        }
    }
}

/// Logical game keys. Bindings to physical keys are fixed constants in the
/// hosting shell; the simulation only sees these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKey {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Pause,
}
