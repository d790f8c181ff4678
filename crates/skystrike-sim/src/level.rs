//! Per-level policy: enemy population, player health, and win condition.

use skystrike_core::constants::*;
use skystrike_core::enums::LevelId;

/// How a level keeps its enemy roster populated.
#[derive(Debug, Clone)]
pub enum Population {
    /// Randomized waves: fill the gap to `cap` with independent per-slot
    /// spawn rolls each tick.
    Waves {
        /// Maximum concurrent enemy planes.
        cap: usize,
        /// Per-slot spawn probability each tick.
        spawn_probability: f64,
        /// Conditional on a spawn, probability the plane is an elite.
        elite_probability: f64,
    },
    /// A single scripted boss, spawned once at level start.
    Boss,
}

/// What ends the level in the player's favor.
#[derive(Debug, Clone, Copy)]
pub enum WinCondition {
    /// Destroy this many enemy planes.
    KillTarget(u32),
    /// Destroy the boss.
    BossDefeated,
}

/// Everything that varies between the three levels.
#[derive(Debug, Clone)]
pub struct LevelPolicy {
    pub level: LevelId,
    pub player_health: i32,
    pub population: Population,
    pub win: WinCondition,
}

impl LevelPolicy {
    /// Hardcoded policy for each of the three levels.
    pub fn for_level(level: LevelId) -> Self {
        match level {
            LevelId::One => Self {
                level,
                player_health: LEVEL_ONE_PLAYER_HEALTH,
                population: Population::Waves {
                    cap: LEVEL_ONE_ENEMY_CAP,
                    spawn_probability: LEVEL_ONE_SPAWN_PROBABILITY,
                    elite_probability: 0.0,
                },
                win: WinCondition::KillTarget(LEVEL_ONE_KILL_TARGET),
            },
            LevelId::Two => Self {
                level,
                player_health: LEVEL_TWO_PLAYER_HEALTH,
                population: Population::Waves {
                    cap: LEVEL_TWO_ENEMY_CAP,
                    spawn_probability: LEVEL_TWO_SPAWN_PROBABILITY,
                    elite_probability: LEVEL_TWO_ELITE_PROBABILITY,
                },
                win: WinCondition::KillTarget(LEVEL_TWO_KILL_TARGET),
            },
            LevelId::Three => Self {
                level,
                player_health: LEVEL_THREE_PLAYER_HEALTH,
                population: Population::Boss,
                win: WinCondition::BossDefeated,
            },
        }
    }

    /// Kill-count target for the HUD, zero on the boss level.
    pub fn kill_target(&self) -> u32 {
        match self.win {
            WinCondition::KillTarget(n) => n,
            WinCondition::BossDefeated => 0,
        }
    }
}
