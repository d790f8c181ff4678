//! Simulation constants and tuning parameters.
//!
//! Velocities are expressed in pixels per tick; durations in ticks.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 20;

/// Milliseconds per tick.
pub const TICK_MILLIS: u64 = 1000 / TICK_RATE as u64;

// --- Screen ---

/// Playfield width in pixels.
pub const SCREEN_WIDTH: f64 = 1300.0;

/// Playfield height in pixels.
pub const SCREEN_HEIGHT: f64 = 750.0;

/// Lowest Y at which an enemy may spawn (leaves room for the HUD strip).
pub const ENEMY_MAX_SPAWN_Y: f64 = SCREEN_HEIGHT - 150.0;

// --- Player ---

pub const PLAYER_START_X: f64 = 5.0;
pub const PLAYER_START_Y: f64 = 300.0;

/// Movement speed per axis, scaled by the intent multiplier.
pub const PLAYER_SPEED: f64 = 12.0;

/// Axis-independent movement clamp rectangle.
pub const PLAYER_X_LEFT_BOUND: f64 = 0.0;
pub const PLAYER_X_RIGHT_BOUND: f64 = 1200.0;
pub const PLAYER_Y_UPPER_BOUND: f64 = 0.0;
pub const PLAYER_Y_LOWER_BOUND: f64 = 695.0;

/// Minimum ticks between player shots (120 ms at 20 Hz, rounded up).
pub const PLAYER_FIRE_COOLDOWN_TICKS: u32 = 3;

/// Player shot spawn offset from the plane's top-left corner.
pub const PLAYER_SHOT_OFFSET_X: f64 = 120.0;
pub const PLAYER_SHOT_OFFSET_Y: f64 = -20.0;

pub const PLAYER_SHOT_SPEED: f64 = 15.0;

/// Post-hit invincibility window (2000 ms).
pub const INVINCIBILITY_TICKS: u32 = 40;

/// Visibility toggles every blink interval while invincible (250 ms).
pub const BLINK_INTERVAL_TICKS: u32 = 5;

// --- Enemy planes ---

pub const ENEMY_HEALTH: i32 = 4;
pub const ENEMY_SPEED: f64 = -6.0;
pub const ENEMY_FIRE_RATE: f64 = 0.02;
pub const ENEMY_SHOT_SPEED: f64 = -10.0;

pub const ELITE_HEALTH: i32 = 8;
pub const ELITE_SPEED: f64 = -6.0;
pub const ELITE_FIRE_RATE: f64 = 0.03;
pub const ELITE_SHOT_SPEED: f64 = -15.0;

/// Enemy and elite shot spawn offset from the plane's top-left corner.
pub const ENEMY_SHOT_OFFSET_X: f64 = -100.0;
pub const ENEMY_SHOT_OFFSET_Y: f64 = 50.0;

// --- Boss ---

pub const BOSS_START_X: f64 = 1000.0;
pub const BOSS_START_Y: f64 = 400.0;
pub const BOSS_HEALTH: i32 = 100;

/// Magnitude of one vertical pattern step.
pub const BOSS_VERTICAL_SPEED: f64 = 8.0;

/// Each of {up, down, none} appears this many times in the move pattern.
pub const BOSS_MOVE_REPEATS: usize = 5;

/// Draws from the same pattern position before a reshuffle + cursor advance.
pub const BOSS_MAX_TICKS_SAME_MOVE: u32 = 10;

/// Vertical band the boss may occupy.
pub const BOSS_Y_UPPER_BOUND: f64 = -75.0;
pub const BOSS_Y_LOWER_BOUND: f64 = 475.0;

pub const BOSS_FIRE_RATE: f64 = 0.05;

/// Boss shots always originate at this X.
pub const BOSS_SHOT_X: f64 = 950.0;
pub const BOSS_SHOT_OFFSET_Y: f64 = 75.0;
pub const BOSS_SHOT_SPEED: f64 = -17.0;

/// Per-tick shield activation probability while unshielded.
pub const BOSS_SHIELD_PROBABILITY: f64 = 0.01;

/// Shield window: exact ticks of continuous activation before forced drop.
pub const BOSS_SHIELD_TICKS: u32 = 200;

// --- Collision boxes (hand-authored per sprite, width x height) ---

pub const PLAYER_SIZE: (f64, f64) = (100.0, 50.0);
pub const ENEMY_SIZE: (f64, f64) = (165.0, 150.0);
pub const ELITE_SIZE: (f64, f64) = (300.0, 275.0);
pub const BOSS_SIZE: (f64, f64) = (330.0, 300.0);
pub const PLAYER_SHOT_SIZE: (f64, f64) = (90.0, 65.0);
pub const ENEMY_SHOT_SIZE: (f64, f64) = (45.0, 30.0);
pub const ELITE_SHOT_SIZE: (f64, f64) = (50.0, 35.0);
pub const BOSS_SHOT_SIZE: (f64, f64) = (75.0, 75.0);

// --- Cleanup ---

/// Projectiles further than this beyond either screen edge are culled.
pub const PROJECTILE_CULL_MARGIN: f64 = 200.0;

// --- Level one ---

pub const LEVEL_ONE_PLAYER_HEALTH: i32 = 3;
pub const LEVEL_ONE_ENEMY_CAP: usize = 5;
pub const LEVEL_ONE_SPAWN_PROBABILITY: f64 = 0.20;
pub const LEVEL_ONE_KILL_TARGET: u32 = 25;

// --- Level two ---

pub const LEVEL_TWO_PLAYER_HEALTH: i32 = 4;
pub const LEVEL_TWO_ENEMY_CAP: usize = 5;
pub const LEVEL_TWO_SPAWN_PROBABILITY: f64 = 0.20;
/// Conditional on a spawn occurring, probability the unit is an elite.
pub const LEVEL_TWO_ELITE_PROBABILITY: f64 = 0.40;
pub const LEVEL_TWO_KILL_TARGET: u32 = 27;

// --- Level three ---

pub const LEVEL_THREE_PLAYER_HEALTH: i32 = 5;
