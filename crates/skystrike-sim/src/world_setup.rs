//! Entity spawn factories for setting up the level world.
//!
//! Creates the player plane, enemy planes, the boss, and projectiles
//! with appropriate component bundles.

use glam::DVec2;
use hecs::World;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::*;
use skystrike_core::constants::*;
use skystrike_core::enums::ActorKind;
use skystrike_core::types::{Position, Velocity};

fn next_id(counter: &mut u32) -> ActorId {
    let id = ActorId(*counter);
    *counter += 1;
    id
}

/// Spawn the player plane at the fixed start position.
pub fn spawn_player(world: &mut World, id_counter: &mut u32, health: i32) -> hecs::Entity {
    world.spawn((
        next_id(id_counter),
        ActorKind::Player,
        FriendlyUnit,
        Position::new(PLAYER_START_X, PLAYER_START_Y),
        Velocity::new(0.0, 0.0),
        Sprite::new(PLAYER_SIZE),
        Destructible::default(),
        Health::new(health),
        PlayerState::default(),
    ))
}

/// Spawn an enemy plane just off the right edge at a random height.
pub fn spawn_enemy(
    world: &mut World,
    id_counter: &mut u32,
    rng: &mut ChaCha8Rng,
    elite: bool,
) -> hecs::Entity {
    let y: f64 = rng.gen_range(0.0..ENEMY_MAX_SPAWN_Y);
    let (kind, health, speed) = if elite {
        (ActorKind::Elite, ELITE_HEALTH, ELITE_SPEED)
    } else {
        (ActorKind::Enemy, ENEMY_HEALTH, ENEMY_SPEED)
    };

    world.spawn((
        next_id(id_counter),
        kind,
        HostileUnit,
        Position::new(SCREEN_WIDTH, y),
        Velocity::new(speed, 0.0),
        Sprite::new(kind.size()),
        Destructible::default(),
        Health::new(health),
        Penetrator {
            origin_x: SCREEN_WIDTH,
        },
    ))
}

/// Spawn the boss with a freshly shuffled move pattern.
pub fn spawn_boss(world: &mut World, id_counter: &mut u32, rng: &mut ChaCha8Rng) -> hecs::Entity {
    world.spawn((
        next_id(id_counter),
        ActorKind::Boss,
        HostileUnit,
        Position::new(BOSS_START_X, BOSS_START_Y),
        Velocity::new(0.0, 0.0),
        Sprite::new(BOSS_SIZE),
        Destructible::default(),
        Health::new(BOSS_HEALTH),
        BossState {
            pattern: build_move_pattern(rng),
            cursor: 0,
            consecutive_uses: 0,
            shielded: false,
            shield_ticks: 0,
        },
    ))
}

/// 15 vertical steps, each of {+v, -v, 0} repeated five times, shuffled.
pub fn build_move_pattern(rng: &mut ChaCha8Rng) -> Vec<f64> {
    let mut pattern = Vec::with_capacity(BOSS_MOVE_REPEATS * 3);
    for _ in 0..BOSS_MOVE_REPEATS {
        pattern.push(BOSS_VERTICAL_SPEED);
        pattern.push(-BOSS_VERTICAL_SPEED);
        pattern.push(0.0);
    }
    pattern.shuffle(rng);
    pattern
}

/// Spawn a player shot ahead of the plane's nose.
pub fn spawn_player_shot(world: &mut World, id_counter: &mut u32, origin: DVec2) -> hecs::Entity {
    world.spawn((
        next_id(id_counter),
        ActorKind::PlayerShot,
        PlayerProjectile,
        Position(origin + DVec2::new(PLAYER_SHOT_OFFSET_X, PLAYER_SHOT_OFFSET_Y)),
        Velocity::new(PLAYER_SHOT_SPEED, 0.0),
        Sprite::new(PLAYER_SHOT_SIZE),
        Destructible::default(),
    ))
}

/// Spawn a hostile projectile of the given kind at an absolute position.
pub fn spawn_enemy_shot(
    world: &mut World,
    id_counter: &mut u32,
    kind: ActorKind,
    position: DVec2,
    speed: f64,
) -> hecs::Entity {
    world.spawn((
        next_id(id_counter),
        kind,
        EnemyProjectile,
        Position(position),
        Velocity::new(speed, 0.0),
        Sprite::new(kind.size()),
        Destructible::default(),
    ))
}
