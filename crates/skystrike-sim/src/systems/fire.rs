//! Enemy fire system: independent per-tick Bernoulli draws per hostile plane.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::HostileUnit;
use skystrike_core::constants::*;
use skystrike_core::enums::ActorKind;
use skystrike_core::types::Position;

use crate::world_setup;

/// Let every hostile plane roll its fire chance and emit projectiles.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, id_counter: &mut u32) {
    // Roll during an immutable pass, spawn afterwards.
    let mut shots: Vec<(ActorKind, DVec2, f64)> = Vec::new();

    for (_entity, (_hostile, kind, pos)) in world
        .query::<(&HostileUnit, &ActorKind, &Position)>()
        .iter()
    {
        match kind {
            ActorKind::Enemy => {
                if rng.gen_bool(ENEMY_FIRE_RATE) {
                    let origin = pos.0 + DVec2::new(ENEMY_SHOT_OFFSET_X, ENEMY_SHOT_OFFSET_Y);
                    shots.push((ActorKind::EnemyShot, origin, ENEMY_SHOT_SPEED));
                }
            }
            ActorKind::Elite => {
                if rng.gen_bool(ELITE_FIRE_RATE) {
                    let origin = pos.0 + DVec2::new(ENEMY_SHOT_OFFSET_X, ENEMY_SHOT_OFFSET_Y);
                    shots.push((ActorKind::EliteShot, origin, ELITE_SHOT_SPEED));
                }
            }
            ActorKind::Boss => {
                if rng.gen_bool(BOSS_FIRE_RATE) {
                    // Boss fireballs always launch from a fixed X lane.
                    let origin = DVec2::new(BOSS_SHOT_X, pos.0.y + BOSS_SHOT_OFFSET_Y);
                    shots.push((ActorKind::BossShot, origin, BOSS_SHOT_SPEED));
                }
            }
            _ => {}
        }
    }

    for (kind, origin, speed) in shots {
        world_setup::spawn_enemy_shot(world, id_counter, kind, origin, speed);
    }
}
