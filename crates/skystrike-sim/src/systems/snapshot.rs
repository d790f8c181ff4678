//! Snapshot system: queries the ECS world and builds a complete GameSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use skystrike_core::components::*;
use skystrike_core::enums::*;
use skystrike_core::events::GameEvent;
use skystrike_core::state::*;
use skystrike_core::types::{GameTime, Position};

use crate::level::LevelPolicy;

/// Build a complete GameSnapshot from the current world state.
pub fn build(
    world: &World,
    time: &GameTime,
    phase: GamePhase,
    policy: Option<&LevelPolicy>,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        phase,
        level: policy.map(|p| p.level),
        player: build_player(world, policy),
        boss: build_boss(world),
        actors: build_actors(world),
        events,
    }
}

/// Build the ActorView list, sorted by id for stable iteration order.
fn build_actors(world: &World) -> Vec<ActorView> {
    let mut actors: Vec<ActorView> = world
        .query::<(&ActorId, &ActorKind, &Position, &Sprite)>()
        .iter()
        .map(|(_, (id, kind, pos, sprite))| ActorView {
            id: id.0,
            kind: *kind,
            position: *pos,
            visible: sprite.visible,
        })
        .collect();

    actors.sort_by_key(|a| a.id);
    actors
}

/// Build the HUD view of the player, if a level is active.
fn build_player(world: &World, policy: Option<&LevelPolicy>) -> Option<PlayerView> {
    world
        .query::<(&PlayerState, &Health, &FriendlyUnit)>()
        .iter()
        .next()
        .map(|(_, (state, health, _))| {
            let target = policy.map(|p| p.kill_target()).unwrap_or(0);
            PlayerView {
                health: health.current,
                kills: state.kills,
                kills_remaining: target.saturating_sub(state.kills),
                invincible: state.invincible_ticks > 0,
            }
        })
}

/// Build the HUD view of the boss, if one is alive.
fn build_boss(world: &World) -> Option<BossView> {
    world
        .query::<(&BossState, &Health)>()
        .iter()
        .next()
        .map(|(_, (state, health))| BossView {
            health: health.current,
            shielded: state.shielded,
        })
}
