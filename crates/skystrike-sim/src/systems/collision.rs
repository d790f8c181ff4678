//! Pairwise AABB collision passes between the actor collections.
//!
//! Every member of one collection is tested against every member of the
//! other; both participants of an intersecting pair receive one damage
//! event. Actors flagged destroyed earlier in the tick still participate —
//! purge only happens after all passes complete.

use hecs::{Component, Entity, World};

use skystrike_core::components::{
    EnemyProjectile, FriendlyUnit, HostileUnit, PlayerProjectile, PlayerState,
};
use skystrike_core::enums::ActorKind;
use skystrike_core::events::GameEvent;
use skystrike_core::types::{Aabb, Position};

use super::damage;

/// Player projectiles against hostile planes.
pub fn projectiles_vs_enemies(world: &mut World, events: &mut Vec<GameEvent>) {
    let shots = gather::<PlayerProjectile>(world);
    let enemies = gather::<HostileUnit>(world);
    resolve(world, &shots, &enemies, events);
}

/// Enemy projectiles against friendly planes.
pub fn projectiles_vs_friendlies(world: &mut World, events: &mut Vec<GameEvent>) {
    let shots = gather::<EnemyProjectile>(world);
    let friendlies = gather_friendlies(world);
    resolve(world, &shots, &friendlies, events);
}

/// Friendly planes against hostile planes (ramming).
pub fn planes_vs_planes(world: &mut World, events: &mut Vec<GameEvent>) {
    let friendlies = gather_friendlies(world);
    let enemies = gather::<HostileUnit>(world);
    resolve(world, &friendlies, &enemies, events);
}

/// Collect (entity, box) pairs for every member of a marker collection.
fn gather<M: Component>(world: &World) -> Vec<(Entity, Aabb)> {
    world
        .query::<(&M, &ActorKind, &Position)>()
        .iter()
        .map(|(entity, (_marker, kind, pos))| {
            let (w, h) = kind.size();
            (entity, Aabb::from_top_left(pos.0, w, h))
        })
        .collect()
}

/// Friendly units, with the player excluded while its invincibility
/// window suppresses collision checks.
fn gather_friendlies(world: &World) -> Vec<(Entity, Aabb)> {
    world
        .query::<(&FriendlyUnit, &ActorKind, &Position, &PlayerState)>()
        .iter()
        .filter(|(_, (_, _, _, state))| state.invincible_ticks == 0)
        .map(|(entity, (_marker, kind, pos, _state))| {
            let (w, h) = kind.size();
            (entity, Aabb::from_top_left(pos.0, w, h))
        })
        .collect()
}

/// O(|A|*|B|) pass: damage both sides of every intersecting pair.
fn resolve(
    world: &mut World,
    side_a: &[(Entity, Aabb)],
    side_b: &[(Entity, Aabb)],
    events: &mut Vec<GameEvent>,
) {
    for (a, box_a) in side_a {
        for (b, box_b) in side_b {
            if box_a.intersects(box_b) {
                damage::apply(world, *a, events);
                damage::apply(world, *b, events);
            }
        }
    }
}
