//! Enemy spawning system — fills the level's roster according to its policy.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::HostileUnit;

use crate::level::Population;
use crate::world_setup;

/// Run the level's spawn policy for this tick.
///
/// Wave levels roll one spawn attempt per open slot below the cap.
/// The boss level spawns its boss exactly once.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    id_counter: &mut u32,
    population: &Population,
    boss: &mut Option<Entity>,
) {
    match population {
        Population::Waves {
            cap,
            spawn_probability,
            elite_probability,
        } => {
            let current = world.query_mut::<&HostileUnit>().into_iter().count();
            let open_slots = cap.saturating_sub(current);
            for _ in 0..open_slots {
                if rng.gen_bool(*spawn_probability) {
                    let elite = *elite_probability > 0.0 && rng.gen_bool(*elite_probability);
                    world_setup::spawn_enemy(world, id_counter, rng, elite);
                }
            }
        }
        Population::Boss => {
            if boss.is_none() {
                *boss = Some(world_setup::spawn_boss(world, id_counter, rng));
            }
        }
    }
}
