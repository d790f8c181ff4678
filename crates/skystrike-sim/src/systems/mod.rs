//! ECS systems that run on the level world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components or
//! is threaded through by the engine.

pub mod boss;
pub mod cleanup;
pub mod collision;
pub mod damage;
pub mod fire;
pub mod movement;
pub mod penetration;
pub mod player;
pub mod score;
pub mod snapshot;
pub mod spawner;
