//! Simulation engine for SKYSTRIKE.
//!
//! Owns the hecs ECS world, runs the update sequence at a fixed tick rate,
//! and produces GameSnapshots for the frontend.

pub mod engine;
pub mod level;
pub mod systems;
pub mod world_setup;

pub use engine::LevelEngine;
pub use skystrike_core as core;
