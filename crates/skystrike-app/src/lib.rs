//! SKYSTRIKE hosting shell.
//!
//! Wires the simulation engine to a fixed-rate game loop thread and
//! owns campaign-progress persistence. Rendering frontends consume the
//! snapshot stream; this crate stays framework-agnostic.

pub mod game_loop;
pub mod shell;
pub mod state;

pub use skystrike_core as core;
