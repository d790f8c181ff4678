//! Core types and definitions for the SKYSTRIKE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, and constants.
//! It has no dependency on any runtime framework or rendering layer.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod progress;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
