//! Simulation engine for the arena shooter.
//!
//! Owns the hecs world and the player, runs systems once per rendered
//! frame, and produces `ArenaSnapshot`s for the frontend.

pub mod engine;
pub mod player;
pub mod systems;
pub mod world_setup;

pub use arena_core as core;
pub use engine::{SimConfig, SimulationEngine, SpawnLayout};
