//! Enemy AI for the arena.
//!
//! Decides, per enemy and per frame, where the enemy faces, where it
//! steps and whether it fires.

pub mod brain;

pub use arena_core as core;

#[cfg(test)]
mod tests;
