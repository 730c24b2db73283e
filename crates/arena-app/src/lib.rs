//! Arena application layer.
//!
//! Drives the simulation engine from a frame-loop thread, turns raw input
//! into player commands, and hands each frame to a `Frontend` that owns the
//! scene and the HUD.

pub mod control;
pub mod frontend;
pub mod game_loop;
pub mod input;
pub mod state;

pub use arena_core as core;
