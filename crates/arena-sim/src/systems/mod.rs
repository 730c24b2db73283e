//! Systems that advance the simulation each frame.
//!
//! Systems are free functions over the hecs world and the engine's plain
//! state. They do not own state.

pub mod enemy_ai;
pub mod movement;
pub mod projectiles;
pub mod snapshot;
