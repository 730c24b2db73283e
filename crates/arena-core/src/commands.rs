//! Player commands delivered by the input layer.
//!
//! Commands are queued and applied at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::enums::MoveKey;

/// All possible player inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement intent ---
    /// A movement key went down.
    KeyDown { key: MoveKey },
    /// A movement key was released.
    KeyUp { key: MoveKey },

    // --- Camera ---
    /// Absolute camera orientation (radians). Ignored while the pointer is free.
    Look { yaw: f64, pitch: f64 },
    /// Capture the pointer (click on the instruction overlay).
    Lock,
    /// Release the pointer (escape).
    Unlock,

    // --- Combat ---
    /// Fire a projectile along the look direction.
    Shoot,
}
