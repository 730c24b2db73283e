//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::ProjectileOwner;

/// Marks an entity as an enemy and carries its AI bookkeeping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Insertion order; hit scans resolve ties by the lowest value.
    pub spawn_order: u32,
    /// Timestamp of the last shot fired (ms).
    pub last_shot_ms: f64,
}

/// Horizontal facing of an entity (radians about the up axis; 0 looks down +Z).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Facing {
    pub yaw: f64,
}

/// Projectile record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: ProjectileOwner,
    /// Creation timestamp (ms).
    pub created_ms: f64,
    /// Monotonic creation sequence; the collision pass visits newest first.
    pub seq: u64,
}

/// Handle the renderer uses to refer to an entity's visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderHandle(pub u32);
