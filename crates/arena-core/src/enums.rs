//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFEAT_BANNER, ENEMY_CAPSULE_LENGTH, ENEMY_CAPSULE_RADIUS, PROJECTILE_RADIUS, VICTORY_BANNER,
};

/// Round state. Victory and Defeat are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    Victory,
    Defeat,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }

    /// Banner text shown on entering a terminal phase.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            GamePhase::Playing => None,
            GamePhase::Victory => Some(VICTORY_BANNER),
            GamePhase::Defeat => Some(DEFEAT_BANNER),
        }
    }
}

/// Who fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

/// Held movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKey {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveKey {
    /// Map a keyboard code (`KeyboardEvent.code` naming) to a movement key.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" | "ArrowUp" => Some(MoveKey::Forward),
            "KeyS" | "ArrowDown" => Some(MoveKey::Backward),
            "KeyA" | "ArrowLeft" => Some(MoveKey::Left),
            "KeyD" | "ArrowRight" => Some(MoveKey::Right),
            _ => None,
        }
    }
}

/// What the renderer should draw for a spawned entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderKind {
    /// Red capsule.
    EnemyCapsule,
    /// Cyan sphere.
    PlayerBolt,
    /// Yellow sphere.
    EnemyBolt,
}

impl RenderKind {
    /// Mesh extent as `(radius, straight length)`. Bolts are spheres.
    pub fn extent(self) -> (f64, f64) {
        match self {
            RenderKind::EnemyCapsule => (ENEMY_CAPSULE_RADIUS, ENEMY_CAPSULE_LENGTH),
            RenderKind::PlayerBolt | RenderKind::EnemyBolt => (PROJECTILE_RADIUS, 0.0),
        }
    }
}

impl From<ProjectileOwner> for RenderKind {
    fn from(owner: ProjectileOwner) -> Self {
        match owner {
            ProjectileOwner::Player => RenderKind::PlayerBolt,
            ProjectileOwner::Enemy => RenderKind::EnemyBolt,
        }
    }
}
