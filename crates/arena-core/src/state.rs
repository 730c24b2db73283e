//! Frame snapshot: the complete visible state handed to the frontend each frame.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, ProjectileOwner};
use crate::events::{HudEvent, SceneEvent};
use crate::types::{Position, SimTime, Velocity};

/// Complete state produced after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub enemies_left: u32,
    /// Current damage overlay opacity.
    pub damage_flash_opacity: f64,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    /// Scene changes since the previous snapshot.
    pub scene_events: Vec<SceneEvent>,
    /// HUD changes since the previous snapshot.
    pub hud_events: Vec<HudEvent>,
}

/// Camera rig and player status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    /// Eye position.
    pub position: Position,
    pub yaw: f64,
    pub pitch: f64,
    pub velocity: Velocity,
    pub health: u32,
    /// Whether pointer input is captured.
    pub locked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub handle: u32,
    pub position: Position,
    pub yaw: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub handle: u32,
    pub owner: ProjectileOwner,
    pub position: Position,
}
