//! Events emitted by the simulation for the renderer and the HUD.

use serde::{Deserialize, Serialize};

use crate::enums::RenderKind;
use crate::types::Position;

/// Scene graph changes. Positions of live entities travel in the snapshot views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// Add a renderable for a new entity.
    Spawned {
        handle: u32,
        kind: RenderKind,
        position: Position,
    },
    /// Remove the renderable of a destroyed entity.
    Despawned { handle: u32 },
}

/// HUD updates. The core pushes values; it never reads the UI back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HudEvent {
    HealthChanged { health: u32 },
    EnemyCountChanged { remaining: u32 },
    /// Damage overlay opacity (0 hides it).
    DamageFlash { opacity: f64 },
    /// Show or hide the "click to play" overlay.
    InstructionsVisible { visible: bool },
    /// Pointer capture was released by the simulation.
    PointerReleased,
    /// The round ended.
    RoundOver { victory: bool, banner: String },
}
