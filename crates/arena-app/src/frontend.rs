//! Boundary to the renderer and the HUD.
//!
//! The engine never talks to a renderer directly: each frame's snapshot is
//! routed through `dispatch`, which replays scene events as add/remove
//! calls, forwards HUD events, then asks for the frame to be drawn.

use std::collections::HashMap;

use log::{debug, info};

use arena_core::enums::RenderKind;
use arena_core::events::{HudEvent, SceneEvent};
use arena_core::state::ArenaSnapshot;
use arena_core::types::Position;

/// Scene and HUD collaborator.
pub trait Frontend {
    /// Add a renderable for a new entity.
    fn add(&mut self, handle: u32, kind: RenderKind, position: Position);
    /// Remove the renderable of a destroyed entity.
    fn remove(&mut self, handle: u32);
    /// Apply a HUD update.
    fn hud(&mut self, event: &HudEvent);
    /// Draw the frame. Live entity positions are in the snapshot views.
    fn render(&mut self, snapshot: &ArenaSnapshot);
    /// Drop every renderable (a new round is about to start).
    fn clear(&mut self) {}
}

/// Route one snapshot to the frontend: scene changes, HUD changes, then render.
pub fn dispatch(frontend: &mut dyn Frontend, snapshot: &ArenaSnapshot) {
    for event in &snapshot.scene_events {
        match event {
            SceneEvent::Spawned {
                handle,
                kind,
                position,
            } => frontend.add(*handle, *kind, *position),
            SceneEvent::Despawned { handle } => frontend.remove(*handle),
        }
    }
    for event in &snapshot.hud_events {
        frontend.hud(event);
    }
    frontend.render(snapshot);
}

/// Headless frontend that keeps the scene as a handle map and logs the HUD.
#[derive(Debug, Default)]
pub struct LogFrontend {
    scene: HashMap<u32, RenderKind>,
    frames: u64,
}

impl LogFrontend {
    /// Number of live renderables.
    pub fn live(&self) -> usize {
        self.scene.len()
    }

    /// Number of live renderables of one kind.
    pub fn live_of(&self, kind: RenderKind) -> usize {
        self.scene.values().filter(|k| **k == kind).count()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Frontend for LogFrontend {
    fn add(&mut self, handle: u32, kind: RenderKind, position: Position) {
        let (radius, length) = kind.extent();
        debug!("add {kind:?} #{handle} r={radius} len={length} at {:?}", position.0);
        self.scene.insert(handle, kind);
    }

    fn remove(&mut self, handle: u32) {
        self.scene.remove(&handle);
    }

    fn hud(&mut self, event: &HudEvent) {
        match event {
            HudEvent::HealthChanged { health } => info!("Health: {health}"),
            HudEvent::EnemyCountChanged { remaining } => info!("Enemies Left: {remaining}"),
            HudEvent::RoundOver { banner, .. } => info!("{banner}"),
            other => debug!("{other:?}"),
        }
    }

    fn render(&mut self, _snapshot: &ArenaSnapshot) {
        self.frames += 1;
    }

    fn clear(&mut self) {
        self.scene.clear();
    }
}
