//! Player state: the camera rig plus health and input bookkeeping.
//!
//! Stored on `SimulationEngine`, NOT as an ECS entity.

use glam::DVec3;

use arena_core::enums::MoveKey;
use arena_core::state::PlayerView;
use arena_core::types::{Position, Velocity};

/// Held movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl Intent {
    pub fn set(&mut self, key: MoveKey, held: bool) {
        match key {
            MoveKey::Forward => self.forward = held,
            MoveKey::Backward => self.backward = held,
            MoveKey::Left => self.left = held,
            MoveKey::Right => self.right = held,
        }
    }

    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// The player: first-person camera rig, movement state and health.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Eye position.
    pub position: Position,
    /// Rotation about the up axis (radians). 0 looks down -Z.
    pub yaw: f64,
    /// Elevation of the look direction (radians), within ±π/2.
    pub pitch: f64,
    /// Camera-local velocity: x = strafe, z = forward/back.
    pub velocity: Velocity,
    pub intent: Intent,
    pub health: u32,
    /// Whether pointer input is captured.
    pub locked: bool,
    /// Timestamp of the last accepted hit (ms).
    pub last_damage_ms: Option<f64>,
    /// The damage flash hides at this timestamp (ms).
    pub flash_until_ms: Option<f64>,
}

impl PlayerState {
    pub fn new(position: Position, health: u32) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            velocity: Velocity::default(),
            intent: Intent::default(),
            health,
            locked: false,
            last_damage_ms: None,
            flash_until_ms: None,
        }
    }

    /// Set the look orientation, clamping pitch to straight up/down.
    pub fn set_look(&mut self, yaw: f64, pitch: f64) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2);
    }

    /// Unit vector the camera looks along.
    pub fn look_direction(&self) -> DVec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        DVec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    /// Horizontal forward vector (look direction with pitch removed).
    pub fn forward_vector(&self) -> DVec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        DVec3::new(-sin_yaw, 0.0, -cos_yaw)
    }

    /// Horizontal right vector.
    pub fn right_vector(&self) -> DVec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        DVec3::new(cos_yaw, 0.0, -sin_yaw)
    }

    /// Move along the horizontal forward vector. Height is unchanged.
    pub fn move_forward(&mut self, distance: f64) {
        self.position.0 += self.forward_vector() * distance;
    }

    /// Strafe along the horizontal right vector. Height is unchanged.
    pub fn move_right(&mut self, distance: f64) {
        self.position.0 += self.right_vector() * distance;
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            position: self.position,
            yaw: self.yaw,
            pitch: self.pitch,
            velocity: self.velocity,
            health: self.health,
            locked: self.locked,
        }
    }
}
