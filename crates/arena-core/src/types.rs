//! Fundamental geometric and simulation types.
//!
//! World axes follow the renderer: x = right, y = up, z = toward the viewer.
//! The floor is the y = 0 plane.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// World-space position (units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// World-space velocity (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

/// Frame timing. Timestamps are monotonic milliseconds supplied by the driver.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames advanced so far.
    pub frame: u64,
    /// Timestamp of the current frame (ms).
    pub now_ms: f64,
    /// Seconds elapsed since the previous frame.
    pub dt_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Full 3D distance.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }

    /// Distance on the floor plane, ignoring height.
    pub fn planar_distance_to(&self, other: &Position) -> f64 {
        planar(other.0 - self.0).length()
    }

    /// Yaw that turns an object's +Z axis toward `other` on the floor plane.
    pub fn yaw_to(&self, other: &Position) -> f64 {
        let d = other.0 - self.0;
        d.x.atan2(d.z)
    }
}

impl Velocity {
    /// Velocity of magnitude `speed` along `direction`. A zero direction gives zero velocity.
    pub fn along(direction: DVec3, speed: f64) -> Self {
        Self(direction.normalize_or_zero() * speed)
    }

    pub fn speed(&self) -> f64 {
        self.0.length()
    }
}

impl SimTime {
    /// Start the clock at `start_ms` with no elapsed frames.
    pub fn starting_at(start_ms: f64) -> Self {
        Self {
            frame: 0,
            now_ms: start_ms,
            dt_secs: 0.0,
        }
    }

    /// Advance to the frame stamped `now_ms`. A timestamp earlier than the
    /// current one yields a zero-length frame.
    pub fn advance_to(&mut self, now_ms: f64) {
        self.dt_secs = ((now_ms - self.now_ms) / 1000.0).max(0.0);
        self.now_ms = self.now_ms.max(now_ms);
        self.frame += 1;
    }

    /// Milliseconds elapsed since `since_ms`.
    pub fn since(&self, since_ms: f64) -> f64 {
        self.now_ms - since_ms
    }
}

/// Project a vector onto the floor plane.
pub fn planar(v: DVec3) -> DVec3 {
    DVec3::new(v.x, 0.0, v.z)
}
