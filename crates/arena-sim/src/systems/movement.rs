//! Player movement integration.
//!
//! Damps the rig velocity, accelerates it from held keys and moves the
//! camera rig: position += -velocity * dt along the rig's right/forward axes.

use glam::DVec3;

use arena_core::config::Tuning;

use crate::player::{Intent, PlayerState};

/// Integrate one frame of player movement.
pub fn run(player: &mut PlayerState, tuning: &Tuning, dt: f64) {
    let damping = damping_factor(tuning.velocity_damping, dt);
    let direction = intent_direction(&player.intent);
    let intent = player.intent;

    let v = &mut player.velocity.0;
    v.x -= v.x * damping;
    v.z -= v.z * damping;

    if intent.forward || intent.backward {
        v.z -= direction.z * tuning.move_acceleration * dt;
    }
    if intent.left || intent.right {
        v.x -= direction.x * tuning.move_acceleration * dt;
    }

    let (vx, vz) = (v.x, v.z);
    player.move_right(-vx * dt);
    player.move_forward(-vz * dt);
}

/// Fraction of velocity removed this frame. Capped at 1 so a long frame
/// stops the rig instead of reversing it.
pub fn damping_factor(coefficient: f64, dt: f64) -> f64 {
    (coefficient * dt.max(0.0)).min(1.0)
}

/// Unit direction of the held keys: z = forward - backward, x = right - left.
/// No keys (or opposing keys) give the zero vector.
pub fn intent_direction(intent: &Intent) -> DVec3 {
    if !intent.any() {
        return DVec3::ZERO;
    }
    let z = f64::from(u8::from(intent.forward)) - f64::from(u8::from(intent.backward));
    let x = f64::from(u8::from(intent.right)) - f64::from(u8::from(intent.left));
    DVec3::new(x, 0.0, z).normalize_or_zero()
}
