//! Enemy decision function.
//!
//! Pure function over plain data; the sim applies the result to the ECS.
//! No ECS dependency.

use glam::DVec3;

use arena_core::config::Tuning;
use arena_core::types::{planar, Position};

/// Input to the enemy brain for a single entity.
pub struct EnemyContext {
    pub position: Position,
    /// Player eye position.
    pub target: Position,
    pub last_shot_ms: f64,
    pub now_ms: f64,
    pub dt_secs: f64,
}

/// Output from the enemy brain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyUpdate {
    /// Yaw facing the target on the floor plane.
    pub yaw: f64,
    /// Position after this frame's approach step.
    pub position: Position,
    /// Planar distance to the target measured before stepping.
    pub distance: f64,
    /// Raw aim direction from the new position to the target, when firing.
    pub fire: Option<DVec3>,
}

/// Evaluate one enemy for one frame.
pub fn evaluate(ctx: &EnemyContext, tuning: &Tuning) -> EnemyUpdate {
    let yaw = ctx.position.yaw_to(&ctx.target);
    let distance = ctx.position.planar_distance_to(&ctx.target);

    let mut position = ctx.position;
    if distance > tuning.enemy_approach_distance {
        let heading = planar(ctx.target.0 - ctx.position.0).normalize_or_zero();
        position.0 += heading * tuning.enemy_speed * ctx.dt_secs;
    }

    let cooled_down = ctx.now_ms - ctx.last_shot_ms > tuning.enemy_fire_interval_ms;
    let fire = (cooled_down && distance < tuning.enemy_fire_range)
        .then(|| ctx.target.0 - position.0);

    EnemyUpdate {
        yaw,
        position,
        distance,
        fire,
    }
}
