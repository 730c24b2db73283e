//! Enemy AI system: runs the enemy brain for each live enemy.
//!
//! Calls `arena_enemy_ai::brain::evaluate` per enemy, writes facing and
//! position back, and spawns the requested shots.

use glam::DVec3;
use hecs::World;
use log::debug;

use arena_core::components::{Enemy, Facing};
use arena_core::config::Tuning;
use arena_core::enums::ProjectileOwner;
use arena_core::events::SceneEvent;
use arena_core::types::{Position, SimTime};

use arena_enemy_ai::brain::{evaluate, EnemyContext};

use crate::world_setup::{self, EntityIds};

/// Run the enemy AI: face, approach and fire at the player.
pub fn run(
    world: &mut World,
    player_position: Position,
    time: &SimTime,
    tuning: &Tuning,
    ids: &mut EntityIds,
    scene_events: &mut Vec<SceneEvent>,
) {
    // Shots are buffered; hecs cannot spawn while the query borrows the world.
    let mut shots: Vec<(u32, Position, DVec3, f64)> = Vec::new();

    for (_entity, (enemy, position, facing)) in
        world.query_mut::<(&mut Enemy, &mut Position, &mut Facing)>()
    {
        let ctx = EnemyContext {
            position: *position,
            target: player_position,
            last_shot_ms: enemy.last_shot_ms,
            now_ms: time.now_ms,
            dt_secs: time.dt_secs,
        };

        let update = evaluate(&ctx, tuning);
        facing.yaw = update.yaw;
        *position = update.position;

        if let Some(aim) = update.fire {
            enemy.last_shot_ms = time.now_ms;
            shots.push((enemy.spawn_order, update.position, aim, update.distance));
        }
    }

    shots.sort_by_key(|&(order, ..)| order);
    for (order, origin, aim, distance) in shots {
        debug!(
            "enemy {order} fires from {distance:.1} units at t={:.0}ms",
            time.now_ms
        );
        world_setup::spawn_projectile(
            world,
            ids,
            tuning,
            origin,
            aim,
            ProjectileOwner::Enemy,
            time.now_ms,
            scene_events,
        );
    }
}
