//! Snapshot system: builds an `ArenaSnapshot` from the world.
//!
//! Read-only over the world; consumes the frame's event buffers.

use hecs::World;

use arena_core::components::{Enemy, Facing, Projectile, RenderHandle};
use arena_core::constants::DAMAGE_FLASH_OPACITY;
use arena_core::enums::GamePhase;
use arena_core::events::{HudEvent, SceneEvent};
use arena_core::state::{ArenaSnapshot, EnemyView, ProjectileView};
use arena_core::types::{Position, SimTime};

use crate::player::PlayerState;

/// Build a complete snapshot. Enemies are listed in insertion order and
/// projectiles in creation order.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    player: &PlayerState,
    scene_events: Vec<SceneEvent>,
    hud_events: Vec<HudEvent>,
) -> ArenaSnapshot {
    let mut enemies: Vec<(u32, EnemyView)> = world
        .query::<(&Enemy, &Position, &Facing, &RenderHandle)>()
        .iter()
        .map(|(_entity, (enemy, pos, facing, handle))| {
            (
                enemy.spawn_order,
                EnemyView {
                    handle: handle.0,
                    position: *pos,
                    yaw: facing.yaw,
                },
            )
        })
        .collect();
    enemies.sort_by_key(|(order, _)| *order);

    let mut projectiles: Vec<(u64, ProjectileView)> = world
        .query::<(&Projectile, &Position, &RenderHandle)>()
        .iter()
        .map(|(_entity, (projectile, pos, handle))| {
            (
                projectile.seq,
                ProjectileView {
                    handle: handle.0,
                    owner: projectile.owner,
                    position: *pos,
                },
            )
        })
        .collect();
    projectiles.sort_by_key(|(seq, _)| *seq);

    let damage_flash_opacity = if player.flash_until_ms.is_some() {
        DAMAGE_FLASH_OPACITY
    } else {
        0.0
    };

    ArenaSnapshot {
        time: *time,
        phase,
        player: player.view(),
        enemies_left: enemies.len() as u32,
        damage_flash_opacity,
        enemies: enemies.into_iter().map(|(_, view)| view).collect(),
        projectiles: projectiles.into_iter().map(|(_, view)| view).collect(),
        scene_events,
        hud_events,
    }
}
