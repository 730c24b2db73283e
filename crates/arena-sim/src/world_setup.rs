//! Entity spawn factories.
//!
//! Creates enemy and projectile entities with their component bundles and
//! announces them to the renderer through scene events.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_core::components::{Enemy, Facing, Projectile, RenderHandle};
use arena_core::config::Tuning;
use arena_core::enums::{ProjectileOwner, RenderKind};
use arena_core::events::SceneEvent;
use arena_core::types::{Position, Velocity};

/// Counters for identifiers handed out to new entities.
#[derive(Debug, Clone, Default)]
pub struct EntityIds {
    next_render_handle: u32,
    next_spawn_order: u32,
    next_projectile_seq: u64,
}

impl EntityIds {
    fn render_handle(&mut self) -> RenderHandle {
        let handle = RenderHandle(self.next_render_handle);
        self.next_render_handle += 1;
        handle
    }

    fn spawn_order(&mut self) -> u32 {
        let order = self.next_spawn_order;
        self.next_spawn_order += 1;
        order
    }

    fn projectile_seq(&mut self) -> u64 {
        let seq = self.next_projectile_seq;
        self.next_projectile_seq += 1;
        seq
    }
}

/// Spawn the round's enemies at random positions in the spawn rectangle.
/// No overlap check: enemies may spawn on top of each other.
pub fn spawn_enemy_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ids: &mut EntityIds,
    tuning: &Tuning,
    now_ms: f64,
    scene_events: &mut Vec<SceneEvent>,
) {
    for _ in 0..tuning.enemy_count {
        let position = random_enemy_position(rng, tuning);
        spawn_enemy(world, ids, position, now_ms, scene_events);
    }
}

/// Pick a spawn point: x in [-w, w), z in [center - w, center + w), on the spawn height.
/// A zero or non-finite width collapses the box onto its centre.
pub fn random_enemy_position(rng: &mut ChaCha8Rng, tuning: &Tuning) -> Position {
    let half = tuning.spawn_half_width;
    let (x, z_offset) = if half.is_finite() && half > 0.0 {
        (rng.gen_range(-half..half), rng.gen_range(-half..half))
    } else {
        (0.0, 0.0)
    };
    Position::new(x, tuning.enemy_spawn_height, tuning.spawn_center_z + z_offset)
}

/// Spawn one enemy. Its shot cooldown starts at `now_ms`.
pub fn spawn_enemy(
    world: &mut World,
    ids: &mut EntityIds,
    position: Position,
    now_ms: f64,
    scene_events: &mut Vec<SceneEvent>,
) -> Entity {
    let handle = ids.render_handle();
    scene_events.push(SceneEvent::Spawned {
        handle: handle.0,
        kind: RenderKind::EnemyCapsule,
        position,
    });

    world.spawn((
        Enemy {
            spawn_order: ids.spawn_order(),
            last_shot_ms: now_ms,
        },
        position,
        Facing::default(),
        handle,
    ))
}

/// Spawn a projectile travelling along `direction` (any length) at the owner's speed.
pub fn spawn_projectile(
    world: &mut World,
    ids: &mut EntityIds,
    tuning: &Tuning,
    origin: Position,
    direction: DVec3,
    owner: ProjectileOwner,
    now_ms: f64,
    scene_events: &mut Vec<SceneEvent>,
) -> Entity {
    let handle = ids.render_handle();
    scene_events.push(SceneEvent::Spawned {
        handle: handle.0,
        kind: owner.into(),
        position: origin,
    });

    world.spawn((
        Projectile {
            owner,
            created_ms: now_ms,
            seq: ids.projectile_seq(),
        },
        origin,
        Velocity::along(direction, tuning.projectile_speed(owner)),
        handle,
    ))
}

/// Remove an entity and tell the renderer to drop its visual.
pub fn despawn(world: &mut World, entity: Entity, scene_events: &mut Vec<SceneEvent>) {
    let handle = world.get::<&RenderHandle>(entity).map(|h| h.0).ok();
    if world.despawn(entity).is_ok() {
        if let Some(handle) = handle {
            scene_events.push(SceneEvent::Despawned { handle });
        }
    }
}
