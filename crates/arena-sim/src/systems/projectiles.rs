//! Projectile integration and hit resolution.
//!
//! `integrate` advances every projectile. `resolve` then visits projectiles
//! newest first and marks hits and expired projectiles in the despawn
//! buffer; the engine removes them after the pass, so no collection is
//! mutated while it is being scanned.

use hecs::{Entity, World};
use log::{debug, trace};

use arena_core::components::{Enemy, Projectile};
use arena_core::config::Tuning;
use arena_core::constants::DAMAGE_FLASH_OPACITY;
use arena_core::enums::{GamePhase, ProjectileOwner};
use arena_core::events::HudEvent;
use arena_core::types::{Position, SimTime, Velocity};

use crate::player::PlayerState;

/// Result of an enemy projectile reaching the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitResult {
    /// Landed inside the damage cooldown; no effect.
    Absorbed,
    Damaged,
    Killed,
}

/// Advance every projectile by its velocity.
pub fn integrate(world: &mut World, dt: f64) {
    for (_entity, (pos, vel, _projectile)) in
        world.query_mut::<(&mut Position, &Velocity, &Projectile)>()
    {
        pos.0 += vel.0 * dt;
    }
}

/// Resolve hits and expiry for this frame. Returns the terminal phase if the
/// round ended; the remaining projectiles are left untouched in that case.
pub fn resolve(
    world: &World,
    player: &mut PlayerState,
    time: &SimTime,
    tuning: &Tuning,
    hud_events: &mut Vec<HudEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> Option<GamePhase> {
    let mut projectiles: Vec<(Entity, Projectile, Position)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(entity, (projectile, pos))| (entity, *projectile, *pos))
        .collect();
    projectiles.sort_by(|a, b| b.1.seq.cmp(&a.1.seq));

    // Live enemies in insertion order; a kill removes the entry so later
    // projectiles in the same pass cannot hit it again.
    let mut enemies: Vec<(Entity, u32, Position)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (enemy, pos))| (entity, enemy.spawn_order, *pos))
        .collect();
    enemies.sort_by_key(|&(_, order, _)| order);

    for (entity, projectile, pos) in projectiles {
        match projectile.owner {
            ProjectileOwner::Enemy => {
                if pos.distance_to(&player.position) < tuning.player_hit_radius {
                    despawn_buffer.push(entity);
                    if damage_player(player, time.now_ms, tuning, hud_events) == HitResult::Killed
                    {
                        return Some(GamePhase::Defeat);
                    }
                    continue;
                }
            }
            ProjectileOwner::Player => {
                let hit = enemies
                    .iter()
                    .position(|(_, _, enemy_pos)| pos.distance_to(enemy_pos) < tuning.enemy_hit_radius);
                if let Some(index) = hit {
                    let (enemy_entity, order, _) = enemies.remove(index);
                    despawn_buffer.push(enemy_entity);
                    despawn_buffer.push(entity);
                    debug!("enemy {order} destroyed, {} left", enemies.len());
                    hud_events.push(HudEvent::EnemyCountChanged {
                        remaining: enemies.len() as u32,
                    });
                    if enemies.is_empty() {
                        return Some(GamePhase::Victory);
                    }
                    continue;
                }
            }
        }

        if time.since(projectile.created_ms) > tuning.projectile_lifetime_ms {
            trace!("projectile {} expired", projectile.seq);
            despawn_buffer.push(entity);
        }
    }

    None
}

/// Apply one enemy hit to the player, honouring the damage cooldown.
pub fn damage_player(
    player: &mut PlayerState,
    now_ms: f64,
    tuning: &Tuning,
    hud_events: &mut Vec<HudEvent>,
) -> HitResult {
    if let Some(last) = player.last_damage_ms {
        if now_ms - last < tuning.damage_cooldown_ms {
            trace!("hit absorbed by damage cooldown");
            return HitResult::Absorbed;
        }
    }

    player.flash_until_ms = Some(now_ms + tuning.damage_flash_ms);
    hud_events.push(HudEvent::DamageFlash {
        opacity: DAMAGE_FLASH_OPACITY,
    });

    player.health = player.health.saturating_sub(tuning.damage_per_hit);
    player.last_damage_ms = Some(now_ms);
    hud_events.push(HudEvent::HealthChanged {
        health: player.health,
    });
    debug!("player hit, health {}", player.health);

    if player.health == 0 {
        HitResult::Killed
    } else {
        HitResult::Damaged
    }
}
