//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs world, the player and the round phase,
//! applies queued player commands, runs all systems and produces
//! `ArenaSnapshot`s. Completely headless; the driver supplies frame
//! timestamps, which keeps runs deterministic under test.

use std::collections::VecDeque;

use glam::DVec3;
use hecs::World;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use arena_core::commands::PlayerCommand;
use arena_core::components::Enemy;
use arena_core::config::{ArenaConfig, Tuning};
use arena_core::constants::PLAYER_MAX_HEALTH;
use arena_core::enums::{GamePhase, ProjectileOwner};
use arena_core::events::{HudEvent, SceneEvent};
use arena_core::state::ArenaSnapshot;
use arena_core::types::{Position, SimTime};

use crate::player::PlayerState;
use crate::systems;
use crate::world_setup::{self, EntityIds};

/// Where the round's enemies start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum SpawnLayout {
    /// `enemy_count` enemies at random points of the spawn rectangle.
    #[default]
    Random,
    /// Exactly these positions, in this insertion order.
    Fixed(Vec<Position>),
}

/// Configuration for starting a new round.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    pub arena: ArenaConfig,
    /// Timestamp of round start (ms). The first frame's Δt is measured from here.
    pub start_ms: f64,
    pub layout: SpawnLayout,
}

impl From<ArenaConfig> for SimConfig {
    fn from(arena: ArenaConfig) -> Self {
        Self {
            arena,
            ..Default::default()
        }
    }
}

/// The simulation engine. Owns the ECS world and all round state.
pub struct SimulationEngine {
    world: World,
    tuning: Tuning,
    time: SimTime,
    phase: GamePhase,
    player: PlayerState,
    ids: EntityIds,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    scene_events: Vec<SceneEvent>,
    hud_events: Vec<HudEvent>,
}

impl SimulationEngine {
    /// Create a new round: place the player and spawn the enemies.
    pub fn new(config: SimConfig) -> Self {
        let tuning = config.arena.tuning;
        let time = SimTime::starting_at(config.start_ms);
        let player = PlayerState::new(
            Position::new(0.0, tuning.eye_height, 0.0),
            tuning.max_health.clamp(1, PLAYER_MAX_HEALTH),
        );

        let mut engine = Self {
            world: World::new(),
            tuning,
            time,
            phase: GamePhase::Playing,
            player,
            ids: EntityIds::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            scene_events: Vec::new(),
            hud_events: Vec::new(),
        };

        match config.layout {
            SpawnLayout::Random => {
                let mut rng = ChaCha8Rng::seed_from_u64(config.arena.seed);
                world_setup::spawn_enemy_wave(
                    &mut engine.world,
                    &mut rng,
                    &mut engine.ids,
                    &engine.tuning,
                    config.start_ms,
                    &mut engine.scene_events,
                );
            }
            SpawnLayout::Fixed(positions) => {
                for position in positions {
                    world_setup::spawn_enemy(
                        &mut engine.world,
                        &mut engine.ids,
                        position,
                        config.start_ms,
                        &mut engine.scene_events,
                    );
                }
            }
        }

        let enemies = engine.enemies_left();
        engine.hud_events.extend([
            HudEvent::HealthChanged {
                health: engine.player.health,
            },
            HudEvent::EnemyCountChanged { remaining: enemies },
            HudEvent::InstructionsVisible { visible: true },
        ]);
        info!("round started with {enemies} enemies (seed {})", config.arena.seed);

        engine
    }

    /// Queue a player command for the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one frame stamped `now_ms` and return the resulting snapshot.
    /// After the round has ended the clock still runs but nothing moves.
    pub fn tick(&mut self, now_ms: f64) -> ArenaSnapshot {
        self.time.advance_to(now_ms);
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems();
        }
        self.expire_effects();

        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.player,
            std::mem::take(&mut self.scene_events),
            std::mem::take(&mut self.hud_events),
        )
    }

    /// Get the current round phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current frame timing.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Number of live enemies.
    pub fn enemies_left(&self) -> u32 {
        self.world.query::<&Enemy>().iter().count() as u32
    }

    /// Spawn a projectile directly (for tests that script hits).
    #[cfg(test)]
    pub fn spawn_test_projectile(
        &mut self,
        origin: Position,
        direction: DVec3,
        owner: ProjectileOwner,
    ) -> hecs::Entity {
        world_setup::spawn_projectile(
            &mut self.world,
            &mut self.ids,
            &self.tuning,
            origin,
            direction,
            owner,
            self.time.now_ms,
            &mut self.scene_events,
        )
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::KeyDown { key } => self.player.intent.set(key, true),
            PlayerCommand::KeyUp { key } => self.player.intent.set(key, false),
            PlayerCommand::Look { yaw, pitch } => {
                if self.player.locked {
                    self.player.set_look(yaw, pitch);
                }
            }
            PlayerCommand::Lock => {
                if self.phase == GamePhase::Playing && !self.player.locked {
                    self.player.locked = true;
                    self.hud_events
                        .push(HudEvent::InstructionsVisible { visible: false });
                }
            }
            PlayerCommand::Unlock => {
                if self.player.locked {
                    self.player.locked = false;
                    self.hud_events
                        .push(HudEvent::InstructionsVisible { visible: true });
                }
            }
            PlayerCommand::Shoot => {
                if self.player.locked && self.phase == GamePhase::Playing {
                    self.fire_player_shot();
                }
            }
        }
    }

    /// Spawn a player projectile just in front of the eye, along the look direction.
    fn fire_player_shot(&mut self) {
        let direction: DVec3 = self.player.look_direction();
        let origin = Position(self.player.position.0 + direction * self.tuning.muzzle_offset);
        world_setup::spawn_projectile(
            &mut self.world,
            &mut self.ids,
            &self.tuning,
            origin,
            direction,
            ProjectileOwner::Player,
            self.time.now_ms,
            &mut self.scene_events,
        );
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = self.time.dt_secs;

        // 1. Player movement (only while the pointer is captured)
        if self.player.locked {
            systems::movement::run(&mut self.player, &self.tuning, dt);
        }
        // 2. Enemy AI (face, approach, fire)
        systems::enemy_ai::run(
            &mut self.world,
            self.player.position,
            &self.time,
            &self.tuning,
            &mut self.ids,
            &mut self.scene_events,
        );
        // 3. Projectile integration
        systems::projectiles::integrate(&mut self.world, dt);
        // 4. Hits and expiry
        self.despawn_buffer.clear();
        let outcome = systems::projectiles::resolve(
            &self.world,
            &mut self.player,
            &self.time,
            &self.tuning,
            &mut self.hud_events,
            &mut self.despawn_buffer,
        );
        // 5. Compaction
        for entity in self.despawn_buffer.drain(..) {
            world_setup::despawn(&mut self.world, entity, &mut self.scene_events);
        }
        // 6. Round end
        if let Some(phase) = outcome {
            self.end_round(phase);
        }
    }

    /// Enter a terminal phase: release the pointer and show the banner.
    fn end_round(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.player.locked = false;

        let victory = phase == GamePhase::Victory;
        let banner = phase.banner().unwrap_or_default().to_string();
        info!("round over: {banner}");
        self.hud_events.extend([
            HudEvent::PointerReleased,
            HudEvent::InstructionsVisible { visible: false },
            HudEvent::RoundOver { victory, banner },
        ]);
    }

    /// Hide the damage flash once its time is up.
    fn expire_effects(&mut self) {
        if let Some(until) = self.player.flash_until_ms {
            if self.time.now_ms >= until {
                self.player.flash_until_ms = None;
                self.hud_events.push(HudEvent::DamageFlash { opacity: 0.0 });
            }
        }
    }
}
