//! Round configuration: RNG seed plus every gameplay tuning value.
//!
//! Every field has a default, so a TOML file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A tuning value outside its allowed range
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// RNG seed for enemy placement. Same seed = same layout.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

impl ArenaConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.tuning.validate()?;
        Ok(config)
    }

    /// Render as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Gameplay tuning. Distances in world units, times in ms unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub enemy_count: u32,
    pub spawn_half_width: f64,
    pub spawn_center_z: f64,
    pub enemy_spawn_height: f64,

    pub eye_height: f64,
    pub max_health: u32,
    /// Velocity damping coefficient (1/s).
    pub velocity_damping: f64,
    /// Held-key acceleration (units/s²).
    pub move_acceleration: f64,
    pub muzzle_offset: f64,

    /// Enemy approach speed (units/s).
    pub enemy_speed: f64,
    pub enemy_approach_distance: f64,
    pub enemy_fire_range: f64,
    pub enemy_fire_interval_ms: f64,

    /// Units/s.
    pub player_projectile_speed: f64,
    /// Units/s.
    pub enemy_projectile_speed: f64,
    pub projectile_lifetime_ms: f64,
    pub player_hit_radius: f64,
    pub enemy_hit_radius: f64,

    pub damage_per_hit: u32,
    pub damage_cooldown_ms: f64,
    pub damage_flash_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            enemy_count: ENEMY_COUNT,
            spawn_half_width: SPAWN_HALF_WIDTH,
            spawn_center_z: SPAWN_CENTER_Z,
            enemy_spawn_height: ENEMY_SPAWN_HEIGHT,
            eye_height: PLAYER_EYE_HEIGHT,
            max_health: PLAYER_MAX_HEALTH,
            velocity_damping: VELOCITY_DAMPING,
            move_acceleration: MOVE_ACCELERATION,
            muzzle_offset: MUZZLE_OFFSET,
            enemy_speed: ENEMY_SPEED,
            enemy_approach_distance: ENEMY_APPROACH_DISTANCE,
            enemy_fire_range: ENEMY_FIRE_RANGE,
            enemy_fire_interval_ms: ENEMY_FIRE_INTERVAL_MS,
            player_projectile_speed: PLAYER_PROJECTILE_SPEED,
            enemy_projectile_speed: ENEMY_PROJECTILE_SPEED,
            projectile_lifetime_ms: PROJECTILE_LIFETIME_MS,
            player_hit_radius: PLAYER_HIT_RADIUS,
            enemy_hit_radius: ENEMY_HIT_RADIUS,
            damage_per_hit: DAMAGE_PER_HIT,
            damage_cooldown_ms: DAMAGE_COOLDOWN_MS,
            damage_flash_ms: DAMAGE_FLASH_MS,
        }
    }
}

impl Tuning {
    /// Check every value is usable: health within `1..=PLAYER_MAX_HEALTH`,
    /// distances, speeds and times finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health == 0 || self.max_health > PLAYER_MAX_HEALTH {
            return Err(ConfigError::Invalid(format!(
                "max_health must be in 1..={PLAYER_MAX_HEALTH}, got {}",
                self.max_health
            )));
        }

        let non_negative = [
            ("spawn_half_width", self.spawn_half_width),
            ("enemy_spawn_height", self.enemy_spawn_height),
            ("eye_height", self.eye_height),
            ("velocity_damping", self.velocity_damping),
            ("move_acceleration", self.move_acceleration),
            ("muzzle_offset", self.muzzle_offset),
            ("enemy_speed", self.enemy_speed),
            ("enemy_approach_distance", self.enemy_approach_distance),
            ("enemy_fire_range", self.enemy_fire_range),
            ("enemy_fire_interval_ms", self.enemy_fire_interval_ms),
            ("player_projectile_speed", self.player_projectile_speed),
            ("enemy_projectile_speed", self.enemy_projectile_speed),
            ("projectile_lifetime_ms", self.projectile_lifetime_ms),
            ("player_hit_radius", self.player_hit_radius),
            ("enemy_hit_radius", self.enemy_hit_radius),
            ("damage_cooldown_ms", self.damage_cooldown_ms),
            ("damage_flash_ms", self.damage_flash_ms),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        // The spawn box is centred on this z and may sit anywhere on the axis.
        if !self.spawn_center_z.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "spawn_center_z must be finite, got {}",
                self.spawn_center_z
            )));
        }

        Ok(())
    }

    /// Projectile speed for the given owner.
    pub fn projectile_speed(&self, owner: crate::enums::ProjectileOwner) -> f64 {
        match owner {
            crate::enums::ProjectileOwner::Player => self.player_projectile_speed,
            crate::enums::ProjectileOwner::Enemy => self.enemy_projectile_speed,
        }
    }
}
