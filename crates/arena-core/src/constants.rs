//! Gameplay constants. These are the defaults of [`crate::config::Tuning`].

// --- Round ---

/// Number of enemies spawned at round start.
pub const ENEMY_COUNT: u32 = 10;

/// Spawn rectangle: x in [-HALF_WIDTH, HALF_WIDTH).
pub const SPAWN_HALF_WIDTH: f64 = 30.0;

/// Spawn rectangle: z in [CENTER_Z - HALF_WIDTH, CENTER_Z + HALF_WIDTH).
pub const SPAWN_CENTER_Z: f64 = -30.0;

/// Height of an enemy's center above the floor (capsule mid-height).
pub const ENEMY_SPAWN_HEIGHT: f64 = 2.0;

// --- Player ---

/// Camera eye height above the floor.
pub const PLAYER_EYE_HEIGHT: f64 = 1.6;

/// Starting and maximum health.
pub const PLAYER_MAX_HEALTH: u32 = 100;

/// Velocity damping coefficient (1/s).
pub const VELOCITY_DAMPING: f64 = 10.0;

/// Movement acceleration from held keys (units/s²).
pub const MOVE_ACCELERATION: f64 = 100.0;

/// Distance in front of the eye at which player shots appear.
pub const MUZZLE_OFFSET: f64 = 1.0;

// --- Enemy AI ---

/// Enemy approach speed (units/s).
pub const ENEMY_SPEED: f64 = 4.0;

/// Enemies stop approaching at or inside this planar distance.
pub const ENEMY_APPROACH_DISTANCE: f64 = 10.0;

/// Enemies only fire when the player is closer than this.
pub const ENEMY_FIRE_RANGE: f64 = 30.0;

/// Minimum time between two shots from the same enemy (ms).
pub const ENEMY_FIRE_INTERVAL_MS: f64 = 2000.0;

// --- Projectiles ---

/// Player projectile speed (units/s).
pub const PLAYER_PROJECTILE_SPEED: f64 = 40.0;

/// Enemy projectile speed (units/s).
pub const ENEMY_PROJECTILE_SPEED: f64 = 8.0;

/// Projectiles older than this are removed (ms).
pub const PROJECTILE_LIFETIME_MS: f64 = 3000.0;

/// Enemy projectile hits the player inside this distance.
pub const PLAYER_HIT_RADIUS: f64 = 1.0;

/// Player projectile hits an enemy inside this distance
/// (capsule radius plus bolt radius, roughly).
pub const ENEMY_HIT_RADIUS: f64 = 1.5;

// --- Damage ---

/// Health removed by one accepted hit.
pub const DAMAGE_PER_HIT: u32 = 10;

/// Hits landing sooner than this after an accepted hit are absorbed (ms).
pub const DAMAGE_COOLDOWN_MS: f64 = 500.0;

/// Duration of the damage flash overlay (ms).
pub const DAMAGE_FLASH_MS: f64 = 100.0;

/// Overlay opacity while the damage flash is showing.
pub const DAMAGE_FLASH_OPACITY: f64 = 0.5;

// --- Render hints ---

/// Radius of a projectile sphere.
pub const PROJECTILE_RADIUS: f64 = 0.2;

/// Enemy capsule radius.
pub const ENEMY_CAPSULE_RADIUS: f64 = 1.0;

/// Enemy capsule straight-section length.
pub const ENEMY_CAPSULE_LENGTH: f64 = 2.0;

// --- Banners ---

pub const VICTORY_BANNER: &str = "VICTORY";
pub const DEFEAT_BANNER: &str = "Game Over";
