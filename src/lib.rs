//! Star Strike - A pooled-entity arcade space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pools, spawning, movement, collisions, session)
//! - `platform`: Host input translation
//! - `scene`: Instance transforms handed to the renderer
//! - `ui`: HUD view model
//! - `audio`: Sound cue mapping
//! - `effects`: Render-side timed effects

pub mod audio;
pub mod effects;
pub mod platform;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Pool capacities
    pub const PROJECTILE_POOL_SIZE: usize = 50;
    pub const ENEMY_PROJECTILE_POOL_SIZE: usize = 50;
    pub const ENEMY_POOL_SIZE: usize = 50;
    pub const ASTEROID_POOL_SIZE: usize = 100;

    /// Lives at session start
    pub const STARTING_LIVES: i32 = 3;

    /// Ship movement envelope (target = aim * range, y offset by SHIP_Y_OFFSET)
    pub const SHIP_X_RANGE: f32 = 60.0;
    pub const SHIP_Y_RANGE: f32 = 30.0;
    pub const SHIP_Y_OFFSET: f32 = 5.0;
    /// Aim units per second while a direction key is held
    pub const KEY_AIM_SPEED: f32 = 2.0;
    /// Per-tick lerp factor toward the aim target (not delta-scaled)
    pub const SHIP_SMOOTHING: f32 = 0.1;
    /// Bank/pitch per unit of target offset
    pub const SHIP_BANK_FACTOR: f32 = 0.02;
    /// Crosshair depth in front of the ship
    pub const CROSSHAIR_DEPTH: f32 = -200.0;

    /// Depth where enemies and asteroids appear
    pub const SPAWN_DEPTH: f32 = -800.0;
    /// Camera depth; anything moving past it is culled
    pub const CAMERA_DEPTH: f32 = 50.0;
    /// Player projectiles are culled beyond this depth
    pub const PROJECTILE_FAR_DEPTH: f32 = -900.0;

    /// Player projectile muzzle offset (along -z) and speed
    pub const PROJECTILE_MUZZLE_OFFSET: f32 = 3.0;
    pub const PROJECTILE_SPEED: f32 = 1200.0;
    /// Enemy projectile speed toward the ship
    pub const ENEMY_PROJECTILE_SPEED: f32 = 300.0;

    /// Enemy spawn area and speed range
    pub const ENEMY_SPAWN_WIDTH: f32 = 150.0;
    pub const ENEMY_SPAWN_HEIGHT: f32 = 75.0;
    pub const ENEMY_MIN_SPEED: f32 = 180.0;
    pub const ENEMY_SPEED_SPREAD: f32 = 100.0;
    /// Delay before an enemy's first shot: [1, 3)
    pub const ENEMY_FIRST_SHOT_MIN: f32 = 1.0;
    pub const ENEMY_FIRST_SHOT_SPREAD: f32 = 2.0;
    /// Delay between subsequent shots: [2, 5)
    pub const ENEMY_REFIRE_MIN: f32 = 2.0;
    pub const ENEMY_REFIRE_SPREAD: f32 = 3.0;
    /// Enemy tumble rate (radians/sec about x and y)
    pub const ENEMY_SPIN_RATE: f32 = 0.5;

    /// Enemy spawn interval ramp: 1.2s at start, floor of 0.2s after 60s
    pub const ENEMY_SPAWN_INTERVAL_START: f32 = 1.2;
    pub const ENEMY_SPAWN_INTERVAL_MIN: f32 = 0.2;
    pub const ENEMY_SPAWN_RAMP_SECS: f32 = 60.0;

    /// Asteroid spawn area (x spans the ship range scaled by 2.5)
    pub const ASTEROID_SPAWN_WIDTH: f32 = SHIP_X_RANGE * 2.5;
    pub const ASTEROID_SPAWN_HEIGHT: f32 = SHIP_Y_RANGE * 2.0;
    pub const ASTEROID_MIN_SPEED: f32 = 80.0;
    pub const ASTEROID_SPEED_SPREAD: f32 = 50.0;
    pub const ASTEROID_MIN_SCALE: f32 = 1.5;
    pub const ASTEROID_SCALE_SPREAD: f32 = 6.0;
    pub const ASTEROID_SPIN_RATE: f32 = 0.5;
    /// Asteroid spawn interval: uniform in [0.25, 0.75)
    pub const ASTEROID_SPAWN_INTERVAL_MIN: f32 = 0.25;
    pub const ASTEROID_SPAWN_INTERVAL_SPREAD: f32 = 0.5;

    /// Collision radii
    pub const ENEMY_HIT_RADIUS: f32 = 4.0;
    pub const SHIP_HIT_RADIUS: f32 = 3.0;
    /// Added to asteroid scale when testing against the ship
    pub const SHIP_ASTEROID_MARGIN: f32 = 1.5;

    /// Score awards
    pub const ENEMY_POINTS: u64 = 10;
    pub const ASTEROID_POINTS: u64 = 5;

    /// Render-side effect durations (seconds)
    pub const MUZZLE_FLASH_SECS: f32 = 0.06;
    pub const DAMAGE_FLASH_SECS: f32 = 0.4;

    /// Starfield scroll speed and wrap window
    pub const STARFIELD_SPEED: f32 = 250.0;
    pub const STARFIELD_WRAP: f32 = 1000.0;

    /// Frame time used by the native host
    pub const HOST_FRAME_DT: f32 = 1.0 / 60.0;
}

/// Zero-padded score string as shown on the HUD (at least 4 digits)
#[inline]
pub fn format_score(score: u64) -> String {
    format!("{score:04}")
}

/// Lives as shown on the HUD (never negative)
#[inline]
pub fn display_lives(lives: i32) -> u32 {
    lives.max(0) as u32
}
