//! Simulation state and core entity types
//!
//! Everything a tick reads or writes lives in [`SimulationState`]; there are
//! no globals.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::pool::Pool;
use crate::consts::*;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Before the first start; controls disabled
    #[default]
    Idle,
    /// Controls enabled, simulation active
    Running,
    /// Lives exhausted; frozen until restart
    Over,
}

/// A projectile travelling along a fixed velocity (player or enemy)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// An enemy fighter flying toward the camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub position: Vec3,
    /// Euler angles (radians), visual only
    pub rotation: Vec3,
    /// Units per second along +z
    pub speed: f32,
    /// Seconds until the next shot
    pub fire_timer: f32,
}

/// A tumbling asteroid flying toward the camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub position: Vec3,
    pub rotation: Vec3,
    pub speed: f32,
    /// Unit axis driving the tumble
    pub spin_axis: Vec3,
    /// Uniform scale; doubles as the projectile hit radius
    pub scale: f32,
}

/// The player ship
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ship {
    pub position: Vec3,
    /// Bank (z) and pitch (x) derived from target offset, visual only
    pub rotation: Vec3,
}

impl Ship {
    /// Crosshair projected in front of the ship
    pub fn crosshair(&self) -> Vec3 {
        Vec3::new(self.position.x, self.position.y, CROSSHAIR_DEPTH)
    }
}

/// What hit the ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitSource {
    EnemyProjectile,
    Asteroid,
}

/// Discrete events emitted during a tick, for the audio/UI/render host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Session (re)started
    SessionStarted,
    /// Player fired a projectile
    ProjectileFired { position: Vec3 },
    /// An enemy fired at the ship
    EnemyFired { position: Vec3 },
    EnemySpawned { position: Vec3 },
    AsteroidSpawned { position: Vec3, scale: f32 },
    /// Player projectile destroyed an enemy
    EnemyDestroyed { position: Vec3, points: u64 },
    /// Player projectile destroyed an asteroid
    AsteroidDestroyed { position: Vec3, points: u64 },
    /// Something struck the ship
    ShipHit { source: HitSource },
    /// Damage applied; `lives` is the raw remaining count
    Damaged { lives: i32 },
    /// Session ended
    GameOver { final_score: u64 },
}

/// Spawn countdowns (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpawnTimers {
    pub enemy: f32,
    pub asteroid: f32,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Seed this state was created with
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: SessionPhase,
    pub score: u64,
    /// Raw life count; may dip below zero, see [`crate::display_lives`]
    pub lives: i32,
    /// Seconds of play since the last start
    pub elapsed: f32,
    /// Ticks simulated since the last start
    pub ticks: u64,
    /// Normalized aim in [-1, 1]^2
    pub aim: Vec2,
    pub ship: Ship,
    pub projectiles: Pool<Projectile>,
    pub enemy_projectiles: Pool<Projectile>,
    pub enemies: Pool<Enemy>,
    pub asteroids: Pool<Asteroid>,
    pub timers: SpawnTimers,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl SimulationState {
    /// Create an idle simulation with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: SessionPhase::Idle,
            score: 0,
            lives: STARTING_LIVES,
            elapsed: 0.0,
            ticks: 0,
            aim: Vec2::ZERO,
            ship: Ship::default(),
            projectiles: Pool::new(PROJECTILE_POOL_SIZE),
            enemy_projectiles: Pool::new(ENEMY_PROJECTILE_POOL_SIZE),
            enemies: Pool::new(ENEMY_POOL_SIZE),
            asteroids: Pool::new(ASTEROID_POOL_SIZE),
            timers: SpawnTimers::default(),
            events: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::Over
    }

    /// Total active entities across all four pools
    pub fn active_entities(&self) -> usize {
        self.projectiles.active_count()
            + self.enemy_projectiles.active_count()
            + self.enemies.active_count()
            + self.asteroids.active_count()
    }

    /// Take the events produced so far, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
