//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies

pub mod collision;
pub mod control;
pub mod movement;
pub mod pool;
pub mod session;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, Hit, resolve};
pub use control::{HeldKeys, aim_from_pointer, apply_keys, ship_target};
pub use pool::Pool;
pub use spawner::{enemy_spawn_interval, fire_projectile};
pub use state::{
    Asteroid, Enemy, GameEvent, HitSource, Projectile, SessionPhase, Ship, SimulationState,
    SpawnTimers,
};
pub use tick::{TickInput, autopilot, tick};
