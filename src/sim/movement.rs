//! Per-tick movement integration and out-of-bounds culling
//!
//! Only active slots are touched. Culling past the depth limits is the only
//! way besides a collision for an entity to leave play.

use glam::Vec2;

use super::control::{bank_and_pitch, ship_target, smooth_toward};
use super::state::{Ship, SimulationState};
use crate::consts::*;

/// Counts of entities culled this tick, per pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Culled {
    pub projectiles: usize,
    pub enemy_projectiles: usize,
    pub enemies: usize,
    pub asteroids: usize,
}

impl Culled {
    pub fn total(&self) -> usize {
        self.projectiles + self.enemy_projectiles + self.enemies + self.asteroids
    }
}

/// Move the ship one smoothing step toward the aim target
pub fn move_ship(ship: &mut Ship, aim: Vec2) {
    let target = ship_target(aim);
    ship.position = smooth_toward(ship.position, target);
    ship.rotation = bank_and_pitch(ship.position, target);
}

/// Advance every active pooled entity by `dt` seconds and cull escapees
pub fn integrate(state: &mut SimulationState, dt: f32) -> Culled {
    let projectiles = state.projectiles.retain_active(|p| {
        p.position += p.velocity * dt;
        p.position.z >= PROJECTILE_FAR_DEPTH
    });

    let enemy_projectiles = state.enemy_projectiles.retain_active(|p| {
        p.position += p.velocity * dt;
        p.position.z <= CAMERA_DEPTH
    });

    let enemies = state.enemies.retain_active(|e| {
        e.position.z += e.speed * dt;
        e.rotation.x += ENEMY_SPIN_RATE * dt;
        e.rotation.y += ENEMY_SPIN_RATE * dt;
        e.position.z <= CAMERA_DEPTH
    });

    let asteroids = state.asteroids.retain_active(|a| {
        a.position.z += a.speed * dt;
        a.rotation.x += a.spin_axis.x * ASTEROID_SPIN_RATE * dt;
        a.rotation.y += a.spin_axis.y * ASTEROID_SPIN_RATE * dt;
        a.position.z <= CAMERA_DEPTH
    });

    Culled {
        projectiles,
        enemy_projectiles,
        enemies,
        asteroids,
    }
}
