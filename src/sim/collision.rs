//! Collision detection and resolution between pooled entities
//!
//! A naive all-pairs distance scan over active slots, which is plenty at
//! these pool sizes. Contact is inclusive: a pair exactly one radius apart
//! counts as a hit. If pools grow substantially, this scan is where a
//! spatial grid would go.

use glam::Vec3;

use super::state::{HitSource, SimulationState};
use crate::consts::*;

/// What a single resolved contact did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    /// Player projectile destroyed an enemy
    Enemy { position: Vec3 },
    /// Player projectile destroyed an asteroid
    Asteroid { position: Vec3 },
    /// Something struck the ship
    Ship { source: HitSource },
}

impl Hit {
    /// Score awarded for this contact
    pub fn points(&self) -> u64 {
        match self {
            Hit::Enemy { .. } => ENEMY_POINTS,
            Hit::Asteroid { .. } => ASTEROID_POINTS,
            Hit::Ship { .. } => 0,
        }
    }

    /// Lives lost for this contact
    pub fn damage(&self) -> i32 {
        match self {
            Hit::Ship { .. } => 1,
            _ => 0,
        }
    }
}

/// Every contact resolved in one pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    pub hits: Vec<Hit>,
}

impl CollisionReport {
    pub fn score(&self) -> u64 {
        self.hits.iter().map(Hit::points).sum()
    }

    pub fn damage(&self) -> i32 {
        self.hits.iter().map(Hit::damage).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Inclusive sphere contact test
#[inline]
pub fn within(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance_squared(b) <= radius * radius
}

/// Resolve all four pair kinds, releasing destroyed entities.
///
/// Each pair is judged on its own: a projectile overlapping two targets in
/// the same pass takes both down. Ship contacts release only the other
/// entity.
pub fn resolve(state: &mut SimulationState) -> CollisionReport {
    let mut report = CollisionReport::default();
    resolve_projectile_hits(state, &mut report);
    resolve_ship_hits(state, &mut report);
    report
}

/// Player projectiles against enemies and asteroids
fn resolve_projectile_hits(state: &mut SimulationState, report: &mut CollisionReport) {
    let shots: Vec<(usize, Vec3)> = state
        .projectiles
        .iter_active()
        .map(|(i, p)| (i, p.position))
        .collect();

    for (shot_idx, shot_pos) in shots {
        let mut struck = false;

        let enemy_hits: Vec<usize> = state
            .enemies
            .iter_active()
            .filter(|(_, e)| within(shot_pos, e.position, ENEMY_HIT_RADIUS))
            .map(|(i, _)| i)
            .collect();
        for idx in enemy_hits {
            if let Some(enemy) = state.enemies.release(idx) {
                report.hits.push(Hit::Enemy {
                    position: enemy.position,
                });
                struck = true;
            }
        }

        let asteroid_hits: Vec<usize> = state
            .asteroids
            .iter_active()
            .filter(|(_, a)| within(shot_pos, a.position, a.scale))
            .map(|(i, _)| i)
            .collect();
        for idx in asteroid_hits {
            if let Some(asteroid) = state.asteroids.release(idx) {
                report.hits.push(Hit::Asteroid {
                    position: asteroid.position,
                });
                struck = true;
            }
        }

        if struck {
            state.projectiles.release(shot_idx);
        }
    }
}

/// Enemy projectiles and asteroids against the ship
fn resolve_ship_hits(state: &mut SimulationState, report: &mut CollisionReport) {
    let ship = state.ship.position;

    let released = state
        .enemy_projectiles
        .retain_active(|p| !within(p.position, ship, SHIP_HIT_RADIUS));
    report.hits.extend((0..released).map(|_| Hit::Ship {
        source: HitSource::EnemyProjectile,
    }));

    let released = state
        .asteroids
        .retain_active(|a| !within(a.position, ship, a.scale + SHIP_ASTEROID_MARGIN));
    report.hits.extend((0..released).map(|_| Hit::Ship {
        source: HitSource::Asteroid,
    }));
}
