//! Timer-driven spawning: enemies, asteroids and every kind of gunfire
//!
//! Spawns never queue. When a pool is exhausted the attempt is skipped and
//! the timer resets as if it had succeeded.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Asteroid, Enemy, GameEvent, Projectile, SimulationState};
use crate::consts::*;

/// Seconds until the next enemy after `elapsed` seconds of play.
///
/// Ramps linearly from 1.2s to the 0.2s floor over the first minute.
pub fn enemy_spawn_interval(elapsed: f32) -> f32 {
    let ramp = (elapsed / ENEMY_SPAWN_RAMP_SECS).min(1.0);
    (ENEMY_SPAWN_INTERVAL_START - ramp).max(ENEMY_SPAWN_INTERVAL_MIN)
}

/// Seconds until the next asteroid (no ramp)
pub fn asteroid_spawn_interval(rng: &mut Pcg32) -> f32 {
    rng.random::<f32>() * ASTEROID_SPAWN_INTERVAL_SPREAD + ASTEROID_SPAWN_INTERVAL_MIN
}

/// Centered uniform sample in [-0.5, 0.5)
#[inline]
fn centered(rng: &mut Pcg32) -> f32 {
    rng.random::<f32>() - 0.5
}

impl Enemy {
    /// Fresh enemy at the spawn plane
    pub fn random(rng: &mut Pcg32) -> Self {
        let x = centered(rng) * ENEMY_SPAWN_WIDTH;
        let y = centered(rng) * ENEMY_SPAWN_HEIGHT + SHIP_Y_OFFSET;
        Self {
            position: Vec3::new(x, y, SPAWN_DEPTH),
            rotation: Vec3::ZERO,
            speed: rng.random::<f32>() * ENEMY_SPEED_SPREAD + ENEMY_MIN_SPEED,
            fire_timer: rng.random::<f32>() * ENEMY_FIRST_SHOT_SPREAD + ENEMY_FIRST_SHOT_MIN,
        }
    }
}

impl Asteroid {
    /// Fresh asteroid at the spawn plane
    pub fn random(rng: &mut Pcg32) -> Self {
        let x = centered(rng) * ASTEROID_SPAWN_WIDTH;
        let y = centered(rng) * ASTEROID_SPAWN_HEIGHT + SHIP_Y_OFFSET;
        let scale = rng.random::<f32>() * ASTEROID_SCALE_SPREAD + ASTEROID_MIN_SCALE;
        let speed = rng.random::<f32>() * ASTEROID_SPEED_SPREAD + ASTEROID_MIN_SPEED;
        let axis = Vec3::new(centered(rng), centered(rng), centered(rng));
        Self {
            position: Vec3::new(x, y, SPAWN_DEPTH),
            rotation: Vec3::ZERO,
            speed,
            // Degenerate draw: fall back to a fixed axis
            spin_axis: axis.try_normalize().unwrap_or(Vec3::Y),
            scale,
        }
    }
}

/// Count down spawn timers and activate enemies/asteroids when they expire
pub fn update_spawns(state: &mut SimulationState, dt: f32) {
    state.timers.enemy -= dt;
    state.timers.asteroid -= dt;

    if state.timers.enemy <= 0.0 {
        spawn_enemy(state);
        state.timers.enemy = enemy_spawn_interval(state.elapsed);
    }

    if state.timers.asteroid <= 0.0 {
        spawn_asteroid(state);
        state.timers.asteroid = asteroid_spawn_interval(&mut state.rng);
    }
}

/// Try to activate one enemy. Returns false if the pool is exhausted.
pub fn spawn_enemy(state: &mut SimulationState) -> bool {
    let rng = &mut state.rng;
    match state.enemies.acquire_with(|| Enemy::random(rng)) {
        Some(enemy) => {
            let position = enemy.position;
            state.events.push(GameEvent::EnemySpawned { position });
            true
        }
        None => {
            log::debug!("Enemy pool exhausted, skipping spawn");
            false
        }
    }
}

/// Try to activate one asteroid. Returns false if the pool is exhausted.
pub fn spawn_asteroid(state: &mut SimulationState) -> bool {
    let rng = &mut state.rng;
    match state.asteroids.acquire_with(|| Asteroid::random(rng)) {
        Some(asteroid) => {
            let (position, scale) = (asteroid.position, asteroid.scale);
            state
                .events
                .push(GameEvent::AsteroidSpawned { position, scale });
            true
        }
        None => {
            log::debug!("Asteroid pool exhausted, skipping spawn");
            false
        }
    }
}

/// Fire a player projectile from the ship's nose.
///
/// Dropped silently when every projectile slot is in flight.
pub fn fire_projectile(state: &mut SimulationState) -> bool {
    let mut position = state.ship.position;
    position.z -= PROJECTILE_MUZZLE_OFFSET;
    let shot = Projectile {
        position,
        velocity: Vec3::new(0.0, 0.0, -PROJECTILE_SPEED),
    };
    if state.projectiles.acquire(shot).is_some() {
        state.events.push(GameEvent::ProjectileFired { position });
        true
    } else {
        false
    }
}

/// Count down each active enemy's fire timer; due enemies shoot at the ship
pub fn update_enemy_fire(state: &mut SimulationState, dt: f32) {
    let target = state.ship.position;
    let SimulationState {
        enemies,
        enemy_projectiles,
        rng,
        events,
        ..
    } = state;

    for (_, enemy) in enemies.iter_active_mut() {
        enemy.fire_timer -= dt;
        if enemy.fire_timer > 0.0 {
            continue;
        }

        let origin = enemy.position;
        let shot = Projectile {
            position: origin,
            velocity: (target - origin).normalize_or_zero() * ENEMY_PROJECTILE_SPEED,
        };
        if enemy_projectiles.acquire(shot).is_some() {
            events.push(GameEvent::EnemyFired { position: origin });
        }
        enemy.fire_timer = rng.random::<f32>() * ENEMY_REFIRE_SPREAD + ENEMY_REFIRE_MIN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_enemy_interval_ramp() {
        assert!((enemy_spawn_interval(0.0) - 1.2).abs() < 1e-6);
        assert!((enemy_spawn_interval(30.0) - 0.7).abs() < 1e-6);
        assert!((enemy_spawn_interval(60.0) - 0.2).abs() < 1e-6);
        assert!((enemy_spawn_interval(600.0) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_enemy_attributes_in_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..500 {
            let e = Enemy::random(&mut rng);
            assert!((-75.0..75.0).contains(&e.position.x));
            assert!((-32.5..42.5).contains(&e.position.y));
            assert_eq!(e.position.z, SPAWN_DEPTH);
            assert!((180.0..280.0).contains(&e.speed));
            assert!((1.0..3.0).contains(&e.fire_timer));
        }
    }

    #[test]
    fn test_asteroid_attributes_in_range() {
        let mut rng = Pcg32::seed_from_u64(2);
        for _ in 0..500 {
            let a = Asteroid::random(&mut rng);
            assert!((-75.0..75.0).contains(&a.position.x));
            assert!((-25.0..35.0).contains(&a.position.y));
            assert_eq!(a.position.z, SPAWN_DEPTH);
            assert!((80.0..130.0).contains(&a.speed));
            assert!((1.5..7.5).contains(&a.scale));
            assert!((a.spin_axis.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_asteroid_interval_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..500 {
            let t = asteroid_spawn_interval(&mut rng);
            assert!((0.25..0.75).contains(&t));
        }
    }

    #[test]
    fn test_expired_timers_spawn_and_reset() {
        let mut state = SimulationState::new(4);
        update_spawns(&mut state, 0.016);
        assert_eq!(state.enemies.active_count(), 1);
        assert_eq!(state.asteroids.active_count(), 1);
        assert!((state.timers.enemy - 1.2).abs() < 1e-6);
        assert!((0.25..0.75).contains(&state.timers.asteroid));

        // Nothing due yet
        update_spawns(&mut state, 0.1);
        assert_eq!(state.enemies.active_count(), 1);
    }

    #[test]
    fn test_exhausted_pool_still_resets_timer() {
        let mut state = SimulationState::new(5);
        while spawn_enemy(&mut state) {}
        assert!(state.enemies.is_full());

        state.timers.enemy = 0.0;
        update_spawns(&mut state, 0.016);
        assert_eq!(state.enemies.active_count(), ENEMY_POOL_SIZE);
        assert!(state.timers.enemy > 0.0);
    }

    #[test]
    fn test_full_asteroid_pool_still_resets_timer() {
        let mut state = SimulationState::new(9);
        while spawn_asteroid(&mut state) {}
        assert_eq!(state.asteroids.active_count(), ASTEROID_POOL_SIZE);

        state.timers.asteroid = 0.0;
        update_spawns(&mut state, 0.016);
        assert_eq!(state.asteroids.active_count(), ASTEROID_POOL_SIZE);
        assert!((0.25..0.75).contains(&state.timers.asteroid));
    }

    #[test]
    fn test_fire_projectile_from_nose() {
        let mut state = SimulationState::new(6);
        state.ship.position = Vec3::new(3.0, 4.0, 0.0);
        assert!(fire_projectile(&mut state));
        let (_, shot) = state.projectiles.iter_active().next().unwrap();
        assert_eq!(shot.position, Vec3::new(3.0, 4.0, -3.0));
        assert_eq!(shot.velocity, Vec3::new(0.0, 0.0, -1200.0));
        assert!(matches!(
            state.events.last(),
            Some(GameEvent::ProjectileFired { .. })
        ));
    }

    #[test]
    fn test_enemy_fires_at_ship_when_due() {
        let mut state = SimulationState::new(8);
        state.ship.position = Vec3::ZERO;
        state.enemies.acquire(Enemy {
            position: Vec3::new(0.0, 0.0, -300.0),
            rotation: Vec3::ZERO,
            speed: 200.0,
            fire_timer: 0.01,
        });

        update_enemy_fire(&mut state, 0.02);
        assert_eq!(state.enemy_projectiles.active_count(), 1);
        let (_, shot) = state.enemy_projectiles.iter_active().next().unwrap();
        assert!((shot.velocity - Vec3::new(0.0, 0.0, 300.0)).length() < 1e-3);

        let (_, enemy) = state.enemies.iter_active().next().unwrap();
        assert!((2.0..5.0).contains(&enemy.fire_timer));
    }

    #[test]
    fn test_full_enemy_shot_pool_drops_shot() {
        let mut state = SimulationState::new(10);
        for _ in 0..ENEMY_PROJECTILE_POOL_SIZE {
            state.enemy_projectiles.acquire(Projectile {
                position: Vec3::new(0.0, 0.0, -500.0),
                velocity: Vec3::ZERO,
            });
        }
        state.enemies.acquire(Enemy {
            position: Vec3::new(0.0, 0.0, -300.0),
            rotation: Vec3::ZERO,
            speed: 200.0,
            fire_timer: 0.01,
        });

        update_enemy_fire(&mut state, 0.02);
        assert_eq!(
            state.enemy_projectiles.active_count(),
            ENEMY_PROJECTILE_POOL_SIZE
        );
        assert!(
            !state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::EnemyFired { .. }))
        );
        let (_, enemy) = state.enemies.iter_active().next().unwrap();
        assert!((2.0..5.0).contains(&enemy.fire_timer));
    }
}
