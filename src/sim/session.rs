//! Session state machine: Idle -> Running -> Over, restart back to Running

use glam::Vec3;

use super::collision::{CollisionReport, Hit};
use super::state::{GameEvent, SessionPhase, Ship, SimulationState, SpawnTimers};
use crate::consts::*;

/// Start or restart a session.
///
/// Valid from any phase. Clears every pool and recenters the ship; the aim
/// is left alone so the ship heads for wherever the pointer is parked.
pub fn restart(state: &mut SimulationState) {
    state.score = 0;
    state.lives = STARTING_LIVES;
    state.elapsed = 0.0;
    state.ticks = 0;
    state.ship = Ship {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };
    state.projectiles.clear();
    state.enemy_projectiles.clear();
    state.enemies.clear();
    state.asteroids.clear();
    state.timers = SpawnTimers::default();
    state.phase = SessionPhase::Running;
    state.events.push(GameEvent::SessionStarted);
    log::info!("Session started (seed {})", state.seed);
}

/// Add points to the score while running
pub fn award(state: &mut SimulationState, points: u64) {
    if state.phase == SessionPhase::Running {
        state.score += points;
    }
}

/// Apply damage. No-op unless running; ends the session at zero lives.
pub fn take_damage(state: &mut SimulationState, amount: i32) {
    if state.phase != SessionPhase::Running {
        return;
    }
    state.lives -= amount;
    state.events.push(GameEvent::Damaged { lives: state.lives });
    log::debug!("Ship damaged, {} lives left", state.lives);
    if state.lives <= 0 {
        end(state);
    }
}

/// End the session. Idempotent.
pub fn end(state: &mut SimulationState) {
    if state.phase != SessionPhase::Running {
        return;
    }
    state.phase = SessionPhase::Over;
    state.events.push(GameEvent::GameOver {
        final_score: state.score,
    });
    log::info!(
        "Game over: score {} after {:.1}s",
        state.score,
        state.elapsed
    );
}

/// Apply a collision pass: score first, then damage, emitting an event per hit
pub fn apply_collisions(state: &mut SimulationState, report: &CollisionReport) {
    for hit in &report.hits {
        match *hit {
            Hit::Enemy { position } => {
                award(state, ENEMY_POINTS);
                state.events.push(GameEvent::EnemyDestroyed {
                    position,
                    points: ENEMY_POINTS,
                });
            }
            Hit::Asteroid { position } => {
                award(state, ASTEROID_POINTS);
                state.events.push(GameEvent::AsteroidDestroyed {
                    position,
                    points: ASTEROID_POINTS,
                });
            }
            Hit::Ship { source } => {
                if state.phase == SessionPhase::Running {
                    state.events.push(GameEvent::ShipHit { source });
                }
                take_damage(state, hit.damage());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_lives;
    use crate::sim::state::{Enemy, HitSource};

    fn running() -> SimulationState {
        let mut state = SimulationState::new(42);
        restart(&mut state);
        state
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = running();
        state.score = 120;
        state.lives = 1;
        state.elapsed = 33.0;
        state.ship.position = Vec3::new(20.0, 4.0, 0.0);
        state.enemies.acquire(Enemy {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            speed: 1.0,
            fire_timer: 1.0,
        });
        state.phase = SessionPhase::Over;

        restart(&mut state);
        assert_eq!(state.phase, SessionPhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.elapsed, 0.0);
        assert_eq!(state.ship.position, Vec3::ZERO);
        assert_eq!(state.active_entities(), 0);
        assert_eq!(state.events.last(), Some(&GameEvent::SessionStarted));
    }

    #[test]
    fn test_restart_keeps_aim() {
        let mut state = running();
        state.aim = glam::Vec2::new(0.75, -0.5);
        state.phase = SessionPhase::Over;

        restart(&mut state);
        assert_eq!(state.aim, glam::Vec2::new(0.75, -0.5));
        assert_eq!(state.ship.position, Vec3::ZERO);
    }

    #[test]
    fn test_three_hits_end_the_session() {
        let mut state = running();
        take_damage(&mut state, 1);
        take_damage(&mut state, 1);
        assert_eq!(state.phase, SessionPhase::Running);
        take_damage(&mut state, 1);
        assert_eq!(state.phase, SessionPhase::Over);
        assert_eq!(display_lives(state.lives), 0);
        assert!(
            state
                .events
                .contains(&GameEvent::GameOver { final_score: 0 })
        );
    }

    #[test]
    fn test_damage_while_over_is_noop() {
        let mut state = running();
        state.score = 50;
        take_damage(&mut state, 3);
        assert!(state.is_over());
        let events = state.events.len();

        take_damage(&mut state, 1);
        award(&mut state, 10);
        end(&mut state);
        assert_eq!(state.lives, 0);
        assert_eq!(state.score, 50);
        assert_eq!(state.events.len(), events);
    }

    #[test]
    fn test_damage_while_idle_is_noop() {
        let mut state = SimulationState::new(1);
        take_damage(&mut state, 1);
        assert_eq!(state.lives, 3);
        assert_eq!(state.phase, SessionPhase::Idle);
    }

    #[test]
    fn test_overkill_keeps_raw_lives_negative() {
        let mut state = running();
        take_damage(&mut state, 5);
        assert_eq!(state.lives, -2);
        assert_eq!(display_lives(state.lives), 0);
    }

    #[test]
    fn test_apply_collisions_scores_and_damages() {
        let mut state = running();
        let report = CollisionReport {
            hits: vec![
                Hit::Enemy {
                    position: Vec3::ZERO,
                },
                Hit::Asteroid {
                    position: Vec3::ZERO,
                },
                Hit::Ship {
                    source: HitSource::Asteroid,
                },
            ],
        };
        apply_collisions(&mut state, &report);
        assert_eq!(state.score, 15);
        assert_eq!(state.lives, 2);
        assert!(state.events.contains(&GameEvent::ShipHit {
            source: HitSource::Asteroid
        }));
    }
}
