//! Per-frame simulation tick
//!
//! Core game loop: control → fire → movement → spawns → collisions → session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::control::{HeldKeys, apply_keys, clamp_aim};
use super::state::SimulationState;
use super::{collision, movement, session, spawner};
use crate::consts::*;

/// Input samples for a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Absolute aim sample from the pointer, already normalized
    pub pointer: Option<Vec2>,
    /// Directional keys held this frame
    pub keys: HeldKeys,
    /// Fire (pointer press or fire key)
    pub fire: bool,
    /// Start/restart trigger
    pub start: bool,
    /// Idle/demo mode - autopilot flies the ship
    pub idle_mode: bool,
}

/// Advance the simulation by one frame of `dt` seconds.
///
/// Events from the previous tick are discarded first. A start trigger
/// restarts the session and consumes the tick, though a pointer sample
/// arriving with it still sets the aim. Outside `Running` nothing moves.
pub fn tick(state: &mut SimulationState, input: &TickInput, dt: f32) {
    state.events.clear();

    if input.start {
        session::restart(state);
        if let Some(pointer) = input.pointer {
            state.aim = clamp_aim(pointer);
        }
        return;
    }

    if !state.is_running() {
        return;
    }

    let input = if input.idle_mode {
        autopilot(state)
    } else {
        input.clone()
    };

    state.ticks += 1;
    state.elapsed += dt;

    // Aim: pointer sets, keys nudge
    if let Some(pointer) = input.pointer {
        state.aim = clamp_aim(pointer);
    }
    state.aim = apply_keys(state.aim, input.keys, dt);

    if input.fire {
        spawner::fire_projectile(state);
    }

    movement::move_ship(&mut state.ship, state.aim);
    let culled = movement::integrate(state, dt);
    if culled.total() > 0 {
        log::trace!("Culled {:?}", culled);
    }

    spawner::update_spawns(state, dt);
    spawner::update_enemy_fire(state, dt);

    let report = collision::resolve(state);
    session::apply_collisions(state, &report);
}

/// Ticks between autopilot shots
const AUTOPILOT_FIRE_EVERY: u64 = 6;

/// Demo input: chase the nearest enemy (or asteroid) and keep firing at it
pub fn autopilot(state: &SimulationState) -> TickInput {
    let nearest_enemy = state
        .enemies
        .iter_active()
        .map(|(_, e)| e.position)
        .max_by(|a, b| a.z.total_cmp(&b.z));
    let target = nearest_enemy.or_else(|| {
        state
            .asteroids
            .iter_active()
            .map(|(_, a)| a.position)
            .max_by(|a, b| a.z.total_cmp(&b.z))
    });

    let Some(target) = target else {
        return TickInput {
            pointer: Some(Vec2::ZERO),
            ..Default::default()
        };
    };

    // Invert the ship target mapping so the ship lines up with the target
    let aim = Vec2::new(
        target.x / SHIP_X_RANGE,
        -(target.y - SHIP_Y_OFFSET) / SHIP_Y_RANGE,
    );
    TickInput {
        pointer: Some(clamp_aim(aim)),
        fire: state.ticks.is_multiple_of(AUTOPILOT_FIRE_EVERY),
        ..Default::default()
    }
}
