//! Control mapping: raw input samples to aim vector and ship target
//!
//! Pointer samples set the aim absolutely; held keys nudge it. Either way the
//! aim is clamped to [-1, 1] on both axes, and the ship chases the target the
//! aim describes rather than the aim itself.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Directional keys currently held (arrows or WASD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Clamp an aim sample into the unit square
#[inline]
pub fn clamp_aim(aim: Vec2) -> Vec2 {
    aim.clamp(Vec2::splat(-1.0), Vec2::ONE)
}

/// Map a pointer position in viewport pixels to an aim sample.
///
/// Positions outside the viewport clamp to the edge. A degenerate viewport
/// yields a centered aim.
pub fn aim_from_pointer(pointer: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    clamp_aim(pointer / viewport * 2.0 - Vec2::ONE)
}

/// Nudge the aim by held keys.
///
/// The vertical axis is inverted: holding up moves the aim toward -1, which
/// the target mapping turns into upward ship motion.
pub fn apply_keys(aim: Vec2, keys: HeldKeys, dt: f32) -> Vec2 {
    let step = KEY_AIM_SPEED * dt;
    let mut aim = aim;
    if keys.up {
        aim.y -= step;
    }
    if keys.down {
        aim.y += step;
    }
    if keys.left {
        aim.x -= step;
    }
    if keys.right {
        aim.x += step;
    }
    clamp_aim(aim)
}

/// World-space point the ship steers toward for a given aim
pub fn ship_target(aim: Vec2) -> Vec3 {
    Vec3::new(
        aim.x * SHIP_X_RANGE,
        -aim.y * SHIP_Y_RANGE + SHIP_Y_OFFSET,
        0.0,
    )
}

/// One smoothing step toward the target (fixed factor, not delta-scaled)
#[inline]
pub fn smooth_toward(current: Vec3, target: Vec3) -> Vec3 {
    current.lerp(target, SHIP_SMOOTHING)
}

/// Bank and pitch from the remaining offset to the target
pub fn bank_and_pitch(position: Vec3, target: Vec3) -> Vec3 {
    Vec3::new(
        (target.y - position.y) * SHIP_BANK_FACTOR,
        0.0,
        (target.x - position.x) * -SHIP_BANK_FACTOR,
    )
}
