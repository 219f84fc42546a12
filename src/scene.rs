//! Scene snapshot: per-instance transforms for the renderer
//!
//! One flat instance list per frame, ready to upload as an instance buffer.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::sim::SimulationState;

/// Instance kind tags, matched by the host's mesh table
pub mod kinds {
    pub const SHIP: u32 = 0;
    pub const CROSSHAIR: u32 = 1;
    pub const PROJECTILE: u32 = 2;
    pub const ENEMY_PROJECTILE: u32 = 3;
    pub const ENEMY: u32 = 4;
    pub const ASTEROID: u32 = 5;
}

/// A single rendered instance
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Instance {
    pub position: [f32; 3],
    pub kind: u32,
    /// Euler angles (radians)
    pub rotation: [f32; 3],
    pub scale: f32,
}

impl Instance {
    pub fn new(kind: u32, position: Vec3, rotation: Vec3, scale: f32) -> Self {
        Self {
            position: position.to_array(),
            kind,
            rotation: rotation.to_array(),
            scale,
        }
    }
}

/// Every visible instance for one frame
#[derive(Debug, Clone, Default)]
pub struct SceneSnapshot {
    pub instances: Vec<Instance>,
}

impl SceneSnapshot {
    /// Capture the ship, crosshair and all active pooled entities.
    ///
    /// Inactive slots are simply absent, which is how the host knows to hide
    /// them.
    pub fn capture(state: &SimulationState) -> Self {
        use kinds::*;

        let mut instances = Vec::with_capacity(2 + state.active_entities());
        instances.push(Instance::new(
            SHIP,
            state.ship.position,
            state.ship.rotation,
            1.0,
        ));
        instances.push(Instance::new(
            CROSSHAIR,
            state.ship.crosshair(),
            Vec3::ZERO,
            1.0,
        ));

        instances.extend(
            state
                .projectiles
                .iter_active()
                .map(|(_, p)| Instance::new(PROJECTILE, p.position, Vec3::ZERO, 1.0)),
        );
        instances.extend(
            state
                .enemy_projectiles
                .iter_active()
                .map(|(_, p)| Instance::new(ENEMY_PROJECTILE, p.position, Vec3::ZERO, 1.0)),
        );
        instances.extend(
            state
                .enemies
                .iter_active()
                .map(|(_, e)| Instance::new(ENEMY, e.position, e.rotation, 1.0)),
        );
        instances.extend(
            state
                .asteroids
                .iter_active()
                .map(|(_, a)| Instance::new(ASTEROID, a.position, a.rotation, a.scale)),
        );

        Self { instances }
    }

    /// Raw bytes for an instance buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn count(&self, kind: u32) -> usize {
        self.instances.iter().filter(|i| i.kind == kind).count()
    }
}
