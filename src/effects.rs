//! Render-side timed effects
//!
//! Muzzle flash, damage flash/shake and the starfield scroll. These run off
//! the host's render pass, not the simulation tick, so a flash may still be
//! showing when the next tick starts.

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Decaying visual effect timers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualEffects {
    /// Seconds of muzzle flash left
    pub muzzle_flash: f32,
    /// Seconds of damage flash/shake left
    pub damage_flash: f32,
    /// Starfield z offset, wrapped to (-STARFIELD_WRAP, STARFIELD_WRAP]
    pub starfield_offset: f32,
    /// Suppress damage flash/shake
    reduced_motion: bool,
}

impl VisualEffects {
    pub fn new(settings: &Settings) -> Self {
        Self {
            reduced_motion: !settings.effective_damage_flash(),
            ..Default::default()
        }
    }

    /// Start timers for any events that carry a visual cue
    pub fn trigger(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::ProjectileFired { .. } => self.muzzle_flash = MUZZLE_FLASH_SECS,
                GameEvent::Damaged { .. } if !self.reduced_motion => {
                    self.damage_flash = DAMAGE_FLASH_SECS;
                }
                _ => {}
            }
        }
    }

    /// Advance by one render frame
    pub fn update(&mut self, dt: f32) {
        self.muzzle_flash = (self.muzzle_flash - dt).max(0.0);
        self.damage_flash = (self.damage_flash - dt).max(0.0);

        self.starfield_offset += STARFIELD_SPEED * dt;
        if self.starfield_offset > STARFIELD_WRAP {
            self.starfield_offset -= 2.0 * STARFIELD_WRAP;
        }
    }

    pub fn muzzle_flash_visible(&self) -> bool {
        self.muzzle_flash > 0.0
    }

    /// Damage overlay and screen shake active
    pub fn damage_flash_active(&self) -> bool {
        self.damage_flash > 0.0
    }
}
