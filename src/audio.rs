//! Sound cue mapping
//!
//! The host owns actual playback. This module turns simulation events into
//! fire-and-forget cues (which sample, how loud).

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Start/restart pressed
    Select,
    /// Player fired
    Laser,
    /// Enemy or asteroid destroyed
    Explosion,
    /// Ship took damage
    Damage,
    /// Game over
    GameOver,
}

impl SoundEffect {
    /// Sample path relative to the host's asset root
    pub fn asset_path(&self) -> &'static str {
        match self {
            SoundEffect::Select => "sounds/select.mp3",
            SoundEffect::Laser => "sounds/laser.mp3",
            SoundEffect::Explosion => "sounds/explosion.mp3",
            SoundEffect::Damage => "sounds/damage.mp3",
            SoundEffect::GameOver => "sounds/gameOver.mp3",
        }
    }
}

/// A cue for the host to play once
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioCue {
    pub effect: SoundEffect,
    /// Final volume (0.0 - 1.0), settings already applied
    pub volume: f32,
}

/// Base sample volume before settings
fn base_cue(event: &GameEvent) -> Option<(SoundEffect, f32)> {
    match event {
        GameEvent::SessionStarted => Some((SoundEffect::Select, 0.5)),
        GameEvent::ProjectileFired { .. } => Some((SoundEffect::Laser, 0.1)),
        GameEvent::EnemyDestroyed { .. } => Some((SoundEffect::Explosion, 0.3)),
        GameEvent::AsteroidDestroyed { .. } => Some((SoundEffect::Explosion, 0.2)),
        GameEvent::Damaged { .. } => Some((SoundEffect::Damage, 0.5)),
        GameEvent::GameOver { .. } => Some((SoundEffect::GameOver, 0.5)),
        _ => None,
    }
}

/// Volume-aware event to cue mapper
#[derive(Debug, Clone)]
pub struct AudioMixer {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioMixer {
    pub fn new() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Mixer configured from player settings
    pub fn from_settings(settings: &Settings) -> Self {
        let mut mixer = Self::new();
        mixer.set_master_volume(settings.master_volume);
        mixer.set_sfx_volume(settings.sfx_volume);
        mixer.set_muted(settings.muted);
        mixer
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Cue for a single event, if it is audible
    pub fn cue(&self, event: &GameEvent) -> Option<AudioCue> {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return None;
        }
        base_cue(event).map(|(effect, base)| AudioCue {
            effect,
            volume: base * vol,
        })
    }

    /// Cues for a tick's worth of events, in event order
    pub fn cues(&self, events: &[GameEvent]) -> Vec<AudioCue> {
        events.iter().filter_map(|e| self.cue(e)).collect()
    }
}
