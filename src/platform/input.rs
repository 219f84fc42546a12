//! Host input accumulation
//!
//! Events arrive between frames; [`InputState::take_input`] folds them into
//! one [`TickInput`] and clears the one-shot triggers.

use glam::Vec2;

use crate::sim::{HeldKeys, TickInput, aim_from_pointer};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    Fire,
}

impl Key {
    const DIRECTIONAL: usize = 8;

    /// Parse a host key name (case-insensitive, e.g. "ArrowUp", "w", " ")
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "arrowup" => Some(Key::ArrowUp),
            "arrowdown" => Some(Key::ArrowDown),
            "arrowleft" => Some(Key::ArrowLeft),
            "arrowright" => Some(Key::ArrowRight),
            "w" => Some(Key::W),
            "a" => Some(Key::A),
            "s" => Some(Key::S),
            "d" => Some(Key::D),
            " " | "space" => Some(Key::Fire),
            _ => None,
        }
    }

    /// Slot in the held-key table; the fire key is not tracked as held
    fn held_index(self) -> Option<usize> {
        match self {
            Key::ArrowUp => Some(0),
            Key::ArrowDown => Some(1),
            Key::ArrowLeft => Some(2),
            Key::ArrowRight => Some(3),
            Key::W => Some(4),
            Key::A => Some(5),
            Key::S => Some(6),
            Key::D => Some(7),
            Key::Fire => None,
        }
    }
}

/// Input accumulated since the last tick
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: [bool; Key::DIRECTIONAL],
    viewport: Vec2,
    /// Latest pointer sample not yet consumed
    pointer: Option<Vec2>,
    fire: bool,
    start: bool,
    /// Demo mode flag passed through to every tick
    pub idle_mode: bool,
}

impl InputState {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Vec2::new(width, height),
            ..Default::default()
        }
    }

    /// Key pressed. Returns true if the game uses the key, so the host can
    /// suppress its default action (e.g. space scrolling the page).
    pub fn key_down(&mut self, name: &str) -> bool {
        let Some(key) = Key::from_name(name) else {
            return false;
        };
        match key.held_index() {
            Some(i) => self.held[i] = true,
            None => self.fire = true,
        }
        true
    }

    pub fn key_up(&mut self, name: &str) {
        if let Some(i) = Key::from_name(name).and_then(Key::held_index) {
            self.held[i] = false;
        }
    }

    /// Pointer moved to client pixel coordinates
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Some(aim_from_pointer(Vec2::new(x, y), self.viewport));
    }

    /// Pointer press or tap
    pub fn pointer_pressed(&mut self) {
        self.fire = true;
    }

    /// Start/restart button
    pub fn start_pressed(&mut self) {
        self.start = true;
    }

    /// Current directional state (arrow keys and WASD merged)
    pub fn held_keys(&self) -> HeldKeys {
        let h = &self.held;
        HeldKeys {
            up: h[0] || h[4],
            down: h[1] || h[6],
            left: h[2] || h[5],
            right: h[3] || h[7],
        }
    }

    /// Build this tick's input and clear one-shot triggers
    pub fn take_input(&mut self) -> TickInput {
        TickInput {
            pointer: self.pointer.take(),
            keys: self.held_keys(),
            fire: std::mem::take(&mut self.fire),
            start: std::mem::take(&mut self.start),
            idle_mode: self.idle_mode,
        }
    }
}
