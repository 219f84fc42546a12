//! HUD and menu view model
//!
//! Plain display values for the host's UI layer; nothing here touches the DOM.

use serde::Serialize;

use crate::sim::{SessionPhase, SimulationState};
use crate::{display_lives, format_score};

/// Everything the HUD and start/game-over menu need to draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HudView {
    /// Zero-padded score, e.g. "0035"
    pub score: String,
    /// Lives, never negative
    pub lives: String,
    /// HUD shown while playing
    pub hud_visible: bool,
    /// Start/game-over menu overlay shown
    pub menu_visible: bool,
    /// "Game over" subtitle shown
    pub subtitle_visible: bool,
    /// Final score for the game-over menu
    pub final_score: Option<u64>,
    /// Label on the start button
    pub start_label: &'static str,
    /// Pointer cursor visible
    pub cursor_visible: bool,
}

impl HudView {
    pub fn from_state(state: &SimulationState) -> Self {
        let running = state.phase == SessionPhase::Running;
        let over = state.phase == SessionPhase::Over;
        Self {
            score: format_score(state.score),
            lives: display_lives(state.lives).to_string(),
            hud_visible: running,
            menu_visible: !running,
            subtitle_visible: over,
            final_score: over.then_some(state.score),
            start_label: if state.phase == SessionPhase::Idle {
                "Start Game"
            } else {
                "Restart Game"
            },
            cursor_visible: !running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::session;

    #[test]
    fn test_idle_shows_start_menu() {
        let state = SimulationState::new(1);
        let hud = HudView::from_state(&state);
        assert!(hud.menu_visible);
        assert!(!hud.hud_visible);
        assert!(!hud.subtitle_visible);
        assert_eq!(hud.start_label, "Start Game");
        assert_eq!(hud.final_score, None);
    }

    #[test]
    fn test_running_hud() {
        let mut state = SimulationState::new(1);
        session::restart(&mut state);
        state.score = 35;
        let hud = HudView::from_state(&state);
        assert_eq!(hud.score, "0035");
        assert_eq!(hud.lives, "3");
        assert!(hud.hud_visible);
        assert!(!hud.menu_visible);
        assert!(!hud.cursor_visible);
    }

    #[test]
    fn test_game_over_menu() {
        let mut state = SimulationState::new(1);
        session::restart(&mut state);
        state.score = 120;
        session::take_damage(&mut state, 4);
        let hud = HudView::from_state(&state);
        assert_eq!(hud.lives, "0");
        assert!(hud.subtitle_visible);
        assert_eq!(hud.final_score, Some(120));
        assert_eq!(hud.start_label, "Restart Game");
    }
}
