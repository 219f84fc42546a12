//! Star Strike entry point
//!
//! Native headless host: runs an autopilot session at a fixed frame time and
//! drives the render-side collaborators (effects, audio cues, HUD) exactly
//! as a graphical host would.
//!
//! Usage: `star-strike [settings.json] [max_frames]`

use star_strike::Settings;
use star_strike::audio::AudioMixer;
use star_strike::consts::HOST_FRAME_DT;
use star_strike::effects::VisualEffects;
use star_strike::platform::InputState;
use star_strike::scene::SceneSnapshot;
use star_strike::sim::{GameEvent, SimulationState, tick};
use star_strike::ui::HudView;

/// Default frame cap (five minutes at 60 Hz)
const DEFAULT_MAX_FRAMES: u64 = 60 * 60 * 5;

/// Host-side game instance
struct Game {
    state: SimulationState,
    input: InputState,
    effects: VisualEffects,
    mixer: AudioMixer,
    cues_played: usize,
    frames: u64,
}

impl Game {
    fn new(settings: &Settings, seed: u64) -> Self {
        let mut input = InputState::new(1280.0, 720.0);
        input.idle_mode = true;
        Self {
            state: SimulationState::new(seed),
            input,
            effects: VisualEffects::new(settings),
            mixer: AudioMixer::from_settings(settings),
            cues_played: 0,
            frames: 0,
        }
    }

    /// One host frame: tick, then hand results to the presentation layers
    fn frame(&mut self, dt: f32) {
        let input = self.input.take_input();
        tick(&mut self.state, &input, dt);

        let events = self.state.drain_events();
        self.effects.trigger(&events);
        self.effects.update(dt);
        self.cues_played += self.mixer.cues(&events).len();

        for event in &events {
            match event {
                GameEvent::Damaged { lives } => {
                    let hud = HudView::from_state(&self.state);
                    log::info!("Hit! lives {} (raw {}), score {}", hud.lives, lives, hud.score);
                }
                GameEvent::GameOver { final_score } => {
                    log::info!("Final score: {}", final_score);
                }
                _ => {}
            }
        }

        if self.frames.is_multiple_of(600) && self.state.is_running() {
            let scene = SceneSnapshot::capture(&self.state);
            log::debug!(
                "t={:.1}s instances={} ({} bytes) score={}",
                self.state.elapsed,
                scene.instances.len(),
                scene.as_bytes().len(),
                self.state.score
            );
        }
        self.frames += 1;
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Star Strike (native, headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = args
        .next()
        .map(Settings::load_or_default)
        .unwrap_or_default();
    let max_frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_FRAMES);
    let seed = settings.seed.unwrap_or_else(rand::random);

    let mut game = Game::new(&settings, seed);
    game.input.start_pressed();

    while game.frames < max_frames && !game.state.is_over() {
        game.frame(HOST_FRAME_DT);
    }

    let hud = HudView::from_state(&game.state);
    println!(
        "seed {} | {} frames | score {} | lives {} | {} audio cues",
        seed, game.frames, hud.score, hud.lives, game.cues_played
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `sim::tick` themselves; there is no native loop here
}
