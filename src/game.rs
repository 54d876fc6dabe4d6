//! The game shell: poll input, update, render, repeat
//!
//! Owns the simulation state and the platform collaborators. One frame fully
//! updates the state before anything is drawn.

use crate::audio::{AudioController, AudioSink};
use crate::platform::{Clock, Command, InputEvent, InputSource};
use crate::renderer::{Renderer, render_frame};
use crate::sim::{GameState, TickInput, tick};

/// Game instance holding all state
pub struct Game<C: Clock, A: AudioSink, R: Renderer> {
    pub state: GameState,
    clock: C,
    audio: AudioController<A>,
    renderer: R,
    input: TickInput,
    running: bool,
}

impl<C: Clock, A: AudioSink, R: Renderer> Game<C, A, R> {
    pub fn new(state: GameState, clock: C, audio: A, renderer: R) -> Self {
        Self {
            state,
            clock,
            audio: AudioController::new(audio),
            renderer,
            input: TickInput::default(),
            running: true,
        }
    }

    /// Let the game play itself
    pub fn set_idle_mode(&mut self, idle: bool) {
        self.input.idle_mode = idle;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn audio(&self) -> &AudioController<A> {
        &self.audio
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// React to one input event
    pub fn handle_event(&mut self, event: InputEvent) {
        match Command::from_event(event, &self.state.config.controls) {
            Some(Command::Quit) => {
                log::info!("Quit requested");
                self.running = false;
            }
            Some(Command::Jump) => self.input.jump = true,
            Some(Command::ToggleMute) => self.audio.toggle_mute(),
            None => {}
        }
    }

    /// Update and draw one frame, then wait for the next
    pub fn frame(&mut self) {
        self.audio.ensure_music();

        tick(&mut self.state, &self.input, self.clock.now());
        // One-shot input is consumed by the frame that saw it
        self.input.jump = false;

        for event in self.state.drain_events() {
            self.audio.handle_event(&event);
        }

        render_frame(&mut self.renderer, &self.state);
        self.clock.tick(self.state.config.display.target_fps);
    }

    /// Run until quit or until `max_frames` frames have been played.
    /// Returns the number of frames played.
    pub fn run<I: InputSource>(&mut self, input: &mut I, max_frames: Option<u64>) -> u64 {
        let mut frames = 0;
        while self.running && max_frames.is_none_or(|max| frames < max) {
            for event in input.poll() {
                self.handle_event(event);
            }
            if !self.running {
                break;
            }
            self.frame();
            frames += 1;
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::LogAudio;
    use crate::config::GameConfig;
    use crate::consts::{KEY_M, KEY_SPACE};
    use crate::platform::{KeyCode, ManualClock, ScriptedInput, Viewport};
    use crate::renderer::{Sprite, SummaryRenderer};

    fn game() -> Game<ManualClock, LogAudio, SummaryRenderer> {
        let state = GameState::new(GameConfig::default(), Viewport::new(960.0, 360.0), 5).unwrap();
        Game::new(state, ManualClock::default(), LogAudio, SummaryRenderer::new())
    }

    #[test]
    fn test_space_starts_and_quit_stops() {
        let mut game = game();
        let mut input = ScriptedInput::new(vec![
            vec![InputEvent::KeyDown(KeyCode(KEY_SPACE))],
            vec![],
            vec![],
            vec![InputEvent::Quit],
        ]);

        let frames = game.run(&mut input, None);

        assert_eq!(frames, 3);
        assert!(!game.is_running());
        assert!(game.state.is_running());
        assert_eq!(game.state.score, 3.0);
        assert_eq!(game.renderer().frames(), 3);
        assert_eq!(game.renderer().count(Sprite::Player), 1);
    }

    #[test]
    fn test_frame_limit() {
        let mut game = game();
        let frames = game.run(&mut ScriptedInput::default(), Some(10));
        assert_eq!(frames, 10);
        assert!(game.is_running());
        // Never started
        assert_eq!(game.state.score, 0.0);
    }

    #[test]
    fn test_mute_key_toggles_audio() {
        let mut game = game();
        let mut input = ScriptedInput::new(vec![vec![], vec![InputEvent::KeyDown(KeyCode(KEY_M))]]);

        game.run(&mut input, Some(1));
        assert!(game.audio().music_playing());

        game.run(&mut input, Some(1));
        assert!(game.audio().is_muted());
        assert!(!game.audio().music_playing());
    }

    #[test]
    fn test_idle_mode_plays() {
        let mut game = game();
        game.set_idle_mode(true);
        game.run(&mut ScriptedInput::default(), Some(600));
        // The autopilot starts a run on its own; crashes reset but keep the best
        assert!(game.state.score > 0.0 || game.state.high_score > 0.0);
    }
}
