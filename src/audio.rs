//! Sound effect dispatch
//!
//! The simulation never plays sounds itself. The shell hands each
//! [`GameEvent`] to an [`AudioController`], which decides what to play and
//! forwards it to whatever [`AudioSink`] the platform provides.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player hits an obstacle
    Hit,
    /// Jump key pressed during a run
    Jump,
}

/// Platform audio output. Fire-and-forget: nothing is reported back.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
    /// Start (or resume) the looping background track
    fn play_music(&mut self);
    fn pause_music(&mut self);
}

/// Sink for headless runs: every command becomes a log line
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("Sound: {:?}", effect);
    }

    fn play_music(&mut self) {
        log::debug!("Music playing");
    }

    fn pause_music(&mut self) {
        log::debug!("Music paused");
    }
}

/// Audio manager for the game
pub struct AudioController<S: AudioSink> {
    sink: S,
    muted: bool,
    music_playing: bool,
}

impl<S: AudioSink> AudioController<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            muted: false,
            music_playing: false,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    /// Start the music unless muted; call once per frame
    pub fn ensure_music(&mut self) {
        if !self.music_playing && !self.muted {
            self.sink.play_music();
            self.music_playing = true;
        }
    }

    /// Mute key: pause music and silence effects, or undo both
    pub fn toggle_mute(&mut self) {
        if self.music_playing {
            self.sink.pause_music();
            self.music_playing = false;
            self.muted = true;
        } else {
            self.sink.play_music();
            self.music_playing = true;
            self.muted = false;
        }
        log::info!("Audio {}", if self.muted { "muted" } else { "unmuted" });
    }

    /// Play whatever an event calls for
    pub fn handle_event(&mut self, event: &GameEvent) {
        if self.muted {
            return;
        }
        match event {
            GameEvent::JumpPressed => self.sink.play(SoundEffect::Jump),
            GameEvent::Crashed { .. } => self.sink.play(SoundEffect::Hit),
            _ => {}
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
