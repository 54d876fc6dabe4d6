//! Input events and key mapping

use std::collections::VecDeque;

use crate::config::Controls;

/// A raw key code as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

/// Discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(KeyCode),
}

/// What the shell should do in response to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Start the run, or jump once it is running
    Jump,
    ToggleMute,
}

impl Command {
    /// Map an event through the key bindings; unbound keys map to nothing
    pub fn from_event(event: InputEvent, controls: &Controls) -> Option<Self> {
        match event {
            InputEvent::Quit => Some(Command::Quit),
            InputEvent::KeyDown(KeyCode(code)) if code == controls.jump_key => Some(Command::Jump),
            InputEvent::KeyDown(KeyCode(code)) if code == controls.mute_key => {
                Some(Command::ToggleMute)
            }
            InputEvent::KeyDown(_) => None,
        }
    }
}

/// Source of input events, drained once per frame
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Replays a fixed list of per-frame event batches, then stays silent
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{KEY_M, KEY_SPACE};

    #[test]
    fn test_default_bindings() {
        let controls = Controls::default();
        assert_eq!(
            Command::from_event(InputEvent::KeyDown(KeyCode(KEY_SPACE)), &controls),
            Some(Command::Jump)
        );
        assert_eq!(
            Command::from_event(InputEvent::KeyDown(KeyCode(KEY_M)), &controls),
            Some(Command::ToggleMute)
        );
        assert_eq!(
            Command::from_event(InputEvent::Quit, &controls),
            Some(Command::Quit)
        );
        assert_eq!(
            Command::from_event(InputEvent::KeyDown(KeyCode(13)), &controls),
            None
        );
    }

    #[test]
    fn test_rebound_jump_key() {
        let controls = Controls {
            jump_key: 119,
            ..Default::default()
        };
        assert_eq!(
            Command::from_event(InputEvent::KeyDown(KeyCode(119)), &controls),
            Some(Command::Jump)
        );
        assert_eq!(
            Command::from_event(InputEvent::KeyDown(KeyCode(KEY_SPACE)), &controls),
            None
        );
    }

    #[test]
    fn test_scripted_input_drains_in_order() {
        let mut input = ScriptedInput::new(vec![
            vec![InputEvent::KeyDown(KeyCode(KEY_SPACE))],
            vec![],
            vec![InputEvent::Quit],
        ]);
        assert_eq!(input.poll().len(), 1);
        assert!(input.poll().is_empty());
        assert_eq!(input.poll(), vec![InputEvent::Quit]);
        assert!(input.poll().is_empty());
    }
}
