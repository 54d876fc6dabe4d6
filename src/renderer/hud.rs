//! HUD layout

use glam::Vec2;

use crate::consts::FONT_MARGIN;
use crate::sim::GameState;

/// Which point of the text box `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    Center,
}

/// A line of HUD text
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub text: String,
    pub pos: Vec2,
    pub anchor: Anchor,
    /// Pixel size of the font
    pub font_size: f32,
}

/// HUD lines for the current state. Scores show as whole numbers.
pub fn hud_lines(state: &GameState) -> Vec<HudText> {
    let width = state.viewport.width;
    let height = state.viewport.height;
    let large = width / 20.0;
    let small = width / 40.0;

    let mut lines = vec![
        HudText {
            text: format!("Score: {}", state.score as u64),
            pos: Vec2::splat(FONT_MARGIN),
            anchor: Anchor::TopLeft,
            font_size: large,
        },
        HudText {
            text: format!("High Score: {}", state.high_score as u64),
            pos: Vec2::new(width - FONT_MARGIN, FONT_MARGIN),
            anchor: Anchor::TopRight,
            font_size: large,
        },
    ];

    if !state.is_running() {
        lines.push(HudText {
            text: "Press Space To Start".to_string(),
            pos: Vec2::new(width / 2.0, height / 2.0),
            anchor: Anchor::Center,
            font_size: large,
        });
    }

    lines.push(HudText {
        text: "Press 'm' to mute".to_string(),
        pos: Vec2::new(FONT_MARGIN, height - FONT_MARGIN),
        anchor: Anchor::TopLeft,
        font_size: small,
    });

    lines
}
