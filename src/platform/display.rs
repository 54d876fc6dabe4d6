//! Display size discovery and the derived play area

use serde::{Deserialize, Serialize};

/// Anything that can report the size of the screen the game runs on
pub trait Display {
    /// Screen size in pixels (width, height)
    fn display_size(&self) -> (f32, f32);

    /// The play area for this display
    fn viewport(&self) -> Viewport {
        let (width, height) = self.display_size();
        Viewport::for_display(width, height)
    }
}

/// Fixed-size display for headless runs and platforms without a query API
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessDisplay {
    pub width: f32,
    pub height: f32,
}

impl HeadlessDisplay {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Display for HeadlessDisplay {
    fn display_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// The window the simulation lives in, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Half the display wide, a third of it tall
    pub fn for_display(display_width: f32, display_height: f32) -> Self {
        Self {
            width: display_width / 2.0,
            height: display_height / 3.0,
        }
    }
}
