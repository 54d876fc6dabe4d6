//! A renderer that only counts what it is asked to draw

use std::collections::HashMap;

use super::{HudText, Renderer, Sprite};
use crate::sim::Rect;

/// Tallies draw calls per frame; used for headless runs and tests
#[derive(Debug, Default)]
pub struct SummaryRenderer {
    counts: HashMap<Sprite, usize>,
    texts: Vec<String>,
    frames: u64,
}

impl SummaryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sprites of one kind drawn in the current (or last presented) frame
    pub fn count(&self, sprite: Sprite) -> usize {
        self.counts.get(&sprite).copied().unwrap_or(0)
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for SummaryRenderer {
    fn clear(&mut self) {
        self.counts.clear();
        self.texts.clear();
    }

    fn draw_sprite(&mut self, sprite: Sprite, _rect: &Rect) {
        *self.counts.entry(sprite).or_insert(0) += 1;
    }

    fn draw_text(&mut self, text: &HudText) {
        self.texts.push(text.text.clone());
    }

    fn present(&mut self) {
        self.frames += 1;
        log::trace!(
            "Frame {}: {} obstacles, hud {:?}",
            self.frames,
            self.count(Sprite::Obstacle),
            self.texts
        );
    }
}
