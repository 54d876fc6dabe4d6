//! Axis-aligned rectangles in screen space
//!
//! Screen space has y growing downward, so a rectangle's `bottom` is its
//! larger y edge and "stacking on top" means subtracting a height.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle stored as top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    /// Build a rectangle from its left and bottom edges
    pub fn from_left_bottom(left: f32, bottom: f32, size: Vec2) -> Self {
        Self {
            min: Vec2::new(left, bottom - size.y),
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn set_left(&mut self, left: f32) {
        self.min.x = left;
    }

    /// Move vertically so the bottom edge sits at `bottom`
    pub fn set_bottom(&mut self, bottom: f32) {
        self.min.y = bottom - self.size.y;
    }

    pub fn shift_x(&mut self, dx: f32) {
        self.min.x += dx;
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
