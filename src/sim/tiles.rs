//! Infinitely scrolling tile strips
//!
//! A pool is laid out once per run to cover the viewport plus one tile of
//! overflow on each side. Scrolling never allocates: a tile that leaves on the
//! left is moved `columns * tile_width` to the right, behind the last tile of
//! its row.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::platform::Viewport;

/// Visual variant of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileVariant {
    Background,
    /// Top row of the floor
    Grass,
    Dirt,
}

/// One tile of a strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub rect: Rect,
    pub variant: TileVariant,
}

/// A fixed set of tiles cycled horizontally
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TilePool {
    tiles: Vec<Tile>,
    tile_width: f32,
    /// Tiles per row, used as the wrap distance
    columns: usize,
}

impl TilePool {
    /// Single background row hanging from the top of the viewport
    pub fn background(viewport: &Viewport, tile: Vec2) -> Self {
        let mut pool = Self::empty(tile.x);
        pool.columns = pool.lay_row(viewport.width, tile, tile.y, TileVariant::Background);
        pool
    }

    /// Floor: one grass row on top of `floor_height` dirt rows, resting on the
    /// bottom of the viewport
    pub fn floor(viewport: &Viewport, grass: Vec2, dirt: Vec2, floor_height: u32) -> Self {
        debug_assert_eq!(grass.x, dirt.x, "ground tiles must share a width");

        let mut pool = Self::empty(grass.x);
        let grass_bottom = viewport.height - floor_height as f32 * dirt.y;
        pool.columns = pool.lay_row(viewport.width, grass, grass_bottom, TileVariant::Grass);

        // Deepest dirt row last
        for row in (0..floor_height).rev() {
            let bottom = viewport.height - row as f32 * dirt.y;
            let laid = pool.lay_row(viewport.width, dirt, bottom, TileVariant::Dirt);
            debug_assert_eq!(laid, pool.columns);
        }
        pool
    }

    fn empty(tile_width: f32) -> Self {
        Self {
            tiles: Vec::new(),
            tile_width,
            columns: 0,
        }
    }

    /// Lay one row right to left from `viewport_width + width` down to
    /// `-width`, returning how many tiles it took
    fn lay_row(&mut self, viewport_width: f32, size: Vec2, bottom: f32, variant: TileVariant) -> usize {
        let start = viewport_width + size.x;
        let mut count = 0;
        loop {
            let left = start - count as f32 * size.x;
            if left < -size.x {
                break;
            }
            self.tiles.push(Tile {
                rect: Rect::from_left_bottom(left, bottom, size),
                variant,
            });
            count += 1;
        }
        count
    }

    /// Move every tile left by `speed`, recycling the ones that fell off
    pub fn scroll(&mut self, speed: f32) {
        let wrap = self.columns as f32 * self.tile_width;
        for tile in &mut self.tiles {
            tile.rect.shift_x(-speed);
            while tile.rect.right() < 0.0 && wrap > 0.0 {
                tile.rect.shift_x(wrap);
            }
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn tile_width(&self) -> f32 {
        self.tile_width
    }
}
