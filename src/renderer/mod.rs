//! Rendering interface
//!
//! The core only describes a frame: which sprite goes where, and which HUD
//! text to show. Drawing it is up to a [`Renderer`] implementation.

pub mod hud;
pub mod summary;

pub use hud::{Anchor, HudText, hud_lines};
pub use summary::SummaryRenderer;

use crate::sim::{GameState, Rect, TileVariant};

/// Which image to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Grass,
    Dirt,
    Obstacle,
    Player,
}

impl From<TileVariant> for Sprite {
    fn from(variant: TileVariant) -> Self {
        match variant {
            TileVariant::Background => Sprite::Background,
            TileVariant::Grass => Sprite::Grass,
            TileVariant::Dirt => Sprite::Dirt,
        }
    }
}

/// Draw target for one frame
pub trait Renderer {
    fn clear(&mut self);
    fn draw_sprite(&mut self, sprite: Sprite, rect: &Rect);
    fn draw_text(&mut self, text: &HudText);
    /// Show the finished frame
    fn present(&mut self);
}

/// Draw a full frame: background, floor, obstacles, player, then HUD
pub fn render_frame<R: Renderer>(renderer: &mut R, state: &GameState) {
    renderer.clear();

    for tile in state.background.tiles().iter().chain(state.floor.tiles()) {
        renderer.draw_sprite(tile.variant.into(), &tile.rect);
    }
    for obstacle in &state.obstacles {
        renderer.draw_sprite(Sprite::Obstacle, &obstacle.rect);
    }
    renderer.draw_sprite(Sprite::Player, &state.player.rect);

    for line in hud_lines(state) {
        renderer.draw_text(&line);
    }

    renderer.present();
}
