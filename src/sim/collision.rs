//! Player/obstacle collision detection

use super::geom::Rect;
use super::obstacles::Obstacle;

/// Index of the first obstacle (in list order) overlapping `player`
pub fn first_collision(player: &Rect, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles.iter().position(|o| player.intersects(&o.rect))
}
