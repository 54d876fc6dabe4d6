//! Jump arc and horizontal scrolling
//!
//! Vertical motion is a closed-form parabola in the time since the jump
//! started. Horizontal motion is one Euler step per frame: scroll distances
//! are pixels per frame, so the game runs faster on a faster frame rate.

use super::obstacles::Obstacle;
use super::state::Player;
use crate::config::PhysicsConfig;

/// Player bottom edge `t` seconds into a jump.
///
/// Starts one pixel above `start_y`, rises while `jump_height > gravity * t`,
/// then falls back.
#[inline]
pub fn jump_arc(t: f32, gravity: f32, jump_height: f32, start_y: f32) -> f32 {
    0.5 * gravity * t * t - jump_height * t + (start_y - 1.0)
}

/// Seconds until the arc returns to `start_y - 1`
pub fn airtime(gravity: f32, jump_height: f32) -> f32 {
    2.0 * jump_height / gravity
}

/// Whether the player is on (or below) the ground
#[inline]
pub fn is_grounded(player: &Player, start_y: f32) -> bool {
    player.rect.bottom() >= start_y
}

/// Try to start a jump at `now`.
///
/// Only a grounded player can jump. Returns the new jump start time, with the
/// player nudged one pixel up so the arc takes over on the next update.
pub fn try_jump(player: &mut Player, start_y: f32, now: f64) -> Option<f64> {
    if !is_grounded(player, start_y) {
        return None;
    }
    player.rect.set_bottom(player.rect.bottom() - 1.0);
    Some(now)
}

/// Advance the player's vertical position
pub fn update_player(player: &mut Player, physics: &PhysicsConfig, start_y: f32, start_jump: f64, now: f64) {
    if is_grounded(player, start_y) {
        player.rect.set_bottom(start_y);
        return;
    }

    let t = (now - start_jump).max(0.0) as f32;
    let bottom = jump_arc(t, physics.gravity, physics.jump_height, start_y);
    // Landing clamps immediately so the player never sinks into the floor
    player.rect.set_bottom(bottom.min(start_y));
}

/// Move every obstacle left by `speed`
pub fn scroll_obstacles(obstacles: &mut [Obstacle], speed: f32) {
    for obstacle in obstacles {
        obstacle.rect.shift_x(-speed);
    }
}
