//! Per-frame simulation step
//!
//! Order within a frame: input, progression, motion, spawning and pruning,
//! then collision. A collision resets the run at most once per frame.

use super::collision::first_collision;
use super::obstacles::{SpawnSite, prune_offscreen, should_spawn, spawn_stacks};
use super::physics::{self, airtime};
use super::state::{GameEvent, GameState};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump/start key pressed this frame
    pub jump: bool,
    /// Idle/demo mode - the game plays itself
    pub idle_mode: bool,
}

/// Advance the game by one frame at clock time `now` (seconds)
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) {
    let jump = input.jump || (input.idle_mode && autopilot_wants_jump(state));
    if jump {
        state.press_jump(now);
    }

    state.frame += 1;
    state.advance_progress();

    // Motion
    physics::update_player(
        &mut state.player,
        &state.config.physics,
        state.start_y,
        state.start_jump,
        now,
    );
    let background_speed = state.background_speed();
    state.background.scroll(background_speed);
    state.floor.scroll(state.speed);
    physics::scroll_obstacles(&mut state.obstacles, state.speed);

    // Spawning and pruning
    if state.is_running() && should_spawn(&mut state.rng, &state.config.spawn, now, state.last_spawn) {
        state.last_spawn = now;
        let site = SpawnSite {
            left: state.viewport.width,
            ground_y: state.start_y,
            block: state.config.layout.obstacle,
        };
        let heights = spawn_stacks(
            &mut state.rng,
            &state.config.spawn,
            &site,
            &mut state.next_id,
            &mut state.obstacles,
        );
        log::debug!("Spawned stacks {:?} at frame {}", heights, state.frame);
        state.events.push(GameEvent::Spawned { heights });
    }
    if let Some(gone) = prune_offscreen(&mut state.obstacles) {
        log::trace!("Pruned obstacle {}", gone.id);
    }

    // Collision
    if first_collision(&state.player.rect, &state.obstacles).is_some() {
        state.crash();
    }
}

/// Demo controller: start the run, then jump so the apex lands over the next
/// obstacle ahead
fn autopilot_wants_jump(state: &GameState) -> bool {
    if !state.is_running() {
        return true;
    }
    if !physics::is_grounded(&state.player, state.start_y) {
        return false;
    }

    let player = &state.player.rect;
    let Some(next) = state.obstacles.iter().find(|o| o.rect.right() > player.left()) else {
        return false;
    };

    let arc = &state.config.physics;
    let frames_to_apex =
        airtime(arc.gravity, arc.jump_height) * state.config.display.target_fps as f32 / 2.0;
    let lead = state.speed * frames_to_apex;
    let gap = (next.rect.left() + next.rect.width() / 2.0) - (player.left() + player.width() / 2.0);

    gap > 0.0 && gap <= lead
}
