//! Simulation module
//!
//! All gameplay logic lives here. Given the same config, seed, inputs and
//! clock readings, a run replays exactly:
//! - Seeded RNG only
//! - Stable iteration order (obstacles stay in creation order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod geom;
pub mod obstacles;
pub mod physics;
pub mod state;
pub mod tick;
pub mod tiles;

pub use collision::first_collision;
pub use geom::Rect;
pub use obstacles::{Obstacle, SpawnSite, prune_offscreen, should_spawn, spawn_stacks};
pub use physics::{jump_arc, try_jump, update_player};
pub use state::{GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
pub use tiles::{Tile, TilePool, TileVariant};
