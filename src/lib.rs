//! Hop Runner - a side-scrolling obstacle jumper
//!
//! Core modules:
//! - `sim`: Simulation (jump physics, tile scrolling, obstacle stacks, collisions, game state)
//! - `config`: Serde-backed tuning with validation
//! - `platform`: Clock, display and input abstractions
//! - `audio`: Sound effect dispatch and mute handling
//! - `renderer`: Draw-call interface and HUD layout
//! - `game`: The poll/update/render shell tying it all together

pub mod audio;
pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;
pub use game::Game;

/// Default tuning constants
pub mod consts {
    /// Scroll speed when a run starts (pixels per frame)
    pub const START_SPEED: f32 = 7.0;
    /// Score gained per running frame
    pub const SCORE_SPEED: f32 = 1.0;
    /// Score that must be gained for each speed increase
    pub const SPEED_UP_INTERVAL: f32 = 200.0;
    /// Speed added at every speed-up
    pub const SPEED_STEP: f32 = 1.0;
    /// Unused by the frame-coupled update, kept as a tunable
    pub const ACCELERATION: f32 = 0.005;

    /// Downward acceleration during a jump (pixels/s²)
    pub const GRAVITY: f32 = 7000.0;
    /// Initial upward jump velocity (pixels/s)
    pub const JUMP_HEIGHT: f32 = 1500.0;

    /// Dirt rows beneath the grass row
    pub const FLOOR_HEIGHT: u32 = 7;
    /// Tallest obstacle stack
    pub const MAX_OBSTACLE_HEIGHT: u32 = 5;
    /// Minimum seconds between two spawns
    pub const MIN_SPAWN_TIME: f64 = 0.5;

    /// A spawn happens when a draw exceeds this (~2% per eligible frame)
    pub const SPAWN_THRESHOLD: f64 = 0.98;
    /// Each extra stack level needs a draw above this
    pub const STACK_THRESHOLD: f64 = 0.7;
    /// A second stack next to the first needs a draw above this
    pub const DOUBLE_STACK_THRESHOLD: f64 = 0.5;

    /// Sprite sizes (width, height)
    pub const PLAYER_SIZE: (f32, f32) = (40.0, 40.0);
    pub const OBSTACLE_SIZE: (f32, f32) = (32.0, 32.0);
    pub const BACKGROUND_TILE_SIZE: (f32, f32) = (256.0, 360.0);
    pub const GROUND_TILE_SIZE: (f32, f32) = (24.0, 24.0);

    /// Display assumed when no platform query is available
    pub const DISPLAY_SIZE: (f32, f32) = (1920.0, 1080.0);
    pub const TARGET_FPS: u32 = 60;

    /// Key codes for the two game keys
    pub const KEY_SPACE: u32 = 32;
    pub const KEY_M: u32 = 109;

    /// HUD text margin in pixels
    pub const FONT_MARGIN: f32 = 32.0;
}
