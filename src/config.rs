//! Game configuration
//!
//! Every tunable of the simulation lives here. All sections default to the
//! constants in [`crate::consts`], so a JSON file only needs the keys it wants
//! to override. A config is validated once, up front; the simulation assumes
//! the numbers it receives are sane.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::platform::Viewport;

/// Jump arc parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Initial upward velocity (pixels/s)
    pub jump_height: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_height: JUMP_HEIGHT,
        }
    }
}

/// Score and speed progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    pub start_speed: f32,
    pub score_speed: f32,
    /// Score gained between two speed-ups
    pub speed_up_interval: f32,
    pub speed_step: f32,
    pub acceleration: f32,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            start_speed: START_SPEED,
            score_speed: SCORE_SPEED,
            speed_up_interval: SPEED_UP_INTERVAL,
            speed_step: SPEED_STEP,
            acceleration: ACCELERATION,
        }
    }
}

/// Obstacle spawning odds and limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Seconds that must pass between two spawns
    pub min_spawn_time: f64,
    pub spawn_threshold: f64,
    pub stack_threshold: f64,
    pub double_stack_threshold: f64,
    /// Cap on obstacles per stack
    pub max_obstacle_height: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            min_spawn_time: MIN_SPAWN_TIME,
            spawn_threshold: SPAWN_THRESHOLD,
            stack_threshold: STACK_THRESHOLD,
            double_stack_threshold: DOUBLE_STACK_THRESHOLD,
            max_obstacle_height: MAX_OBSTACLE_HEIGHT,
        }
    }
}

/// Sprite sizes and floor depth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Dirt rows under the grass row
    pub floor_height: u32,
    pub player: Vec2,
    pub obstacle: Vec2,
    pub background_tile: Vec2,
    pub grass_tile: Vec2,
    pub dirt_tile: Vec2,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let ground = Vec2::from(GROUND_TILE_SIZE);
        Self {
            floor_height: FLOOR_HEIGHT,
            player: Vec2::from(PLAYER_SIZE),
            obstacle: Vec2::from(OBSTACLE_SIZE),
            background_tile: Vec2::from(BACKGROUND_TILE_SIZE),
            grass_tile: ground,
            dirt_tile: ground,
        }
    }
}

impl LayoutConfig {
    /// Total pixel height of the floor (grass row plus dirt rows)
    pub fn floor_px(&self) -> f32 {
        self.grass_tile.y + self.floor_height as f32 * self.dirt_tile.y
    }
}

/// Display used to size the window, and loop pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: f32,
    pub height: f32,
    pub target_fps: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DISPLAY_SIZE.0,
            height: DISPLAY_SIZE.1,
            target_fps: TARGET_FPS,
        }
    }
}

/// Key bindings (raw key codes)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub jump_key: u32,
    pub mute_key: u32,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            jump_key: KEY_SPACE,
            mute_key: KEY_M,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub progression: ProgressionConfig,
    pub spawn: SpawnConfig,
    pub layout: LayoutConfig,
    pub display: DisplayConfig,
    pub controls: Controls,
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check every value the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("physics.gravity", self.physics.gravity as f64)?;
        positive("physics.jump_height", self.physics.jump_height as f64)?;

        positive("progression.start_speed", self.progression.start_speed as f64)?;
        positive("progression.score_speed", self.progression.score_speed as f64)?;
        positive(
            "progression.speed_up_interval",
            self.progression.speed_up_interval as f64,
        )?;
        positive("progression.speed_step", self.progression.speed_step as f64)?;

        positive("spawn.min_spawn_time", self.spawn.min_spawn_time)?;
        unit("spawn.spawn_threshold", self.spawn.spawn_threshold)?;
        unit("spawn.stack_threshold", self.spawn.stack_threshold)?;
        unit("spawn.double_stack_threshold", self.spawn.double_stack_threshold)?;
        positive(
            "spawn.max_obstacle_height",
            self.spawn.max_obstacle_height as f64,
        )?;

        let layout = &self.layout;
        size("layout.player", layout.player)?;
        size("layout.obstacle", layout.obstacle)?;
        size("layout.background_tile", layout.background_tile)?;
        size("layout.grass_tile", layout.grass_tile)?;
        size("layout.dirt_tile", layout.dirt_tile)?;
        if layout.grass_tile.x != layout.dirt_tile.x {
            return Err(ConfigError::MismatchedTiles {
                grass_width: layout.grass_tile.x,
                dirt_width: layout.dirt_tile.x,
            });
        }

        positive("display.width", self.display.width as f64)?;
        positive("display.height", self.display.height as f64)?;
        positive("display.target_fps", self.display.target_fps as f64)?;

        self.validate_viewport(&Viewport::for_display(
            self.display.width,
            self.display.height,
        ))
    }

    /// Check that the floor leaves room to play in the given viewport
    pub fn validate_viewport(&self, viewport: &Viewport) -> Result<(), ConfigError> {
        positive("viewport.width", viewport.width as f64)?;
        positive("viewport.height", viewport.height as f64)?;

        let floor_px = self.layout.floor_px();
        if floor_px + self.layout.player.y >= viewport.height {
            return Err(ConfigError::FloorTooTall {
                floor_px,
                viewport_height: viewport.height,
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails this too
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn unit(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            range: "[0, 1]",
        })
    }
}

fn size(name: &'static str, value: Vec2) -> Result<(), ConfigError> {
    positive(name, value.x.min(value.y) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.progression.start_speed, 7.0);
        assert_eq!(config.spawn.max_obstacle_height, 5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            GameConfig::from_json(r#"{ "spawn": { "max_obstacle_height": 3 } }"#).unwrap();
        assert_eq!(config.spawn.max_obstacle_height, 3);
        assert_eq!(config.spawn.min_spawn_time, MIN_SPAWN_TIME);
        assert_eq!(config.physics, PhysicsConfig::default());
    }

    #[test]
    fn test_rejects_non_positive_spawn_time() {
        let mut config = GameConfig::default();
        config.spawn.min_spawn_time = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "spawn.min_spawn_time",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_negative_speed_step() {
        let mut config = GameConfig::default();
        config.progression.speed_step = -10.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "progression.speed_step",
                ..
            })
        ));

        let json = r#"{ "progression": { "speed_step": -1.0 } }"#;
        assert!(GameConfig::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_zero_tile_width() {
        let mut config = GameConfig::default();
        config.layout.background_tile.x = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "layout.background_tile",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_threshold_above_one() {
        let mut config = GameConfig::default();
        config.spawn.stack_threshold = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_rejects_mismatched_ground_tiles() {
        let mut config = GameConfig::default();
        config.layout.dirt_tile = Vec2::new(30.0, 24.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MismatchedTiles { .. })
        ));
    }

    #[test]
    fn test_rejects_floor_taller_than_window() {
        let mut config = GameConfig::default();
        config.layout.floor_height = 100;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FloorTooTall { .. })
        ));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            GameConfig::load("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
