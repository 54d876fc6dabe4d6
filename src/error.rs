//! Configuration errors
//!
//! The simulation itself never fails at runtime. Everything that can go wrong
//! is caught when a [`crate::GameConfig`] is loaded or validated.

use std::fmt;

/// Rejected or unreadable configuration
#[derive(Debug)]
pub enum ConfigError {
    /// A value that must be strictly positive was zero or negative
    NonPositive {
        /// Dotted path of the field (for logging)
        name: &'static str,
        value: f64,
    },
    /// A probability threshold outside `[0, 1]`
    OutOfRange {
        name: &'static str,
        value: f64,
        range: &'static str,
    },
    /// Ground tiles of differing widths cannot share one wrap width
    MismatchedTiles { grass_width: f32, dirt_width: f32 },
    /// The floor is taller than the window, leaving no room to play
    FloorTooTall { floor_px: f32, viewport_height: f32 },
    /// Config file could not be read
    Io(std::io::Error),
    /// Config file is not valid JSON for [`crate::GameConfig`]
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { name, value } => {
                write!(f, "'{}' must be greater than zero (got {})", name, value)
            }
            ConfigError::OutOfRange { name, value, range } => {
                write!(f, "'{}' must be within {} (got {})", name, range, value)
            }
            ConfigError::MismatchedTiles {
                grass_width,
                dirt_width,
            } => write!(
                f,
                "grass and dirt tiles must share a width (grass {}, dirt {})",
                grass_width, dirt_width
            ),
            ConfigError::FloorTooTall {
                floor_px,
                viewport_height,
            } => write!(
                f,
                "floor is {}px tall but the window is only {}px high",
                floor_px, viewport_height
            ),
            ConfigError::Io(e) => write!(f, "failed to read config: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
