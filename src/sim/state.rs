//! Game state and core simulation types
//!
//! Everything a run needs lives in [`GameState`]; subsystems receive it (or
//! the pieces they need) explicitly. Nothing here is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use super::obstacles::Obstacle;
use super::physics;
use super::tiles::TilePool;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::platform::Viewport;

/// Run phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first jump press; nothing moves
    NotStarted,
    /// Scrolling, scoring and spawning
    Running,
}

/// Something the outside world may want to react to (sound, logs, UI)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began
    Started,
    /// The jump key was pressed during a run, grounded or not
    JumpPressed,
    /// The player left the ground
    Jumped,
    /// Scroll speed went up
    SpeedUp { speed: f32 },
    /// One spawn happened; heights of each stack built
    Spawned { heights: Vec<u32> },
    /// The player hit an obstacle and the run was reset
    Crashed { score: f32, high_score: f32 },
}

/// The player's sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
}

impl Player {
    /// Standing on the ground at the fixed horizontal spot
    pub fn grounded(viewport: &Viewport, size: Vec2, start_y: f32) -> Self {
        let left = viewport.width / 2.0 - viewport.width / 5.0;
        Self {
            rect: Rect::from_left_bottom(left, start_y, size),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(super) rng: Pcg32,
    pub config: GameConfig,
    pub viewport: Viewport,
    pub phase: GamePhase,
    /// Floor and obstacle scroll speed (pixels per frame)
    pub speed: f32,
    pub score: f32,
    /// Best score seen by this process
    pub high_score: f32,
    /// Score gained since the last speed-up
    speed_up_progress: f32,
    /// Ground level: bottom edge of a standing player
    pub start_y: f32,
    /// Clock time the current jump began
    pub start_jump: f64,
    /// Clock time of the last obstacle spawn
    pub last_spawn: f64,
    /// Frames simulated
    pub frame: u64,
    pub player: Player,
    /// Live obstacles, in creation order
    pub obstacles: Vec<Obstacle>,
    pub background: TilePool,
    pub floor: TilePool,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    pub(super) next_id: u32,
}

impl GameState {
    /// Create a state for `viewport`, rejecting a config the simulation can't run
    pub fn new(config: GameConfig, viewport: Viewport, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        config.validate_viewport(&viewport)?;

        let start_y = viewport.height - config.layout.floor_px();
        let player = Player::grounded(&viewport, config.layout.player, start_y);

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            phase: GamePhase::NotStarted,
            speed: 0.0,
            score: 0.0,
            high_score: 0.0,
            speed_up_progress: 0.0,
            start_y,
            start_jump: 0.0,
            last_spawn: 0.0,
            frame: 0,
            player,
            obstacles: Vec::new(),
            background: TilePool::default(),
            floor: TilePool::default(),
            events: Vec::new(),
            next_id: 1,
            config,
        };
        // Lays out both tile pools
        state.reset();
        Ok(state)
    }

    /// 0 before a run starts, 1 while running
    pub fn time_scale(&self) -> f32 {
        match self.phase {
            GamePhase::NotStarted => 0.0,
            GamePhase::Running => 1.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Background scrolls at half speed
    pub fn background_speed(&self) -> f32 {
        self.speed / 2.0
    }

    /// Back to the not-started state with a fresh floor and background.
    /// The high score survives.
    pub fn reset(&mut self) {
        self.phase = GamePhase::NotStarted;
        self.speed = 0.0;
        self.score = 0.0;
        self.speed_up_progress = 0.0;
        self.obstacles.clear();

        let layout = &self.config.layout;
        self.background = TilePool::background(&self.viewport, layout.background_tile);
        self.floor = TilePool::floor(
            &self.viewport,
            layout.grass_tile,
            layout.dirt_tile,
            layout.floor_height,
        );
        self.player.rect.set_bottom(self.start_y);
    }

    /// The jump key: starts a run, or jumps if one is under way
    pub fn press_jump(&mut self, now: f64) {
        match self.phase {
            GamePhase::NotStarted => {
                self.phase = GamePhase::Running;
                self.speed = self.config.progression.start_speed;
                self.events.push(GameEvent::Started);
                log::info!("Run started (seed {}, frame {})", self.seed, self.frame);
            }
            GamePhase::Running => {
                self.events.push(GameEvent::JumpPressed);
                if let Some(start) = physics::try_jump(&mut self.player, self.start_y, now) {
                    self.start_jump = start;
                    self.events.push(GameEvent::Jumped);
                }
            }
        }
    }

    /// Accrue score for one frame and apply any speed-ups it earned
    pub fn advance_progress(&mut self) {
        let progression = &self.config.progression;
        let gained = progression.score_speed * self.time_scale();
        if gained <= 0.0 {
            return;
        }

        self.score += gained;
        self.high_score = self.high_score.max(self.score);

        self.speed_up_progress += gained;
        while self.speed_up_progress >= progression.speed_up_interval {
            self.speed_up_progress -= progression.speed_up_interval;
            self.speed += progression.speed_step;
            log::debug!("Speed up to {} at score {}", self.speed, self.score);
            self.events.push(GameEvent::SpeedUp { speed: self.speed });
        }
    }

    /// End the run after a collision
    pub fn crash(&mut self) {
        let score = self.score;
        log::info!(
            "Crashed at score {} (high score {}) after {} frames",
            score as u64,
            self.high_score as u64,
            self.frame
        );
        self.reset();
        self.events.push(GameEvent::Crashed {
            score,
            high_score: self.high_score,
        });
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
