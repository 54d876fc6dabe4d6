//! Monotonic time and frame pacing

use std::time::{Duration, Instant};

/// Time source for the game loop
pub trait Clock {
    /// Seconds since the clock was created. Never decreases.
    fn now(&self) -> f64;

    /// Block until the next frame is due at `target_fps`
    fn tick(&mut self, target_fps: u32);
}

/// Wall-clock time backed by [`Instant`]
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
    last_frame: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            origin: now,
            last_frame: now,
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    fn tick(&mut self, target_fps: u32) {
        let frame = Duration::from_secs_f64(1.0 / target_fps.max(1) as f64);
        let elapsed = self.last_frame.elapsed();
        if let Some(remaining) = frame.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        }
        self.last_frame = Instant::now();
    }
}

/// Clock that only moves when told to; each `tick` advances one frame
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self { now: start }
    }

    pub fn advance(&mut self, secs: f64) {
        self.now += secs.max(0.0);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now
    }

    fn tick(&mut self, target_fps: u32) {
        self.advance(1.0 / target_fps.max(1) as f64);
    }
}
