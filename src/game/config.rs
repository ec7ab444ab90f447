use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: i32,
    /// Height of the game grid
    pub grid_height: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Points awarded per food eaten
    pub food_reward: u32,

    // Frame pacing
    /// Base wait between ticks, in milliseconds
    pub base_wait_ms: u64,
    /// Starting value of the speed ramp, in milliseconds
    pub speed_constant_ms: u64,
    /// Lower bound on the tick interval, in milliseconds
    pub min_wait_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 22,
            initial_snake_length: 3,
            food_reward: 85,
            base_wait_ms: 20,
            speed_constant_ms: 60,
            min_wait_ms: 5,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Time to wait between ticks at the given score.
    ///
    /// The interval shrinks by 1ms per 100 points, so the game speeds up
    /// as the score climbs. Clamped at `min_wait_ms` so it can never reach
    /// zero however high the score goes.
    pub fn wait_interval(&self, score: u32) -> Duration {
        let ramp = self.speed_constant_ms as i64 - (score / 100) as i64;
        let wait = self.base_wait_ms as i64 + ramp;
        Duration::from_millis(wait.max(self.min_wait_ms as i64) as u64)
    }
}
