use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in cells, wall ring included
    pub grid_width: u16,
    /// Board height in cells, wall ring included
    pub grid_height: u16,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Milliseconds between simulation ticks
    pub tick_millis: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_snake_length: 3,
            tick_millis: 100,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom board size
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}
