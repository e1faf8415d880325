use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of cells along each grid axis
    pub grid_count: usize,
    /// Score at which the round is won
    pub victory_threshold: u32,
    /// Cells per tick the pursuer advances (0.5 = every other tick)
    pub pursuer_speed: f32,
    /// Simulation ticks per second
    pub tick_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_count: 30,
            victory_threshold: 10,
            pursuer_speed: 0.5,
            tick_rate: 15,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(grid_count: usize) -> Self {
        Self {
            grid_count,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }
}
