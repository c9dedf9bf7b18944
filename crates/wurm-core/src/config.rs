//! Game construction parameters.

use crate::error::{WurmError, WurmResult};
use crate::game::WIN_SCORE;

/// Smallest allowed board side, wall border included.
pub const MIN_BOARD: i32 = 10;
/// Largest allowed board side, wall border included.
pub const MAX_BOARD: i32 = 100;

/// Configuration for a new game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Board width in cells, wall border included.
    pub width: i32,
    /// Board height in cells, wall border included.
    pub height: i32,
    /// Scatter obstacles across the interior at construction.
    pub obstacles: bool,
    /// RNG seed for food and obstacle placement.
    pub seed: u64,
    /// Score at which the game is won.
    pub win_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            obstacles: false,
            seed: 42,
            win_score: WIN_SCORE,
        }
    }
}

impl GameConfig {
    /// Set the board size in cells, wall border included.
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Enable or disable obstacle generation.
    pub fn with_obstacles(mut self, obstacles: bool) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Set the placement RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the victory score threshold.
    pub fn with_win_score(mut self, win_score: u32) -> Self {
        self.win_score = win_score;
        self
    }

    /// Check that the board fits the allowed size range.
    pub fn validate(&self) -> WurmResult<()> {
        let allowed = MIN_BOARD..=MAX_BOARD;
        if allowed.contains(&self.width) && allowed.contains(&self.height) {
            Ok(())
        } else {
            Err(WurmError::Board {
                width: self.width,
                height: self.height,
            })
        }
    }
}
