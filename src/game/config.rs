use std::time::Duration;

use thiserror::Error;

use super::grid::Grid;
use super::state::Difficulty;

/// Pixels per grid cell
pub const DEFAULT_SCALE: u32 = 20;
/// Tick period at difficulty 0, in milliseconds
pub const DEFAULT_BASE_SPEED_MS: u64 = 100;
/// Tick period reduction per difficulty level, in milliseconds
pub const DEFAULT_DIFFICULTY_STEP_MS: u64 = 20;
/// Points awarded per food eaten
pub const DEFAULT_FOOD_REWARD: u32 = 10;

pub const DEFAULT_BOARD_WIDTH: u32 = 600;
pub const DEFAULT_BOARD_HEIGHT: u32 = 400;

/// Reasons a configuration cannot be played
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell scale must be non-zero")]
    ZeroScale,
    #[error("board {dimension} of {value}px is not a multiple of the {scale}px cell scale")]
    NotCellAligned {
        dimension: &'static str,
        value: u32,
        scale: u32,
    },
    #[error("a {cols}x{rows} grid leaves no room for food")]
    BoardTooSmall { cols: usize, rows: usize },
    #[error("a {cols}x{rows} grid is too large to draw")]
    BoardTooLarge { cols: usize, rows: usize },
    #[error("base speed of {base_ms}ms leaves no tick period at difficulty {level}")]
    TickTooShort { base_ms: u64, level: u8 },
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board width in pixels
    pub board_width: u32,
    /// Board height in pixels
    pub board_height: u32,
    /// Pixels per cell
    pub scale: u32,
    /// Tick period at difficulty 0
    pub base_speed: Duration,
    /// How much faster each difficulty level ticks
    pub difficulty_step: Duration,
    /// Score added per food eaten
    pub food_reward: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            scale: DEFAULT_SCALE,
            base_speed: Duration::from_millis(DEFAULT_BASE_SPEED_MS),
            difficulty_step: Duration::from_millis(DEFAULT_DIFFICULTY_STEP_MS),
            food_reward: DEFAULT_FOOD_REWARD,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size in pixels
    pub fn new(board_width: u32, board_height: u32) -> Self {
        Self {
            board_width,
            board_height,
            ..Default::default()
        }
    }

    /// A 10x10 grid for testing
    pub fn small() -> Self {
        Self::new(10 * DEFAULT_SCALE, 10 * DEFAULT_SCALE)
    }

    /// Validate the configuration and derive the logical grid
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        let grid = Grid::from_board(self.board_width, self.board_height, self.scale)?;

        let slowest_cut = self.difficulty_step * u32::from(Difficulty::MAX);
        if self.base_speed <= slowest_cut {
            return Err(ConfigError::TickTooShort {
                base_ms: self.base_speed.as_millis() as u64,
                level: Difficulty::MAX,
            });
        }

        Ok(grid)
    }

    /// Simulation tick period for a difficulty level
    pub fn tick_interval(&self, difficulty: Difficulty) -> Duration {
        self.base_speed
            .saturating_sub(self.difficulty_step * u32::from(difficulty.level()))
    }
}
