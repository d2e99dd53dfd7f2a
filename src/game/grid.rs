use rand::Rng;

use super::config::ConfigError;
use super::state::Position;

/// Largest grid whose bordered board still fits a terminal's u16
/// coordinates at two columns per cell
pub const MAX_COLS: usize = (u16::MAX as usize - 2) / 2;
pub const MAX_ROWS: usize = u16::MAX as usize - 2;

/// Logical cell grid derived from a pixel board and a cell scale.
///
/// The grid is toroidal: `wrap` sends anything that leaves one edge to the
/// opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cols: usize,
    rows: usize,
}

impl Grid {
    /// Create a grid with the given number of columns and rows
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Derive the grid from a board of `width` x `height` pixels.
    ///
    /// Both dimensions must be exact multiples of `scale`.
    pub fn from_board(width: u32, height: u32, scale: u32) -> Result<Self, ConfigError> {
        if scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        for (dimension, value) in [("width", width), ("height", height)] {
            if value % scale != 0 {
                return Err(ConfigError::NotCellAligned {
                    dimension,
                    value,
                    scale,
                });
            }
        }

        let grid = Self::new((width / scale) as usize, (height / scale) as usize);
        if grid.cells() < 2 {
            return Err(ConfigError::BoardTooSmall {
                cols: grid.cols,
                rows: grid.rows,
            });
        }
        if grid.cols > MAX_COLS || grid.rows > MAX_ROWS {
            return Err(ConfigError::BoardTooLarge {
                cols: grid.cols,
                rows: grid.rows,
            });
        }
        Ok(grid)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells
    pub fn cells(&self) -> usize {
        self.cols * self.rows
    }

    /// Check if a position lies on the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && (pos.x as usize) < self.cols && pos.y >= 0 && (pos.y as usize) < self.rows
    }

    /// Fold a position that stepped off an edge back onto the opposite edge
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(wrap_axis(pos.x, self.cols), wrap_axis(pos.y, self.rows))
    }

    /// Uniformly random cell
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position::new(
            rng.gen_range(0..self.cols) as i32,
            rng.gen_range(0..self.rows) as i32,
        )
    }

    /// All cells in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows)
            .flat_map(move |y| (0..self.cols).map(move |x| Position::new(x as i32, y as i32)))
    }
}

fn wrap_axis(value: i32, len: usize) -> i32 {
    if value < 0 {
        len as i32 - 1
    } else if value as usize >= len {
        0
    } else {
        value
    }
}
