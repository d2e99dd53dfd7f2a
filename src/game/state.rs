use super::action::Velocity;
use super::grid::Grid;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position by one velocity step, without wrapping
    pub fn moved_by_velocity(&self, velocity: Velocity) -> Self {
        self.moved_by(velocity.dx, velocity.dy)
    }
}

/// The snake, as an ordered run of cells with the head first.
///
/// A snake always has at least one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Position>,
}

impl Snake {
    /// A one-segment snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from head-first segments; `None` if there are none
    pub fn from_segments(body: Vec<Position>) -> Option<Self> {
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Where the head lands after one step at `velocity`
    pub fn advance(&self, velocity: Velocity, grid: &Grid) -> Position {
        grid.wrap(self.head().moved_by_velocity(velocity))
    }

    /// Check if position is occupied by any segment, head included
    pub fn collides_with(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// The snake after one step: new head prepended, tail dropped unless it grew
    pub fn step(&self, velocity: Velocity, grid: &Grid, grew: bool) -> Snake {
        let mut body = Vec::with_capacity(self.body.len() + 1);
        body.push(self.advance(velocity, grid));
        body.extend_from_slice(&self.body);
        if !grew {
            body.pop();
        }
        Snake { body }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (never true for a constructed snake)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Menu,
    Running,
    Paused,
    GameOver,
}

impl Phase {
    /// Phases in which the difficulty may be changed
    pub fn accepts_difficulty_change(&self) -> bool {
        matches!(self, Phase::Menu | Phase::GameOver)
    }
}

/// Difficulty level, clamped to `0..=Difficulty::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MAX: u8 = 2;

    /// Create a difficulty, clamping anything above the maximum
    pub fn new(level: u8) -> Self {
        Self(level.min(Self::MAX))
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    /// One level harder, stopping at the maximum
    pub fn increased(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// One level easier, stopping at zero
    pub fn decreased(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub phase: Phase,
    pub snake: Snake,
    pub velocity: Velocity,
    /// `None` until the first game places food
    pub food: Option<Position>,
    pub score: u32,
    /// Seconds spent running in the current game
    pub counter: u32,
    pub difficulty: Difficulty,
    pub grid: Grid,
}

impl GameState {
    /// The state shown before any game starts
    pub fn new(grid: Grid) -> Self {
        Self {
            phase: Phase::Menu,
            snake: Snake::new(Position::new(0, 0)),
            velocity: Velocity::ZERO,
            food: None,
            score: 0,
            counter: 0,
            difficulty: Difficulty::default(),
            grid,
        }
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.collides_with(pos)
    }
}
