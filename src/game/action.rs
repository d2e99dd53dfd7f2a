/// Direction the snake can be steered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Per-tick displacement of the head.
///
/// Either a unit vector along one axis or zero, which is what a fresh game
/// holds before the first start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { dx: 0, dy: 0 };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<Direction> for Velocity {
    fn from(direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { dx, dy }
    }
}

/// Discrete inputs to the game state machine.
///
/// Key presses produce the control events; the two timers produce `Tick`
/// and `ClockTick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Reset everything and begin a new game
    Start,
    Pause,
    Resume,
    IncreaseDifficulty,
    DecreaseDifficulty,
    /// Point the snake in a new direction
    Steer(Direction),
    ReturnToMenu,
    /// One simulation step
    Tick,
    /// One elapsed second
    ClockTick,
}
