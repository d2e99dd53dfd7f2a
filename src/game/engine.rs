use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    action::{Direction, Event, Velocity},
    config::{ConfigError, GameConfig},
    food::place_food,
    grid::Grid,
    state::{Difficulty, GameState, Phase, Snake},
};

/// Sound cue raised by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Eat,
    GameOver,
}

/// Result of applying one event
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// The state after the event
    pub state: GameState,
    /// Cues to play, in the order they happened
    pub cues: Vec<Cue>,
}

impl StepResult {
    fn quiet(state: GameState) -> Self {
        Self {
            state,
            cues: Vec::new(),
        }
    }
}

/// The game engine that handles all game logic.
///
/// `apply` is a transition function: it reads a state and an event and
/// returns the next state, leaving the input untouched. The engine itself
/// only holds the configuration and the random source.
pub struct GameEngine<R: Rng = StdRng> {
    config: GameConfig,
    grid: Grid,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing randomness from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        let grid = config.grid()?;
        Ok(Self { config, grid, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The menu state a session opens with
    pub fn initial_state(&self) -> GameState {
        GameState::new(self.grid)
    }

    /// Apply one event to `state`
    pub fn apply(&mut self, state: &GameState, event: Event) -> StepResult {
        match (state.phase, event) {
            (_, Event::Start) => StepResult::quiet(self.start(state)),
            (_, Event::ReturnToMenu) => {
                tracing::info!(score = state.score, "returned to menu");
                StepResult::quiet(GameState {
                    phase: Phase::Menu,
                    ..state.clone()
                })
            }
            (Phase::Running, Event::Pause) => {
                tracing::info!(score = state.score, "paused");
                StepResult::quiet(GameState {
                    phase: Phase::Paused,
                    ..state.clone()
                })
            }
            (Phase::Paused, Event::Resume) => {
                tracing::info!("resumed");
                StepResult::quiet(GameState {
                    phase: Phase::Running,
                    ..state.clone()
                })
            }
            (phase, Event::IncreaseDifficulty) if phase.accepts_difficulty_change() => {
                StepResult::quiet(self.with_difficulty(state, state.difficulty.increased()))
            }
            (phase, Event::DecreaseDifficulty) if phase.accepts_difficulty_change() => {
                StepResult::quiet(self.with_difficulty(state, state.difficulty.decreased()))
            }
            (Phase::Running, Event::Steer(direction)) => {
                StepResult::quiet(Self::steered(state, direction))
            }
            (Phase::Running, Event::Tick) => self.tick(state),
            (Phase::Running, Event::ClockTick) => StepResult::quiet(GameState {
                counter: state.counter + 1,
                ..state.clone()
            }),
            _ => StepResult::quiet(state.clone()),
        }
    }

    /// Fresh game: one-cell snake at a random cell heading right, food placed,
    /// score and timer cleared. Difficulty carries over.
    fn start(&mut self, state: &GameState) -> GameState {
        let snake = Snake::new(self.grid.random_cell(&mut self.rng));
        let food = place_food(&snake, &self.grid, &mut self.rng);
        tracing::info!(
            head = ?snake.head(),
            difficulty = state.difficulty.level(),
            "game started"
        );

        GameState {
            phase: Phase::Running,
            snake,
            velocity: Direction::Right.into(),
            food,
            score: 0,
            counter: 0,
            difficulty: state.difficulty,
            grid: self.grid,
        }
    }

    fn with_difficulty(&self, state: &GameState, difficulty: Difficulty) -> GameState {
        if difficulty != state.difficulty {
            tracing::info!(
                level = difficulty.level(),
                tick_ms = self.config.tick_interval(difficulty).as_millis() as u64,
                "difficulty changed"
            );
        }
        GameState {
            difficulty,
            ..state.clone()
        }
    }

    fn steered(state: &GameState, direction: Direction) -> GameState {
        // Reversing into the neck is allowed; the next tick ends the game.
        GameState {
            velocity: Velocity::from(direction),
            ..state.clone()
        }
    }

    /// One simulation step.
    ///
    /// A move into any current segment ends the game and leaves the board as
    /// it was. Otherwise the head advances, and reaching the food grows the
    /// snake by keeping its tail.
    fn tick(&mut self, state: &GameState) -> StepResult {
        if state.velocity.is_zero() {
            return StepResult::quiet(state.clone());
        }

        let new_head = state.snake.advance(state.velocity, &self.grid);
        if state.snake.collides_with(new_head) {
            tracing::info!(
                score = state.score,
                length = state.snake.len(),
                "game over"
            );
            return StepResult {
                state: GameState {
                    phase: Phase::GameOver,
                    ..state.clone()
                },
                cues: vec![Cue::GameOver],
            };
        }

        let ate_food = state.food == Some(new_head);
        let snake = state.snake.step(state.velocity, &self.grid, ate_food);

        if !ate_food {
            return StepResult::quiet(GameState {
                snake,
                ..state.clone()
            });
        }

        let score = state.score + self.config.food_reward;
        tracing::debug!(score, length = snake.len(), "food eaten");

        let food = place_food(&snake, &self.grid, &mut self.rng);
        let phase = if food.is_some() {
            Phase::Running
        } else {
            tracing::info!(score, length = snake.len(), "board filled");
            Phase::GameOver
        };

        StepResult {
            state: GameState {
                phase,
                snake,
                food,
                score,
                ..state.clone()
            },
            cues: vec![Cue::Eat],
        }
    }
}
