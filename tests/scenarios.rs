//! End-to-end checks of the tick rules through the public engine API
//!
//! Each test builds a running game on a 10x10 grid, applies events, and
//! inspects the resulting state and sound cues.

use rand::SeedableRng;
use rand::rngs::StdRng;
use torus_snake::game::{
    Cue, Direction, Event, GameConfig, GameEngine, GameState, Phase, Position, Snake,
};

fn engine(seed: u64) -> GameEngine {
    GameEngine::with_rng(GameConfig::small(), StdRng::seed_from_u64(seed)).unwrap()
}

fn running(
    engine: &GameEngine,
    cells: &[(i32, i32)],
    heading: Direction,
    food: (i32, i32),
) -> GameState {
    GameState {
        phase: Phase::Running,
        snake: Snake::from_segments(cells.iter().map(|&(x, y)| Position::new(x, y)).collect())
            .unwrap(),
        velocity: heading.into(),
        food: Some(Position::new(food.0, food.1)),
        ..engine.initial_state()
    }
}

#[test]
fn eating_grows_the_snake_and_scores_ten() {
    let mut engine = engine(1);
    let state = running(&engine, &[(5, 5)], Direction::Right, (6, 5));

    let result = engine.apply(&state, Event::Tick);
    let next = result.state;

    assert_eq!(result.cues, vec![Cue::Eat]);
    assert_eq!(next.score, 10);
    assert_eq!(
        next.snake.segments(),
        &[Position::new(6, 5), Position::new(5, 5)]
    );
    let food = next.food.unwrap();
    assert!(next.grid.contains(food));
    assert!(!next.snake.collides_with(food));
}

#[test]
fn head_wraps_off_the_right_edge() {
    let mut engine = engine(2);
    let state = running(&engine, &[(9, 5)], Direction::Right, (2, 2));

    let next = engine.apply(&state, Event::Tick).state;

    assert_eq!(next.snake.head(), Position::new(0, 5));
    assert_eq!(next.snake.len(), 1);
}

#[test]
fn reversing_into_the_neck_ends_the_game() {
    let mut engine = engine(3);
    let state = running(&engine, &[(5, 5), (4, 5), (3, 5)], Direction::Right, (8, 8));

    let steered = engine.apply(&state, Event::Steer(Direction::Left)).state;
    let result = engine.apply(&steered, Event::Tick);

    assert_eq!(result.state.phase, Phase::GameOver);
    assert_eq!(result.cues, vec![Cue::GameOver]);
    assert_eq!(result.state.snake, state.snake);

    // Further ticks change nothing and stay silent
    let after = engine.apply(&result.state, Event::Tick);
    assert_eq!(after.state, result.state);
    assert!(after.cues.is_empty());
}

#[test]
fn plain_moves_keep_length() {
    let mut engine = engine(4);
    let mut state = running(&engine, &[(5, 5), (4, 5), (3, 5)], Direction::Right, (0, 9));

    for direction in [Direction::Down, Direction::Down, Direction::Right, Direction::Up] {
        state = engine.apply(&state, Event::Steer(direction)).state;
        let expected_head = state.grid.wrap(state.snake.head().moved_by_velocity(direction.into()));

        state = engine.apply(&state, Event::Tick).state;

        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), expected_head);
    }
}

#[test]
fn full_game_lifecycle() {
    let mut engine = engine(5);
    let mut state = engine.initial_state();
    assert_eq!(state.phase, Phase::Menu);

    state = engine.apply(&state, Event::IncreaseDifficulty).state;
    state = engine.apply(&state, Event::Start).state;
    assert_eq!(state.phase, Phase::Running);
    assert_eq!(state.difficulty.level(), 1);

    state = engine.apply(&state, Event::ClockTick).state;
    state = engine.apply(&state, Event::Pause).state;
    state = engine.apply(&state, Event::ClockTick).state;
    assert_eq!(state.counter, 1);

    state = engine.apply(&state, Event::Resume).state;
    state = engine.apply(&state, Event::ReturnToMenu).state;
    assert_eq!(state.phase, Phase::Menu);

    state = engine.apply(&state, Event::Start).state;
    assert_eq!(state.counter, 0);
    assert_eq!(state.score, 0);
}
