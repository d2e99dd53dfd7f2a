//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! State changes go through [`GameEngine::apply`], which maps a state and an
//! event to the next state.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Event, Velocity};
pub use config::{ConfigError, GameConfig};
pub use engine::{Cue, GameEngine, StepResult};
pub use food::place_food;
pub use grid::Grid;
pub use state::{Difficulty, GameState, Phase, Position, Snake};
