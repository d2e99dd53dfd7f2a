//! Torus Snake - single-player Snake on a wrap-around board
//!
//! This library provides:
//! - Core game logic as a pure state machine (game module)
//! - Periodic timers that drive the simulation and the clock (scheduler module)
//! - Terminal adapters for keys, drawing and sound cues (input, render, audio modules)
//! - The interactive session that ties them together (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod scheduler;
