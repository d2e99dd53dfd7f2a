use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::{Direction, Event, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed an event to the game
    Game(Event),
    /// Leave the program
    Exit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a key press to an action, given the phase the game is in
    pub fn handle_key_event(&self, key: KeyEvent, phase: Phase) -> KeyAction {
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Exit;
        }

        let event = match key.code {
            KeyCode::Esc => return KeyAction::Exit,

            // Steering - Arrow keys
            KeyCode::Up => steer(phase, Direction::Up),
            KeyCode::Down => steer(phase, Direction::Down),
            KeyCode::Left => steer(phase, Direction::Left),
            KeyCode::Right => steer(phase, Direction::Right),

            KeyCode::Char('p') | KeyCode::Char('P') => match phase {
                Phase::Running => Some(Event::Pause),
                Phase::Paused => Some(Event::Resume),
                _ => None,
            },

            // Difficulty
            KeyCode::Char('+') if phase.accepts_difficulty_change() => {
                Some(Event::IncreaseDifficulty)
            }
            KeyCode::Char('-') if phase.accepts_difficulty_change() => {
                Some(Event::DecreaseDifficulty)
            }

            KeyCode::Char('s') | KeyCode::Char('S') => Some(Event::Start),
            KeyCode::Char('q') => Some(Event::ReturnToMenu),

            _ => None,
        };

        event.map_or(KeyAction::None, KeyAction::Game)
    }
}

fn steer(phase: Phase, direction: Direction) -> Option<Event> {
    (phase == Phase::Running).then_some(Event::Steer(direction))
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
