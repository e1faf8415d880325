use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Command, Direction};

/// Maps raw terminal key events to game commands.
///
/// The mapping is stateless; whether a command means anything in the current
/// mode is the session's call. Unmapped keys produce nothing.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Command> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Some(Command::Turn(Direction::Up)),
            KeyCode::Down => Some(Command::Turn(Direction::Down)),
            KeyCode::Left => Some(Command::Turn(Direction::Left)),
            KeyCode::Right => Some(Command::Turn(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Turn(Direction::Up)),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Turn(Direction::Down)),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::Turn(Direction::Left)),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Turn(Direction::Right)),

            // Screen flow
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Start),
            KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::Help),
            KeyCode::Esc => Some(Command::Cancel),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),

            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
