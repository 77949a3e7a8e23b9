use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::snake::Direction;

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    NextLevel,
    PrevLevel,
    Steer(Direction),
}

/// Drains every queued terminal event without blocking and reports the
/// last key press that maps to a command. Mashing two directions between
/// ticks turns the snake once, along the later one.
pub fn poll_command() -> io::Result<Option<Command>> {
    let mut last = None;
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if let Some(command) = decode(key) {
                last = Some(command);
            }
        }
    }
    Ok(last)
}

fn decode(key: KeyEvent) -> Option<Command> {
    // Some backends report key releases as separate events.
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char('n') => Some(Command::NextLevel),
        KeyCode::Char('p') => Some(Command::PrevLevel),
        KeyCode::Up => Some(Command::Steer(Direction::Up)),
        KeyCode::Down => Some(Command::Steer(Direction::Down)),
        KeyCode::Left => Some(Command::Steer(Direction::Left)),
        KeyCode::Right => Some(Command::Steer(Direction::Right)),
        _ => None,
    }
}
