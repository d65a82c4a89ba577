use macroquad::prelude::KeyCode;

use crate::grid::Direction;

/// Something the state machine reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Begin,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Game(Command),
    Quit,
}

/// Keys polled every frame, in the order their presses are applied.
pub const WATCHED_KEYS: [KeyCode; 12] = [
    KeyCode::Up,
    KeyCode::W,
    KeyCode::Down,
    KeyCode::S,
    KeyCode::Left,
    KeyCode::A,
    KeyCode::Right,
    KeyCode::D,
    KeyCode::Space,
    KeyCode::Enter,
    KeyCode::Escape,
    KeyCode::Q,
];

pub fn action_for(key: KeyCode) -> Option<KeyAction> {
    let action = match key {
        KeyCode::Up | KeyCode::W => KeyAction::Game(Command::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::S => KeyAction::Game(Command::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::A => KeyAction::Game(Command::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::D => KeyAction::Game(Command::Turn(Direction::Right)),
        KeyCode::Space | KeyCode::Enter => KeyAction::Game(Command::Begin),
        KeyCode::Escape | KeyCode::Q => KeyAction::Quit,
        _ => return None,
    };
    Some(action)
}
