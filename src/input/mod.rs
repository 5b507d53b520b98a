//! Key mapping from terminal events to player intents.
//!
//! Arrow keys plus vim/wasd synonyms. Quit and restart are adapter-level
//! concerns, so they get predicates instead of intents; the core never sees
//! them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Intent;

/// Map keyboard input to a player intent.
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Intent::Left),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Intent::Right),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Intent::SoftDrop),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Intent::Rotate),

        _ => None,
    }
}

/// Check if key should start a fresh game.
pub fn is_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
