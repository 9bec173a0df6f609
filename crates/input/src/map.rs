//! Key mapping from terminal events to UI actions.

use crate::cursor::Direction;
use crate::types::Difficulty;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Move(Direction),
    Flip,
    TogglePause,
    Reset,
    ToggleSound,
    NewGame(Difficulty),
}

/// Map keyboard input to UI actions.
pub fn handle_key_event(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(UiAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(UiAction::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(UiAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(UiAction::Move(Direction::Down))
        }

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiAction::Flip),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(UiAction::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::Reset),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(UiAction::ToggleSound),

        // New game
        KeyCode::Char('1') => Some(UiAction::NewGame(Difficulty::Easy)),
        KeyCode::Char('2') => Some(UiAction::NewGame(Difficulty::Medium)),
        KeyCode::Char('3') => Some(UiAction::NewGame(Difficulty::Hard)),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(UiAction::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(UiAction::Move(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('K'))),
            Some(UiAction::Move(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(UiAction::Move(Direction::Right))
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), Some(UiAction::Flip));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(UiAction::Flip)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(UiAction::TogglePause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(UiAction::Reset)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('m'))),
            Some(UiAction::ToggleSound)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_new_game_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(UiAction::NewGame(Difficulty::Easy))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('3'))),
            Some(UiAction::NewGame(Difficulty::Hard))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
