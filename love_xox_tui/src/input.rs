//! Keyboard mapping.

use crossterm::event::KeyCode;
use love_xox::{Position, Step};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one cell.
    Cursor(Step),
    /// Play at the cursor.
    PlaceAtCursor,
    /// Play at a specific cell (digit keys 1-9).
    Place(Position),
    /// Clear the board.
    Reset,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action, if it has one.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Cursor(Step::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Cursor(Step::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Cursor(Step::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Cursor(Step::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| (digit as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map(Action::Place),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Place(Position::TopLeft)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Place(Position::BottomRight)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_arrows_and_commands() {
        assert_eq!(action_for(KeyCode::Up), Some(Action::Cursor(Step::Up)));
        assert_eq!(action_for(KeyCode::Enter), Some(Action::PlaceAtCursor));
        assert_eq!(action_for(KeyCode::Char('r')), Some(Action::Reset));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Tab), None);
    }
}
