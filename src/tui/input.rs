//! Keyboard mapping for the terminal UI.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    Cursor(KeyCode),
    /// Play the square under the cursor.
    PlayCursor,
    /// Play a specific square.
    Play(Position),
    /// Move the history selection toward the top of the list.
    SelectPrevious,
    /// Move the history selection toward the bottom of the list.
    SelectNext,
    /// Jump to the selected history entry.
    JumpToSelected,
    /// Flip the move list order.
    ToggleOrder,
    /// Leave the game.
    Quit,
}

/// Decodes a key press. Unbound keys return `None`.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::Cursor(key)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Action::Play),
        KeyCode::Char('[') => Some(Action::SelectPrevious),
        KeyCode::Char(']') => Some(Action::SelectNext),
        KeyCode::Char('g') => Some(Action::JumpToSelected),
        KeyCode::Char('o') => Some(Action::ToggleOrder),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = cursor.coordinates();
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_coordinates(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
    }

    #[test]
    fn test_digits_map_to_squares() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Play(Position::TopLeft)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Play(Position::BottomRight)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }
}
