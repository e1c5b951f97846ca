//! Empty-start invariant: every history begins with a blank board.

use super::super::History;
use super::Invariant;

/// Invariant: the first snapshot has no occupied squares.
pub struct EmptyStartInvariant;

impl Invariant<History> for EmptyStartInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().first().is_some_and(|board| board.is_blank())
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(EmptyStartInvariant::holds(&History::new()));
    }

    #[test]
    fn test_marked_start_violates() {
        let start = Board::new().with_mark(Position::Center, Player::X);
        assert!(!EmptyStartInvariant::holds(&History::from_snapshots(vec![start])));
    }

    #[test]
    fn test_no_snapshots_violates() {
        assert!(!EmptyStartInvariant::holds(&History::from_snapshots(Vec::new())));
    }
}
