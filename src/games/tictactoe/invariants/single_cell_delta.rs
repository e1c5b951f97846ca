//! Single-cell delta invariant: each step fills exactly one empty square.

use super::super::{History, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square, and that
/// square goes from empty to occupied.
///
/// Squares are never cleared or overwritten.
pub struct SingleCellDeltaInvariant;

impl Invariant<History> for SingleCellDeltaInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            match after.diff(before).as_slice() {
                [pos] => before.get(*pos) == Square::Empty && after.get(*pos) != Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each move fills exactly one empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player, Position};

    #[test]
    fn test_single_move_holds() {
        let start = Board::new();
        let next = start.with_mark(Position::Center, Player::X);
        assert!(SingleCellDeltaInvariant::holds(&History::from_snapshots(vec![start, next])));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let start = Board::new();
        assert!(!SingleCellDeltaInvariant::holds(&History::from_snapshots(vec![start, start])));
    }

    #[test]
    fn test_overwrite_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let overwritten = first.with_mark(Position::Center, Player::O);
        let history = History::from_snapshots(vec![Board::new(), first, overwritten]);
        assert!(!SingleCellDeltaInvariant::holds(&history));
    }
}
