//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::Serialize;
use tracing::instrument;

/// The eight winning lines, in scan order.
///
/// Rows top-to-bottom, then columns left-to-right, then the main diagonal
/// and the anti-diagonal. The first completed line found wins.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Evaluation {
    /// No line is complete.
    NoWinner,
    /// `player` holds all three squares of `line`.
    Winner {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: [Position; 3],
    },
}

impl Evaluation {
    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Evaluation::NoWinner => None,
            Evaluation::Winner { player, .. } => Some(*player),
        }
    }

    /// Returns the winning line, or an empty slice when nobody has won.
    pub fn line(&self) -> &[Position] {
        match self {
            Evaluation::NoWinner => &[],
            Evaluation::Winner { line, .. } => line,
        }
    }

    /// True if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line().contains(&pos)
    }

    /// True if a player has won.
    pub fn is_decided(&self) -> bool {
        self.winner().is_some()
    }
}

/// Evaluates a board for a winner.
///
/// Total over any board, including ones unreachable in real play: the
/// first complete line in [`LINES`] order is reported.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Evaluation::Winner { player, line };
        }
    }

    Evaluation::NoWinner
}
