//! Append-only history of board snapshots.

use super::error::GameError;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered board snapshots, one per move, starting with the empty board.
///
/// Entry `m` is the board after `m` moves. A history built through
/// `GameSession::play_move` always satisfies [`TicTacToeInvariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Wraps existing snapshots without checking them.
    ///
    /// Use [`History::verify`] before trusting the result.
    pub fn from_snapshots(snapshots: Vec<Board>) -> Self {
        Self { snapshots }
    }

    /// Number of snapshots (moves played plus one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false for histories built by a session.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot after `move_number` moves.
    pub fn get(&self, move_number: usize) -> Option<&Board> {
        self.snapshots.get(move_number)
    }

    /// All snapshots in move order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Drops every snapshot after `at`, then appends `board`.
    ///
    /// Returns the move number of the appended snapshot.
    #[instrument(skip(self, board), fields(len = self.snapshots.len()))]
    pub(crate) fn branch_and_push(&mut self, at: usize, board: Board) -> usize {
        let discarded = self.snapshots.len().saturating_sub(at + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.snapshots.truncate(at + 1);
        self.snapshots.push(board);
        self.snapshots.len() - 1
    }

    /// Locates the square filled by move `move_number`.
    ///
    /// Returns `None` for move 0, which fills nothing.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if the move does not exist, and `InvariantViolation` if
    /// the snapshot does not differ from its predecessor in exactly one
    /// square.
    #[instrument(skip(self))]
    pub fn changed_square(&self, move_number: usize) -> Result<Option<Position>, GameError> {
        let current = self
            .get(move_number)
            .ok_or_else(|| GameError::move_out_of_range(move_number, self.len()))?;
        if move_number == 0 {
            return Ok(None);
        }
        let previous = &self.snapshots[move_number - 1];

        match current.diff(previous).as_slice() {
            [pos] => Ok(Some(*pos)),
            changed => Err(GameError::InvariantViolation(format!(
                "move {} changed {} squares, expected exactly 1",
                move_number,
                changed.len()
            ))),
        }
    }

    /// Checks every history invariant.
    ///
    /// # Errors
    ///
    /// `InvariantViolation` listing each property that failed.
    #[instrument(skip(self))]
    pub fn verify(&self) -> Result<(), GameError> {
        TicTacToeInvariants::check_all(self).map_err(|violations| {
            let descriptions: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            GameError::InvariantViolation(descriptions.join("; "))
        })
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
