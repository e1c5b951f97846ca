//! Errors raised by the game session.

/// Error returned by session operations.
///
/// Occupied squares and finished games are not errors: `play_move` treats
/// them as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// An index fell outside its valid range.
    #[display("{} index {} out of range (expected 0..{})", what, index, len)]
    OutOfRange {
        /// What was being indexed ("square" or "move").
        what: &'static str,
        /// The offending index.
        index: usize,
        /// Exclusive upper bound.
        len: usize,
    },

    /// The history no longer satisfies its construction invariants.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

impl GameError {
    /// Out-of-range square index for `play_move`.
    pub fn square_out_of_range(index: usize) -> Self {
        Self::OutOfRange {
            what: "square",
            index,
            len: 9,
        }
    }

    /// Out-of-range history index for `jump_to`.
    pub fn move_out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange {
            what: "move",
            index,
            len,
        }
    }
}
