//! First-class invariants over the move history.
//!
//! Invariants are logical properties that every history built by
//! `GameSession::play_move` satisfies. They are testable independently and
//! are checked before each recorded move is committed.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_turn;
pub mod empty_start;
pub mod single_cell_delta;

pub use alternating_turn::AlternatingTurnInvariant;
pub use empty_start::EmptyStartInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

/// All history invariants as a composable set.
pub type TicTacToeInvariants = (
    EmptyStartInvariant,
    SingleCellDeltaInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, GameSession, History, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let session = GameSession::new();
        assert!(TicTacToeInvariants::check_all(session.history()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut session = GameSession::new();
        for index in [0, 4, 2] {
            session.play_move(index).expect("in range");
        }
        assert!(TicTacToeInvariants::check_all(session.history()).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        // Two marks appear in one step, and the start is not blank.
        let start = Board::new().with_mark(Position::Center, Player::O);
        let next = start
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopRight, Player::X);
        let history = History::from_snapshots(vec![start, next]);

        let violations = TicTacToeInvariants::check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (EmptyStartInvariant, SingleCellDeltaInvariant);
        assert!(TwoInvariants::check_all(&History::new()).is_ok());
    }
}
