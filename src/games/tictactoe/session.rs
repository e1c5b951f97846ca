//! Game session: history, current move pointer, and display order.

use super::error::GameError;
use super::history::History;
use super::rules::{self, Evaluation};
use super::view::{DisplayOrder, MoveDescriptor, Status, ViewState};
use super::{Board, Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Why a `play_move` call left the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The square already holds a mark.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// The viewed board already has a winner.
    #[display("game already won by {}", _0)]
    GameDecided(Player),
}

/// What a `play_move` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    /// A new snapshot was recorded.
    Placed {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
        /// History index of the new snapshot.
        move_number: usize,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// True if a snapshot was recorded.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// A single local game with time travel.
///
/// Owns the history and the pointer to the move on display. Turn, winner,
/// status, and the move list are derived from those two on every call.
/// Not meant for concurrent use: callers serialize operations per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    history: History,
    current_move: usize,
    display_order: DisplayOrder,
}

impl GameSession {
    /// Creates a session at the start of a game, moves listed ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_display_order(DisplayOrder::default())
    }

    /// Creates a session at the start of a game with the given list order.
    #[instrument]
    pub fn with_display_order(display_order: DisplayOrder) -> Self {
        info!(%display_order, "Creating new game session");
        Self {
            history: History::new(),
            current_move: 0,
            display_order,
        }
    }

    /// Restores a session from an existing history.
    ///
    /// The history is taken as-is; corrupted entries surface as
    /// `InvariantViolation` when the move list is derived or a move is
    /// played.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `current_move` is not a valid history index.
    #[instrument(skip(history), fields(len = history.len()))]
    pub fn from_history(
        history: History,
        current_move: usize,
        display_order: DisplayOrder,
    ) -> Result<Self, GameError> {
        if current_move >= history.len() {
            return Err(GameError::move_out_of_range(current_move, history.len()));
        }
        Ok(Self {
            history,
            current_move,
            display_order,
        })
    }

    /// Plays the current player's mark at square `index` (0-8).
    ///
    /// Playing on an occupied square, or on a board that already has a
    /// winner, changes nothing and returns [`MoveOutcome::Ignored`].
    /// Playing after jumping back discards the moves that followed the
    /// viewed one.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `index` is not a square, and `InvariantViolation` if
    /// the history kept up to the current move is corrupted. Neither
    /// changes the session.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play_move(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let position = Position::from_index(index).ok_or_else(|| {
            debug!(index, "Square index out of range");
            GameError::square_out_of_range(index)
        })?;
        let board = self.current_board();

        if let Some(winner) = rules::evaluate(&board).winner() {
            debug!(%winner, "Ignoring move on decided board");
            return Ok(MoveOutcome::Ignored(IgnoreReason::GameDecided(winner)));
        }
        if !board.is_empty(position) {
            debug!(%position, "Ignoring move on occupied square");
            return Ok(MoveOutcome::Ignored(IgnoreReason::SquareOccupied(position)));
        }

        let player = self.to_move();
        let next = board.with_mark(position, player);
        let mut history = self.history.clone();
        let move_number = history.branch_and_push(self.current_move, next);
        history.verify().inspect_err(|err| {
            warn!(error = %err, "Refusing move on corrupted history");
        })?;
        self.history = history;
        self.current_move = move_number;

        info!(%player, %position, move_number, "Move recorded");
        Ok(MoveOutcome::Placed {
            player,
            position,
            move_number,
        })
    }

    /// Views the board as it was after `move_number` moves.
    ///
    /// History is untouched; jumping to a finished position is allowed.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if no such move exists.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), GameError> {
        if move_number >= self.history.len() {
            debug!(len = self.history.len(), "Jump target out of range");
            return Err(GameError::move_out_of_range(move_number, self.history.len()));
        }
        self.current_move = move_number;
        info!(move_number, "Jumped to move");
        Ok(())
    }

    /// Flips the move list between ascending and descending.
    #[instrument(skip(self))]
    pub fn toggle_display_order(&mut self) -> DisplayOrder {
        self.display_order = self.display_order.toggle();
        debug!(display_order = %self.display_order, "Display order toggled");
        self.display_order
    }

    /// Builds everything a renderer needs for the current move.
    ///
    /// # Errors
    ///
    /// `InvariantViolation` if the history was corrupted.
    #[instrument(skip(self))]
    pub fn view_state(&self) -> Result<ViewState, GameError> {
        Ok(ViewState::new(
            self.current_board(),
            self.evaluation(),
            self.to_move(),
            self.status(),
            self.moves()?,
            self.display_order,
            self.current_move,
        ))
    }

    /// The move list in display order.
    ///
    /// # Errors
    ///
    /// `InvariantViolation` if two consecutive snapshots do not differ in
    /// exactly one square.
    #[instrument(skip(self))]
    pub fn moves(&self) -> Result<Vec<MoveDescriptor>, GameError> {
        let ascending = (0..self.history.len())
            .map(|move_number| {
                let position = self.history.changed_square(move_number)?;
                Ok(MoveDescriptor::new(
                    move_number,
                    position,
                    move_number == self.current_move,
                ))
            })
            .collect::<Result<Vec<_>, GameError>>()?;
        Ok(self.display_order.apply(ascending))
    }

    /// The snapshot currently on display.
    pub fn current_board(&self) -> Board {
        self.history.snapshots()[self.current_move]
    }

    /// Winner and winning line for the board on display.
    pub fn evaluation(&self) -> Evaluation {
        rules::evaluate(&self.current_board())
    }

    /// Player on turn at the current move: X on even moves, O on odd.
    pub fn to_move(&self) -> Player {
        Player::for_move_count(self.current_move)
    }

    /// Status line for the board on display.
    pub fn status(&self) -> Status {
        match self.evaluation().winner() {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(self.to_move()),
        }
    }

    /// The full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the move on display.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Active list order.
    pub fn display_order(&self) -> DisplayOrder {
        self.display_order
    }

    /// Runs every history invariant.
    ///
    /// # Errors
    ///
    /// `InvariantViolation` naming the failed properties.
    pub fn check_invariants(&self) -> Result<(), GameError> {
        self.history.verify()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn play_all(session: &mut GameSession, indices: &[usize]) {
        for &index in indices {
            assert!(session.play_move(index).expect("in range").is_placed());
        }
    }

    #[test]
    fn test_first_move_is_x() {
        let mut session = GameSession::new();
        let outcome = session.play_move(4).expect("in range");

        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                player: Player::X,
                position: Position::Center,
                move_number: 1,
            }
        );
        assert_eq!(session.current_move(), 1);
        assert_eq!(session.to_move(), Player::O);
        assert_eq!(
            session.current_board().get(Position::Center),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut session = GameSession::new();
        play_all(&mut session, &[4]);
        let before = session.clone();

        let outcome = session.play_move(4).expect("in range");
        assert_eq!(
            outcome,
            MoveOutcome::Ignored(IgnoreReason::SquareOccupied(Position::Center))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_decided_board_is_ignored() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 3, 1, 4, 2]);
        let before = session.clone();

        let outcome = session.play_move(8).expect("in range");
        assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::GameDecided(Player::X)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_out_of_range_square() {
        let mut session = GameSession::new();
        assert_eq!(session.play_move(9), Err(GameError::square_out_of_range(9)));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0]);
        assert_eq!(session.jump_to(2), Err(GameError::move_out_of_range(2, 2)));
        assert_eq!(session.current_move(), 1);
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 4, 8]);
        session.jump_to(1).expect("in range");

        assert_eq!(session.history().len(), 4);
        assert_eq!(session.to_move(), Player::O);
    }

    #[test]
    fn test_play_after_jump_branches() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 4, 8]);
        session.jump_to(1).expect("in range");
        play_all(&mut session, &[2]);

        assert_eq!(session.history().len(), 3);
        assert_eq!(session.current_move(), 2);
        assert_eq!(
            session.current_board().get(Position::TopRight),
            Square::Occupied(Player::O)
        );
        assert!(session.current_board().is_empty(Position::Center));
        assert!(session.check_invariants().is_ok());
    }

    #[test]
    fn test_full_board_without_winner_keeps_reporting_turn() {
        let mut session = GameSession::new();
        // X O X / X O O / O X X
        play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(session.evaluation(), Evaluation::NoWinner);
        assert_eq!(session.status(), Status::NextPlayer(Player::O));
        for index in 0..9 {
            assert!(!session.play_move(index).expect("in range").is_placed());
        }
    }

    #[test]
    fn test_moves_mark_current() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 4]);
        session.jump_to(1).expect("in range");

        let current: Vec<_> = session
            .moves()
            .expect("valid history")
            .iter()
            .map(|m| *m.is_current())
            .collect();
        assert_eq!(current, vec![false, true, false]);
    }

    #[test]
    fn test_corrupted_history_fails_move_list() {
        let start = Board::new();
        let history = History::from_snapshots(vec![start, start]);
        let session =
            GameSession::from_history(history, 0, DisplayOrder::Ascending).expect("in range");

        assert!(matches!(
            session.view_state(),
            Err(GameError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_move_on_corrupted_history_is_refused() {
        let start = Board::new();
        let history = History::from_snapshots(vec![start, start]);
        let mut session =
            GameSession::from_history(history, 1, DisplayOrder::Ascending).expect("in range");
        let before = session.clone();

        assert!(matches!(
            session.play_move(0),
            Err(GameError::InvariantViolation(_))
        ));
        assert_eq!(session, before);
    }

    #[test]
    fn test_move_after_jump_drops_corrupted_future() {
        let b0 = Board::new();
        let b1 = b0.with_mark(Position::TopLeft, Player::X);
        let history = History::from_snapshots(vec![b0, b1, b1]);
        let mut session =
            GameSession::from_history(history, 1, DisplayOrder::Ascending).expect("in range");

        assert!(session.play_move(4).expect("in range").is_placed());
        assert!(session.check_invariants().is_ok());
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_view_status_matches_session_status() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 3, 1, 4, 2]);
        for move_number in 0..session.history().len() {
            session.jump_to(move_number).expect("in range");
            let view = session.view_state().expect("valid history");
            assert_eq!(*view.status(), session.status());
        }
    }

    #[test]
    fn test_from_history_checks_pointer() {
        assert_eq!(
            GameSession::from_history(History::new(), 1, DisplayOrder::Ascending),
            Err(GameError::move_out_of_range(1, 1))
        );
    }
}
