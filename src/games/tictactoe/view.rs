//! Read-only view of a session for rendering.
//!
//! Everything here is derived on demand from the history and the current
//! move pointer. Nothing is cached between operations.

use super::rules::Evaluation;
use super::{Board, Player, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Order in which the move list is presented.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplayOrder {
    /// Oldest move first.
    #[default]
    #[strum(serialize = "ascending")]
    Ascending,
    /// Newest move first.
    #[strum(serialize = "descending")]
    Descending,
}

impl DisplayOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Reorders items that arrive in ascending order.
    pub fn apply<T>(self, mut items: Vec<T>) -> Vec<T> {
        if self == Self::Descending {
            items.reverse();
        }
        items
    }
}

/// One-line game status.
///
/// There is no draw status: a full board with no winner keeps reporting
/// the player on turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// The viewed board has a winner.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Nobody has won yet.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, new)]
pub struct MoveDescriptor {
    /// Index into history.
    move_number: usize,
    /// Square filled by this move; `None` for the start of the game.
    position: Option<Position>,
    /// Whether this is the move currently on display.
    is_current: bool,
}

impl MoveDescriptor {
    /// `(row, col)` of the filled square.
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        self.position.map(Position::coordinates)
    }

    /// Text for this entry.
    ///
    /// The current move reads as a status line; every other move reads as
    /// a jump action.
    pub fn label(&self) -> String {
        match (self.is_current, self.coordinates()) {
            (true, Some((row, col))) => {
                format!("You are at move {} ({},{})", self.move_number, row, col)
            }
            (true, None) => format!("You are at move {}", self.move_number),
            (false, Some((row, col))) => {
                format!("Go to move #{} ({},{})", self.move_number, row, col)
            }
            (false, None) => "Go to game start".to_string(),
        }
    }

    /// True if activating this entry should trigger a jump.
    pub fn is_actionable(&self) -> bool {
        !self.is_current
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ViewState {
    /// Board at the current move.
    board: Board,
    /// Winner and winning line for that board.
    evaluation: Evaluation,
    /// Player whose turn it is at the current move.
    to_move: Player,
    /// Status line.
    status: Status,
    /// Move list, ordered per `display_order`.
    moves: Vec<MoveDescriptor>,
    /// Active display order.
    display_order: DisplayOrder,
    /// Index of the move on display.
    current_move: usize,
}

impl ViewState {
    pub(crate) fn new(
        board: Board,
        evaluation: Evaluation,
        to_move: Player,
        status: Status,
        moves: Vec<MoveDescriptor>,
        display_order: DisplayOrder,
        current_move: usize,
    ) -> Self {
        Self {
            board,
            evaluation,
            to_move,
            status,
            moves,
            display_order,
            current_move,
        }
    }

    /// True if `pos` should be highlighted as part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.evaluation.contains(pos)
    }
}
