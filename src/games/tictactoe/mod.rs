//! Tic-tac-toe with a navigable move history.
//!
//! - [`rules`] evaluates a single board snapshot.
//! - [`GameSession`] owns the history and the move on display, and derives
//!   everything else from them.

mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;
mod view;

pub use error::GameError;
pub use history::History;
pub use position::Position;
pub use rules::{evaluate, Evaluation};
pub use session::{GameSession, IgnoreReason, MoveOutcome};
pub use types::{Board, Player, Square};
pub use view::{DisplayOrder, MoveDescriptor, Status, ViewState};
