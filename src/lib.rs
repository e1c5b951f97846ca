//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure win detection over one board snapshot
//! - **Session**: append-only history, the move on display, and the list
//!   order, with turn, status, and move list derived on demand
//! - **TUI**: terminal renderer that re-reads the session view each frame
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameSession, Player, Status};
//!
//! # fn example() -> Result<(), timetravel_tictactoe::GameError> {
//! let mut session = GameSession::new();
//! for index in [0, 4, 1, 3, 8] {
//!     session.play_move(index)?;
//! }
//! assert_eq!(session.status(), Status::NextPlayer(Player::O));
//!
//! session.jump_to(0)?;
//! assert_eq!(session.status().to_string(), "Next player: X");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod games;
mod replay;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, DisplayOrder, Evaluation, GameError, GameSession, History, IgnoreReason,
    MoveDescriptor, MoveOutcome, Player, Position, Square, Status, ViewState, evaluate,
    invariants, rules,
};

// Crate-level exports - Front ends
pub use replay::{render_text, replay};
pub use tui::run_tui;
