//! Non-interactive replay of a move sequence.

use crate::games::tictactoe::{GameError, GameSession, MoveOutcome, ViewState};
use tracing::{info, instrument, warn};

/// Feeds `moves` through a fresh session, then optionally jumps and
/// toggles the list order.
///
/// Moves that land on an occupied square or a decided board are skipped,
/// exactly as in interactive play.
#[instrument]
pub fn replay(
    moves: &[usize],
    jump: Option<usize>,
    toggle_order: bool,
) -> Result<GameSession, GameError> {
    let mut session = GameSession::new();
    for &index in moves {
        if let MoveOutcome::Ignored(reason) = session.play_move(index)? {
            warn!(index, %reason, "Move skipped");
        }
    }
    if let Some(move_number) = jump {
        session.jump_to(move_number)?;
    }
    if toggle_order {
        session.toggle_display_order();
    }
    info!(
        moves = session.history().len() - 1,
        current_move = session.current_move(),
        "Replay finished"
    );
    Ok(session)
}

/// Plain-text rendering of a view: board, status, and move list.
pub fn render_text(view: &ViewState) -> String {
    let mut out = view.board().display();
    out.push_str("\n\n");
    out.push_str(&view.status().to_string());
    if !view.evaluation().line().is_empty() {
        let cells: Vec<_> = view
            .evaluation()
            .line()
            .iter()
            .map(|pos| pos.to_index().to_string())
            .collect();
        out.push_str(&format!(" (line {})", cells.join(",")));
    }
    out.push('\n');
    for descriptor in view.moves() {
        let marker = if *descriptor.is_current() { '*' } else { '-' };
        out.push_str(&format!("{} {}\n", marker, descriptor.label()));
    }
    out
}
