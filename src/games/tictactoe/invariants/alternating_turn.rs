//! Alternating turn invariant: X and O take turns, X first.

use super::super::{History, Player};
use super::Invariant;

/// Invariant: the mark added at step `i` belongs to the player on turn
/// after `i - 1` moves.
///
/// Steps that do not add exactly one mark are left to
/// [`SingleCellDeltaInvariant`](super::SingleCellDeltaInvariant).
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| match pair[1].diff(&pair[0]).as_slice() {
                [pos] => pair[1].get(*pos).player() == Some(Player::for_move_count(step)),
                _ => true,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}
