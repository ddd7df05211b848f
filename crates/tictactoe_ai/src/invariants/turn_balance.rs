//! Turn balance invariant: X is never behind O and never more than one ahead.

use super::Invariant;
use crate::types::{Board, Cell};

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X opens and turns alternate, so X has either the same number of marks as
/// O or exactly one more.
pub struct TurnBalanceInvariant;

impl Invariant<Board> for TurnBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Cell::X);
        let o = board.count(Cell::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or exactly one more"
    }
}
