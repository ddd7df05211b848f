//! Winner moved last invariant: a completed line belongs to the last mover.

use super::Invariant;
use crate::rules::{has_line, player};
use crate::types::{Board, Player};

/// Invariant: whoever holds a line made the most recent move.
///
/// After a line is completed nobody moves again, so the player to move on
/// a won board is always the loser.
pub struct WinnerMovedLastInvariant;

impl Invariant<Board> for WinnerMovedLastInvariant {
    fn holds(board: &Board) -> bool {
        let to_move = player(board);
        !has_line(board, to_move)
    }

    fn description() -> &'static str {
        "A completed line belongs to the player who moved last"
    }
}
