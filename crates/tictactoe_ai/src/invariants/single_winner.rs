//! Single winner invariant: both players never hold a line at once.

use super::Invariant;
use crate::rules::has_line;
use crate::types::{Board, Player};

/// Invariant: at most one player holds a complete line.
///
/// The game stops at the first completed line, so the other player never
/// gets to finish one.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        !(has_line(board, Player::X) && has_line(board, Player::O))
    }

    fn description() -> &'static str {
        "At most one player holds a complete line"
    }
}
