//! Terminal detection and scoring for tic-tac-toe.

use super::win::winner;
use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// Checks if the board is full (no empty cells).
///
/// A full board with no winner is a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|c| c != Cell::Empty)
}

/// Checks whether the game is over: someone has won or the board is full.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a board from X's point of view: `1` if X has won, `-1` if O has
/// won, `0` otherwise.
///
/// Meant for terminal boards. On a board still in play it only reflects
/// [`winner`], so it returns `0`.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
