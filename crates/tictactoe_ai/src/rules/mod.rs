//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values. None of them keep state between
//! calls, and transitions return new boards instead of editing their input.

pub mod draw;
pub mod win;

pub use draw::{is_full, terminal, utility};
pub use win::{has_line, winner};

use crate::contracts::{Contract, MoveContract};
use crate::error::GameError;
use crate::types::{Board, Cell, Move, Player};
use tracing::{instrument, trace};

/// Returns the starting board: every cell empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player whose turn it is.
///
/// X always opens, so an even number of marks means X is to move. This is
/// defined for terminal boards too; check [`terminal`] first if that matters.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Player {
    let marks = board.cells().filter(|c| !c.is_empty()).count();
    if marks % 2 == 0 { Player::X } else { Player::O }
}

/// Returns every empty cell as a move, in row-major order.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> Vec<Move> {
    Move::ALL
        .iter()
        .copied()
        .filter(|action| board.is_empty_at(*action))
        .collect()
}

/// Returns the board produced by the player to move marking `action`.
///
/// Fails with [`GameError::InvalidAction`] if `action` is not one of
/// [`actions`]. The input board is left as it was.
#[instrument(skip(board), fields(to_move = %player(board)))]
pub fn result(board: &Board, action: Move) -> Result<Board, GameError> {
    MoveContract::pre(board, &action)?;

    let next = place(board, action, player(board));
    trace!(%action, "Action applied");

    debug_assert!(
        MoveContract::post(board, &action, &next),
        "Transition must mark exactly the target cell"
    );
    Ok(next)
}

/// Marks `action` for `mover` without validation.
///
/// Callers pass moves drawn from [`actions`].
pub(crate) fn place(board: &Board, action: Move, mover: Player) -> Board {
    board.with(action, Cell::from(mover))
}
