//! Contract-based validation for board transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(board, action)} result {Q(before, action, after)}

use crate::error::GameError;
use crate::rules::player;
use crate::types::{Board, Cell, Move};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, action: &A, after: &S) -> bool;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the move targets a cell on the board that is still empty.
///
/// Equivalent to membership in [`actions`](crate::actions).
pub struct LegalAction;

impl LegalAction {
    /// Rejects moves that are off the board or already marked.
    #[instrument(level = "trace", skip(board))]
    pub fn check(action: &Move, board: &Board) -> Result<(), GameError> {
        match board.get(*action) {
            Some(Cell::Empty) => Ok(()),
            Some(cell) => {
                warn!(%action, %cell, "Rejected action on occupied cell");
                Err(GameError::InvalidAction(*action))
            }
            None => {
                warn!(%action, "Rejected action off the board");
                Err(GameError::InvalidAction(*action))
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: exactly the target cell changed, and it now holds the
/// mark of the player who was to move.
pub struct SingleCellPlaced;

impl SingleCellPlaced {
    /// Compares the boards on either side of a transition.
    #[instrument(level = "trace", skip(before, after))]
    pub fn holds(before: &Board, action: &Move, after: &Board) -> bool {
        let changed: Vec<Move> = Move::ALL
            .iter()
            .copied()
            .filter(|m| before.get(*m) != after.get(*m))
            .collect();

        let valid = changed == [*action] && after.get(*action) == Some(Cell::from(player(before)));
        if !valid {
            warn!(?changed, %action, "Transition postcondition violated");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for [`result`](crate::result).
///
/// Preconditions:
/// - Target cell is on the board and empty
///
/// Postconditions:
/// - Only the target cell changed
/// - It holds the mover's mark
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    fn pre(board: &Board, action: &Move) -> Result<(), GameError> {
        LegalAction::check(action, board)
    }

    fn post(before: &Board, action: &Move, after: &Board) -> bool {
        SingleCellPlaced::holds(before, action, after)
    }
}
