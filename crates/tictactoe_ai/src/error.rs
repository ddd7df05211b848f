//! Error types for game transitions.

use crate::types::Move;

/// Error that can occur when applying a move to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The move is not among the legal actions: off the board or occupied.
    #[display("Invalid action {}", _0)]
    InvalidAction(Move),
}

impl std::error::Error for GameError {}
