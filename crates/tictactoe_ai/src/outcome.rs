//! Final result of a game.

use crate::rules::{is_full, winner};
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Returns the outcome of a finished game, or `None` while it is in play.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(player) => Some(Outcome::Winner(player)),
        None if is_full(board) => Some(Outcome::Draw),
        None => None,
    }
}
