//! Tic-tac-toe game logic with exhaustive minimax search.
//!
//! Boards are immutable values. The rule functions ([`player`], [`actions`],
//! [`result`], [`winner`], [`terminal`], [`utility`]) are pure, and
//! [`minimax`] walks the full game tree built from them to pick the optimal
//! move for whoever is to play.
//!
//! # Example
//!
//! ```
//! use tictactoe_ai::{initial_state, minimax, result, terminal, utility};
//!
//! # fn main() -> Result<(), tictactoe_ai::GameError> {
//! let mut board = initial_state();
//! while let Some(action) = minimax(&board) {
//!     board = result(&board, action)?;
//! }
//! assert!(terminal(&board));
//! assert_eq!(utility(&board), 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod invariants;
mod kani_support;
mod outcome;
mod rules;
mod search;
mod types;

// Crate-level exports - Domain types
pub use types::{Board, Cell, Move, Player};

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Game rules
pub use rules::{actions, initial_state, is_full, player, result, terminal, utility, winner};

// Crate-level exports - Outcome
pub use outcome::{Outcome, outcome};

// Crate-level exports - Search
pub use search::{Analysis, analyze, evaluate, minimax, principal_variation};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, LegalAction, MoveContract, SingleCellPlaced};
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, SingleWinnerInvariant,
    TurnBalanceInvariant, WinnerMovedLastInvariant,
};
