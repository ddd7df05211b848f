//! Kani arbitrary implementations and proof harnesses.
//!
//! The implementations let Kani explore every value of the domain types,
//! including boards that legal play never reaches.

#[cfg(kani)]
use crate::{Board, Cell, GameError, Move, Player, result};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Cell {
    fn any() -> Self {
        let tag: u8 = kani::any();
        kani::assume(tag < 3);
        match tag {
            0 => Cell::X,
            1 => Cell::O,
            _ => Cell::Empty,
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Move {
    fn any() -> Self {
        let row: usize = kani::any();
        let col: usize = kani::any();
        kani::assume(row < 4 && col < 4);
        Move::new(row, col)
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        Board::from_rows(kani::any())
    }
}

/// `result` never changes its input and either rejects the move or marks
/// exactly the target cell.
#[cfg(kani)]
#[kani::proof]
fn result_marks_only_target() {
    let board: Board = kani::any();
    let action: Move = kani::any();
    let before = board;

    match result(&board, action) {
        Ok(after) => {
            assert!(before.is_empty_at(action));
            assert!(after.get(action).is_some_and(|c| !c.is_empty()));
        }
        Err(GameError::InvalidAction(rejected)) => {
            assert_eq!(rejected, action);
            assert!(!before.is_empty_at(action));
        }
    }
    assert_eq!(board, before);
}
