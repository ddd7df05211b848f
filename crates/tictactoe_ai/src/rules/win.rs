//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Move, Player};
use tracing::instrument;

/// Every winning line, in scan order: rows, columns, main diagonal,
/// anti-diagonal.
pub(crate) const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Iterates over the owner of every completed line, in scan order.
fn completed_lines(board: &Board) -> impl Iterator<Item = Player> + '_ {
    LINES.iter().filter_map(|&[a, b, c]| {
        let cell = board.get(a)?;
        let owner = cell.player()?;
        (board.get(b)? == cell && board.get(c)? == cell).then_some(owner)
    })
}

/// Returns the player holding the first complete line, if any.
///
/// Rows are checked first, then columns, then the two diagonals.
/// A line of empty cells is never a win.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    completed_lines(board).next()
}

/// Checks whether the given player holds any complete line.
#[instrument(level = "trace", skip(board))]
pub fn has_line(board: &Board, player: Player) -> bool {
    completed_lines(board).any(|owner| owner == player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell::{self, Empty as E, O, X};

    fn board(cells: [[Cell; 3]; 3]) -> Board {
        Board::from_rows(cells)
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let b = board([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(winner(&b), Some(Player::X));
    }

    #[test]
    fn test_empty_first_row_does_not_hide_later_rows() {
        let b = board([[E, E, E], [X, X, E], [O, O, O]]);
        assert_eq!(winner(&b), Some(Player::O));
    }

    #[test]
    fn test_winner_column() {
        let b = board([[X, O, E], [X, O, E], [E, O, X]]);
        assert_eq!(winner(&b), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonals() {
        let main = board([[O, X, E], [X, O, E], [X, E, O]]);
        assert_eq!(winner(&main), Some(Player::O));
        let anti = board([[O, O, X], [E, X, E], [X, E, E]]);
        assert_eq!(winner(&anti), Some(Player::X));
    }

    #[test]
    fn test_no_winner_draw_shaped_board() {
        let b = board([[X, O, X], [O, X, O], [O, X, O]]);
        assert_eq!(winner(&b), None);
    }

    #[test]
    fn test_scan_order_prefers_rows() {
        // Not reachable in play; pins the deterministic scan order.
        let b = board([[E, E, O], [X, X, X], [E, E, O]]);
        assert_eq!(winner(&b), Some(Player::X));
        let b = board([[O, O, O], [X, X, X], [E, E, E]]);
        assert_eq!(winner(&b), Some(Player::O));
        assert!(has_line(&b, Player::X));
        assert!(has_line(&b, Player::O));
    }
}
