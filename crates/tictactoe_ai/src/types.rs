//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Cell {
    /// Marked by X.
    X,
    /// Marked by O.
    O,
    /// Unmarked.
    #[strum(to_string = " ")]
    Empty,
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }

    /// Checks if the cell is unmarked.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A move: zero-based `(row, col)` coordinates of the cell to mark.
///
/// Coordinates outside `0..3` are representable so that they can be
/// rejected by [`result`](crate::result) rather than at construction.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Move {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All 9 moves in row-major order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: transitions produce a new board and never
/// touch the one they were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed as `cells[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Creates a board from its rows, top to bottom.
    pub const fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell targeted by a move, or `None` if it is off the board.
    pub fn get(&self, action: Move) -> Option<Cell> {
        self.cells.get(action.row)?.get(action.col).copied()
    }

    /// Checks if the cell targeted by a move exists and is empty.
    pub fn is_empty_at(&self, action: Move) -> bool {
        matches!(self.get(action), Some(Cell::Empty))
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Counts the cells holding the given value.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells().filter(|c| *c == cell).count()
    }

    /// Returns a copy of this board with one cell replaced.
    ///
    /// The caller guarantees `action` is on the board.
    pub(crate) fn with(mut self, action: Move, cell: Cell) -> Self {
        self.cells[action.row][action.col] = cell;
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{}|{}|{}", row[0], row[1], row[2])?;
            if i < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
