//! Exhaustive minimax search over the tic-tac-toe game tree.
//!
//! Every line of play below the given board is explored to the end. No
//! pruning and no caching: the full tree from the empty board has fewer
//! than 600,000 nodes and recursion never goes deeper than nine plies.

use crate::rules::{actions, place, player, terminal, utility};
use crate::types::{Board, Move, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of searching a board to the end of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Analysis {
    /// Optimal move for the player to move, `None` on a terminal board.
    best_move: Option<Move>,
    /// Game-theoretic value of the board from X's point of view.
    value: i8,
    /// Boards visited, the searched board included.
    nodes: u64,
}

/// Whether `candidate` beats `incumbent` for `mover`.
///
/// Strict comparison, so the first move reaching the best value is kept.
fn improves(mover: Player, candidate: i8, incumbent: i8) -> bool {
    match mover {
        Player::X => candidate > incumbent,
        Player::O => candidate < incumbent,
    }
}

/// Depth-first walk of the game tree, counting visited boards.
#[derive(Debug, Default)]
struct Search {
    nodes: u64,
}

impl Search {
    /// Minimax value of `board`: its utility if the game is over, otherwise
    /// the best child value for the player to move.
    fn value(&mut self, board: &Board) -> i8 {
        self.nodes += 1;
        if terminal(board) {
            return utility(board);
        }

        let mover = player(board);
        let children = actions(board)
            .into_iter()
            .map(|action| self.value(&place(board, action, mover)));
        let best = match mover {
            Player::X => children.max(),
            Player::O => children.min(),
        };
        // A board that is not terminal always has at least one action.
        best.unwrap_or_else(|| utility(board))
    }

    /// Best move at the root together with its value.
    fn best(&mut self, board: &Board) -> (Option<Move>, i8) {
        self.nodes += 1;
        if terminal(board) {
            return (None, utility(board));
        }

        let mover = player(board);
        let mut best: Option<(Move, i8)> = None;
        for action in actions(board) {
            let value = self.value(&place(board, action, mover));
            if best.is_none_or(|(_, incumbent)| improves(mover, value, incumbent)) {
                best = Some((action, value));
            }
        }

        match best {
            Some((action, value)) => (Some(action), value),
            None => (None, utility(board)),
        }
    }
}

/// Searches `board` and reports the optimal move, the board's value and
/// the size of the explored tree.
#[instrument(skip(board), fields(to_move = %player(board)))]
pub fn analyze(board: &Board) -> Analysis {
    let mut search = Search::default();
    let (best_move, value) = search.best(board);
    debug!(?best_move, value, nodes = search.nodes, "Search complete");
    Analysis {
        best_move,
        value,
        nodes: search.nodes,
    }
}

/// Returns the optimal move for the player to move.
///
/// Returns `None` if the game is already over. X maximizes and O minimizes
/// [`utility`]; among equally good moves the first in [`actions`] order wins.
#[instrument(skip(board))]
pub fn minimax(board: &Board) -> Option<Move> {
    analyze(board).best_move
}

/// Returns the value of `board` under optimal play by both sides:
/// `1` if X can force a win, `-1` if O can, `0` for a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> i8 {
    Search::default().value(board)
}

/// Plays optimal moves for both sides until the game ends and returns them
/// in order. Empty if `board` is already terminal.
#[instrument(skip(board))]
pub fn principal_variation(board: &Board) -> Vec<Move> {
    let mut current = *board;
    let mut line = Vec::new();
    while let Some(action) = minimax(&current) {
        current = place(&current, action, player(&current));
        line.push(action);
    }
    debug!(plies = line.len(), "Principal variation complete");
    line
}
