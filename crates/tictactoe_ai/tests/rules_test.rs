//! Properties of the game rules, checked on every reachable board.

use std::collections::HashSet;
use strum::IntoEnumIterator;
use tictactoe_ai::{
    Board, BoardInvariants, Cell, GameError, InvariantSet, Move, Player, actions, initial_state,
    is_full, outcome, player, result, terminal, utility, winner,
};

/// Collects every board reachable from the empty board by legal play.
fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) || terminal(&board) {
            continue;
        }
        for action in actions(&board) {
            stack.push(result(&board, action).unwrap());
        }
    }
    seen
}

#[test]
fn test_reachable_board_count() {
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_actions_are_exactly_the_empty_cells() {
    for board in reachable_boards() {
        let legal = actions(&board);
        let occupied = board.cells().filter(|c| !c.is_empty()).count();
        assert_eq!(legal.len() + occupied, 9);
        for action in Move::ALL {
            assert_eq!(legal.contains(&action), board.get(action) == Some(Cell::Empty));
        }
        assert_eq!(legal.is_empty(), is_full(&board));
    }
}

#[test]
fn test_result_changes_exactly_one_cell() {
    for board in reachable_boards() {
        let snapshot = board;
        let mover = Cell::from(player(&board));
        for action in actions(&board) {
            let next = result(&board, action).unwrap();
            assert_eq!(board, snapshot);
            let changed: Vec<Move> = Move::ALL
                .into_iter()
                .filter(|m| board.get(*m) != next.get(*m))
                .collect();
            assert_eq!(changed, vec![action]);
            assert_eq!(next.get(action), Some(mover));
        }
    }
}

#[test]
fn test_result_rejects_illegal_moves() {
    for board in reachable_boards() {
        let legal = actions(&board);
        for row in 0..5 {
            for col in 0..5 {
                let action = Move::new(row, col);
                if legal.contains(&action) {
                    continue;
                }
                assert_eq!(result(&board, action), Err(GameError::InvalidAction(action)));
            }
        }
    }
}

#[test]
fn test_player_alternates_from_x() {
    let board = initial_state();
    assert_eq!(player(&board), Player::X);
    let mut board = board;
    let mut expected = Player::X;
    for action in [Move::new(1, 1), Move::new(0, 0), Move::new(2, 2), Move::new(0, 2)] {
        assert_eq!(player(&board), expected);
        board = result(&board, action).unwrap();
        expected = expected.opponent();
    }
    assert_eq!(player(&board), Player::X);
}

#[test]
fn test_utility_matches_winner_on_terminal_boards() {
    for board in reachable_boards().into_iter().filter(terminal) {
        let expected = match winner(&board) {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        };
        assert_eq!(utility(&board), expected);
        assert!(winner(&board).is_some() || is_full(&board));
        assert_eq!(outcome(&board).and_then(|o| o.winner()), winner(&board));
    }
}

#[test]
fn test_reachable_boards_satisfy_invariants() {
    for board in reachable_boards() {
        assert!(BoardInvariants::check_all(&board).is_ok(), "{board}");
    }
}

#[test]
fn test_concrete_winner_boards() {
    use Cell::{Empty as E, O, X};

    let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
    assert_eq!(winner(&board), Some(Player::X));

    let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, O]]);
    assert_eq!(winner(&board), None);
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    use Cell::{O, X};

    let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
    assert!(terminal(&board));
    assert_eq!(winner(&board), None);
    assert_eq!(utility(&board), 0);
}

#[test]
fn test_every_player_can_be_iterated() {
    let players: Vec<Player> = Player::iter().collect();
    assert_eq!(players, vec![Player::X, Player::O]);
}
