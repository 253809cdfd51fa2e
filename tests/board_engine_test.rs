//! Tests for board evaluation and the computer heuristic.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_squares::{
    Board, BoardError, Coord, Difficulty, Layout, Mark, Outcome, Reason, select_move,
    select_move_with_reason,
};

#[test]
fn test_five_squares_has_28_win_lines() {
    let board = Board::new(Layout::five_squares());
    assert_eq!(board.layout().base_lines().len(), 20);
    assert_eq!(board.lines().len(), 28);
}

#[test]
fn test_classic_diagonal_scenario() {
    let mut board = Board::new(Layout::classic());
    board.place_str("1", Mark::X).unwrap();
    board.place_str("5", Mark::X).unwrap();
    board.place_str("9", Mark::X).unwrap();
    assert!(board.has_winner(Mark::X));
    assert_eq!(board.outcome(), Outcome::Win(Mark::X));
}

#[test]
fn test_classic_full_board_draw() {
    let mut board = Board::new(Layout::classic());
    #[rustfmt::skip]
    let marks = [
        Mark::O, Mark::X, Mark::O,
        Mark::O, Mark::X, Mark::X,
        Mark::X, Mark::O, Mark::X,
    ];
    for (square, mark) in marks.iter().enumerate() {
        board.place_str(&(square + 1).to_string(), *mark).unwrap();
    }
    assert!(!board.has_winner(Mark::X));
    assert!(!board.has_winner(Mark::O));
    assert_eq!(board.outcome(), Outcome::Draw);
}

#[test]
fn test_occupied_square_never_mutates() {
    let mut board = Board::new(Layout::five_squares());
    board.place_str("C3", Mark::X).unwrap();
    let snapshot = board.snapshot();

    for mark in [Mark::X, Mark::O] {
        assert_eq!(
            board.place(Coord::new(2, 2), mark),
            Err(BoardError::CellOccupied(Coord::new(2, 2)))
        );
    }
    assert_eq!(board.snapshot(), snapshot);
}

#[test]
fn test_center_dominates() {
    let mut board = Board::new(Layout::five_squares());
    for square in ["A1", "A2", "A3"] {
        board.place_str(square, Mark::O).unwrap();
    }
    for square in ["E1", "E2", "E3"] {
        board.place_str(square, Mark::X).unwrap();
    }
    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(
        select_move(&board, Mark::O, Difficulty::Full, &mut rng),
        Some(Coord::new(2, 2))
    );
}

#[test]
fn test_takes_win_then_blocks_on_five_squares() {
    let mut board = Board::new(Layout::five_squares());
    board.place_str("C3", Mark::X).unwrap();
    for square in ["B2", "B3", "B4"] {
        board.place_str(square, Mark::O).unwrap();
    }
    let mut rng = StdRng::seed_from_u64(11);
    // Column B: B1 is the first empty square of the first decisive window.
    assert_eq!(
        select_move_with_reason(&board, Mark::O, Difficulty::Full, &mut rng),
        Some((Coord::new(1, 0), Reason::Win))
    );

    // From X's side the same column is a threat to block.
    assert_eq!(
        select_move_with_reason(&board, Mark::X, Difficulty::Full, &mut rng),
        Some((Coord::new(1, 0), Reason::Block))
    );
}

#[test]
fn test_heuristic_game_ends() {
    let mut board = Board::new(Layout::five_squares());
    let mut rng = StdRng::seed_from_u64(5);
    let mut mark = Mark::X;
    while !board.outcome().is_terminal() {
        let coord = select_move(&board, mark, Difficulty::Full, &mut rng).unwrap();
        board.place(coord, mark).unwrap();
        mark = mark.opponent();
    }
    assert!(board.count(Mark::X) + board.count(Mark::O) <= 25);
}

#[test]
fn test_five_squares_ties_resolve_to_diagonal() {
    let mut board = Board::new(Layout::five_squares());
    board.place_str("C3", Mark::X).unwrap();
    for square in ["A1", "B1", "C1", "A2", "B3", "C4"] {
        board.place_str(square, Mark::O).unwrap();
    }
    let mut rng = StdRng::seed_from_u64(0);
    let (coord, reason) =
        select_move_with_reason(&board, Mark::O, Difficulty::Full, &mut rng).unwrap();
    assert_eq!(coord.to_string(), "D5");
    assert_eq!(reason, Reason::Win);
}
