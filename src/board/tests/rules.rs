//! Legality, flipping, scoring, and terminal detection tests.

use crate::board::{Board, Cell, Score, Side, Square, SquareError};

#[test]
fn occupied_squares_are_never_legal() {
    let board = Board::opening();
    for side in Side::BOTH {
        assert!(!board.is_legal_move(Square(3, 3), side));
        assert!(!board.is_legal_move(Square(4, 4), side));
    }
}

#[test]
fn out_of_range_coordinates_fail_fast() {
    assert_eq!(
        Square::try_from((8, 0)),
        Err(SquareError::RowOutOfBounds { row: 8 })
    );
    assert_eq!(
        Square::try_from((0, 8)),
        Err(SquareError::ColOutOfBounds { col: 8 })
    );
    assert_eq!(Square::new(9, 9), None);
    assert!("i9".parse::<Square>().is_err());
}

#[test]
fn black_c4_flips_d4() {
    // Known legal opening move: Black on (2,3) brackets the White disc at
    // (3,3) against the Black disc at (4,3).
    let mut board = Board::opening();
    assert!(board.apply_move(Square(2, 3), Side::Black));

    assert_eq!(board.cell(Square(2, 3)), Cell::Black);
    assert_eq!(board.cell(Square(3, 3)), Cell::Black);
    assert_eq!(board.score(), Score { black: 4, white: 1 });
}

#[test]
fn illegal_apply_leaves_board_untouched() {
    let mut board = Board::opening();
    assert!(!board.apply_move(Square(0, 0), Side::Black));
    assert_eq!(board, Board::opening());
}

#[test]
fn apply_adds_exactly_one_disc() {
    let board = Board::opening();
    for mv in board.legal_moves(Side::Black) {
        let mut child = board.clone();
        let before = child.score();
        assert!(child.apply_move(mv, Side::Black));
        let after = child.score();
        assert_eq!(
            after.black + after.white,
            before.black + before.white + 1,
            "move {mv} must add exactly one disc"
        );
    }
}

#[test]
fn one_move_flips_in_several_directions() {
    let board = Board::from_diagram(
        "........
         ........
         .xoo....
         ....o...
         ....x...
         ........
         ........
         ........",
    );

    // Black on (2,4) captures leftward through (2,3),(2,2) to the disc at
    // (2,1), and downward through (3,4) to the disc at (4,4).
    let mut board = board;
    assert!(board.apply_move(Square(2, 4), Side::Black));

    assert_eq!(board.cell(Square(2, 2)), Cell::Black);
    assert_eq!(board.cell(Square(2, 3)), Cell::Black);
    assert_eq!(board.cell(Square(3, 4)), Cell::Black);
    assert_eq!(board.score(), Score { black: 6, white: 0 });
}

#[test]
fn edge_terminated_run_captures_nothing() {
    // The White run to the left of (0,2) hits the board edge with no Black
    // disc behind it, so the move qualifies in no direction.
    let board = Board::from_diagram(
        "oo......
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    );
    assert!(!board.is_legal_move(Square(0, 2), Side::Black));
}

#[test]
fn empty_terminated_run_captures_nothing() {
    // Opponent run followed by an empty cell before any own disc.
    let board = Board::from_diagram(
        ".oo.x...
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    );
    assert!(!board.is_legal_move(Square(0, 0), Side::Black));
}

#[test]
fn adjacent_own_disc_does_not_qualify() {
    // A direction with zero opponent discs between the placed disc and the
    // own disc captures nothing.
    let board = Board::from_diagram(
        ".x......
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    );
    assert!(!board.is_legal_move(Square(0, 0), Side::Black));
}

#[test]
fn board_with_only_one_color_is_terminal() {
    let board = Board::from_diagram(
        "x.......
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    );
    assert!(board.is_terminal());
}

#[test]
fn one_blocked_side_is_not_terminal() {
    // Black can play (0,2); White's only disc run ends at the edge, so
    // White is blocked. The game is not over: the turn passes.
    let board = Board::from_diagram(
        "xo......
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    );
    assert!(board.has_any_move(Side::Black));
    assert!(!board.has_any_move(Side::White));
    assert!(!board.is_terminal());
}

#[test]
fn full_board_is_terminal_through_the_no_moves_rule() {
    let diagram = "xxxxxxxx\n".repeat(4) + &"oooooooo\n".repeat(4);
    let board = Board::from_diagram(&diagram);
    assert!(board.is_terminal());
    assert_eq!(
        board.score(),
        Score {
            black: 32,
            white: 32
        }
    );
}

#[test]
fn score_ignores_empty_cells() {
    let board = Board::from_diagram(
        "x.o.....
         ........
         ........
         ........
         ........
         ........
         ........
         .......x",
    );
    assert_eq!(board.score(), Score { black: 2, white: 1 });
}
