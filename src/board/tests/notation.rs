//! Diagram and square notation tests.

use crate::board::{Board, BoardParseError, Square};

#[test]
fn opening_diagram_round_trips() {
    let board = Board::opening();
    let diagram = board.to_string();
    let parsed: Board = diagram.parse().unwrap();
    assert_eq!(parsed, board);
}

#[test]
fn opening_diagram_reads_as_expected() {
    let expected = "........\n\
                    ........\n\
                    ........\n\
                    ...ox...\n\
                    ...xo...\n\
                    ........\n\
                    ........\n\
                    ........";
    assert_eq!(Board::opening().to_string(), expected);
}

#[test]
fn parse_rejects_wrong_row_count() {
    let err = "........".parse::<Board>().unwrap_err();
    assert_eq!(err, BoardParseError::WrongRowCount { found: 1 });
}

#[test]
fn parse_rejects_wrong_row_length() {
    let diagram = "........\n\
                   .......\n\
                   ........\n\
                   ........\n\
                   ........\n\
                   ........\n\
                   ........\n\
                   ........";
    let err = diagram.parse::<Board>().unwrap_err();
    assert_eq!(err, BoardParseError::WrongRowLength { row: 1, len: 7 });
}

#[test]
fn parse_rejects_invalid_cell() {
    let diagram = "........\n".repeat(7) + ".......?";
    let err = diagram.parse::<Board>().unwrap_err();
    assert_eq!(err, BoardParseError::InvalidCell { char: '?' });
}

#[test]
fn square_notation_round_trips() {
    assert_eq!("a1".parse::<Square>().unwrap(), Square(0, 0));
    assert_eq!("d3".parse::<Square>().unwrap(), Square(2, 3));
    assert_eq!("h8".parse::<Square>().unwrap(), Square(7, 7));
    assert_eq!(Square(2, 3).to_string(), "d3");
    assert_eq!(Square(7, 7).to_string(), "h8");
}

#[test]
fn square_notation_rejects_garbage() {
    assert!("".parse::<Square>().is_err());
    assert!("a9".parse::<Square>().is_err());
    assert!("i1".parse::<Square>().is_err());
    assert!("a12".parse::<Square>().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn square_and_score_serialize_round_trip() {
    use crate::board::Score;

    let sq = Square(2, 3);
    let json = serde_json::to_string(&sq).unwrap();
    assert_eq!(serde_json::from_str::<Square>(&json).unwrap(), sq);

    let score = Score { black: 4, white: 1 };
    let json = serde_json::to_string(&score).unwrap();
    assert_eq!(serde_json::from_str::<Score>(&json).unwrap(), score);
}
