//! Error types for board operations.
//!
//! Illegal moves are not errors: probing an illegal move is a normal part
//! of play and is answered with a boolean `false`. The types here cover
//! malformed inputs only, which indicate a caller bug and fail fast.

use std::fmt;

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for board-diagram parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// Invalid cell character in diagram (must be 'x', 'o', or '.')
    InvalidCell { char: char },
    /// Wrong number of rows (needs exactly 8)
    WrongRowCount { found: usize },
    /// A row with the wrong number of cells
    WrongRowLength { row: usize, len: usize },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::InvalidCell { char } => {
                write!(f, "Invalid cell character '{char}' in board diagram")
            }
            BoardParseError::WrongRowCount { found } => {
                write!(f, "Board diagram must have 8 rows, found {found}")
            }
            BoardParseError::WrongRowLength { row, len } => {
                write!(f, "Row {row} must have 8 cells, found {len}")
            }
        }
    }
}

impl std::error::Error for BoardParseError {}
