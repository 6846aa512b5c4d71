//! Text-diagram notation for boards.
//!
//! A board is written as 8 rows of 8 cells, row 0 first: 'x' for Black,
//! 'o' for White, '.' for empty. Whitespace between rows is ignored, so
//! diagrams can be indented freely inside tests.

use std::fmt;
use std::str::FromStr;

use super::error::BoardParseError;
use super::{Board, Cell};

impl Board {
    /// Parse a board from a text diagram.
    ///
    /// # Panics
    /// Panics if the diagram is invalid. Use [`FromStr`] for fallible
    /// parsing.
    #[must_use]
    pub fn from_diagram(diagram: &str) -> Self {
        diagram.parse().expect("Invalid board diagram")
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split_whitespace().collect();
        if rows.len() != 8 {
            return Err(BoardParseError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let len = row_str.chars().count();
            if len != 8 {
                return Err(BoardParseError::WrongRowLength { row, len });
            }
            for (col, c) in row_str.chars().enumerate() {
                board.cells[row][col] =
                    Cell::from_char(c).ok_or(BoardParseError::InvalidCell { char: c })?;
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for cells in &self.cells {
            write!(f, "    ")?;
            for cell in cells {
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
