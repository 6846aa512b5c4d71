//! Cell and side types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Contents of one board cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Convert a cell to its diagram character ('x' Black, 'o' White, '.' empty)
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'x',
            Cell::White => 'o',
        }
    }

    /// Parse a cell from a diagram character
    #[must_use]
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'x' => Some(Cell::Black),
            'o' => Some(Cell::White),
            _ => None,
        }
    }
}

/// The two players. Black always moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Both sides in move order (Black=0, White=1)
    pub const BOTH: [Side; 2] = [Side::Black, Side::White];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }

    /// Returns the opposing side
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// The disc cell this side places
    #[inline]
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}
