use super::{Cell, Side, Square};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Disc counts for both sides. Empty cells are not counted, so the totals
/// need not sum to 64.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    /// Count for one side
    #[inline]
    #[must_use]
    pub const fn for_side(self, side: Side) -> u32 {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }
}

/// An 8x8 Othello board.
///
/// The board holds cell contents only; whose turn it is lives in
/// [`GameState`](crate::game::GameState). All mutation goes through
/// [`apply_move`](Board::apply_move), which validates first.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [[Cell; 8]; 8],
}

impl Board {
    /// The canonical 4-disc opening position: White on d4/e5, Black on
    /// e4/d5, Black to move first.
    #[must_use]
    pub fn opening() -> Self {
        let mut board = Board::empty();
        board.cells[3][3] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board.cells[4][4] = Cell::White;
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// Contents of one cell
    #[inline]
    #[must_use]
    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.row()][sq.col()]
    }

    /// Disc counts for both sides
    #[must_use]
    pub fn score(&self) -> Score {
        let mut score = Score { black: 0, white: 0 };
        for row in &self.cells {
            for cell in row {
                match cell {
                    Cell::Black => score.black += 1,
                    Cell::White => score.white += 1,
                    Cell::Empty => {}
                }
            }
        }
        score
    }

    /// True iff neither side has a legal move.
    ///
    /// This is the sole end-of-game condition. A full board has no legal
    /// moves for either side and so is covered; a single blocked side is
    /// not terminal, the turn passes instead.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.has_any_move(Side::Black) && !self.has_any_move(Side::White)
    }

    /// True iff `side` has at least one legal move
    #[must_use]
    pub fn has_any_move(&self, side: Side) -> bool {
        for row in 0..8 {
            for col in 0..8 {
                if self.is_legal_move(Square(row, col), side) {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::opening()
    }
}
