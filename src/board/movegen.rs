//! Legality checking and legal-move enumeration.

use super::rays::RAYS;
use super::{Board, Cell, Side, Square};

impl Board {
    /// Check whether `side` may place a disc on `sq`.
    ///
    /// Legal iff the cell is empty and at least one direction holds a
    /// contiguous run of one or more opponent discs immediately adjacent,
    /// terminated by a disc of `side`. A run that reaches the board edge or
    /// an empty cell first captures nothing and does not qualify.
    #[must_use]
    pub fn is_legal_move(&self, sq: Square, side: Side) -> bool {
        if self.cell(sq) != Cell::Empty {
            return false;
        }
        let own = side.cell();
        let opp = side.opponent().cell();
        RAYS[sq.as_index()]
            .iter()
            .any(|ray| self.ray_captures(ray, own, opp))
    }

    /// Every legal square for `side`, in row-major order.
    ///
    /// Computed freshly on each call; the result is stable as long as the
    /// board is not mutated in between.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> Vec<Square> {
        let mut moves = Vec::new();
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                if self.is_legal_move(sq, side) {
                    moves.push(sq);
                }
            }
        }
        moves
    }

    /// Walk one ray outward: does it bracket at least one opponent disc?
    fn ray_captures(&self, ray: &[Square], own: Cell, opp: Cell) -> bool {
        let mut run = 0usize;
        for &sq in ray {
            let cell = self.cell(sq);
            if cell == opp {
                run += 1;
            } else if cell == own {
                return run > 0;
            } else {
                return false;
            }
        }
        false
    }
}
