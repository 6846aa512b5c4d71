//! Move application with disc flipping.

use super::rays::RAYS;
use super::{Board, Cell, Side, Square};

impl Board {
    /// Place a disc for `side` on `sq`, flipping every bracketed opponent
    /// run.
    ///
    /// Returns `false` and leaves the board untouched if the move is
    /// illegal. On success the placed disc is the only new disc; flipped
    /// discs change color but total occupancy grows by exactly one. Turn
    /// advancement is the caller's responsibility.
    ///
    /// Each direction is resolved against the pre-move contents of its own
    /// ray. Rays from a single origin never share squares, so the flips of
    /// one direction cannot influence another's capture decision.
    pub fn apply_move(&mut self, sq: Square, side: Side) -> bool {
        if !self.is_legal_move(sq, side) {
            return false;
        }
        let own = side.cell();
        let opp = side.opponent().cell();
        self.cells[sq.row()][sq.col()] = own;
        for d in 0..8 {
            self.flip_along(&RAYS[sq.as_index()][d], own, opp);
        }
        true
    }

    /// Flip the leading opponent run on one ray, if it is terminated by an
    /// own disc. Edge or empty terminators flip nothing.
    fn flip_along(&mut self, ray: &[Square], own: Cell, opp: Cell) {
        let mut run = 0usize;
        for &sq in ray {
            let cell = self.cell(sq);
            if cell == opp {
                run += 1;
            } else {
                if cell == own {
                    for &flip in &ray[..run] {
                        self.cells[flip.row()][flip.col()] = own;
                    }
                }
                return;
            }
        }
    }
}
