//! Uniform-random move selection.
//!
//! Picks any legal move with equal probability. A baseline opponent for
//! tests and casual play.

use rand::Rng;

use crate::board::{Board, Side, Square};

/// Pick a uniformly random legal move for `side`, or `None` when blocked.
pub fn random_move<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<Square> {
    let moves = board.legal_moves(side);
    if moves.is_empty() {
        None
    } else {
        Some(moves[rng.gen_range(0..moves.len())])
    }
}
