//! Fixed-depth exhaustive minimax.

use super::weights::WEIGHTS;
use crate::board::{Board, Side, Square};

/// Search depth used by the reference opponent
pub const DEFAULT_DEPTH: u32 = 3;

/// Static positional score for `side`: weighted sum over `side`'s discs
/// minus the weighted sum over the opponent's. Empty cells contribute 0.
///
/// This is the leaf heuristic of the search, not a disc count.
#[must_use]
pub fn evaluate(board: &Board, side: Side) -> i32 {
    let own = side.cell();
    let opp = side.opponent().cell();
    let mut score = 0;
    for row in 0..8 {
        for col in 0..8 {
            let cell = board.cell(Square(row, col));
            if cell == own {
                score += WEIGHTS[row][col];
            } else if cell == opp {
                score -= WEIGHTS[row][col];
            }
        }
    }
    score
}

/// Pick a move for `side` with a full-width minimax search of `depth`
/// plies.
///
/// Leaves are scored with `evaluate(_, Side::White)` for every ply: White
/// plies maximise it, Black plies minimise it. The evaluator's perspective
/// stays fixed to White regardless of the mover; callers relying on exact
/// move selection depend on this, so it must not change.
///
/// Ties keep the earliest move in row-major order, so repeated calls on
/// the same position return the same square. Returns `None` only when
/// `side` has no legal move; the caller must then pass the turn. A depth
/// of 0 is treated as 1.
#[must_use]
pub fn choose_move(board: &Board, side: Side, depth: u32) -> Option<Square> {
    let depth = depth.max(1);
    let (best, _value) = minimax(board, side, depth);
    #[cfg(feature = "logging")]
    match best {
        Some(mv) => log::debug!("depth-{depth} search for {side}: {mv} (value {_value})"),
        None => log::debug!("depth-{depth} search for {side}: no legal move"),
    }
    best
}

/// One node of the search tree. A node with no legal moves (or at depth 0)
/// is a leaf and reports the static evaluation; a blocked side is not
/// expanded further.
pub(crate) fn minimax(board: &Board, to_move: Side, depth: u32) -> (Option<Square>, i32) {
    let moves = board.legal_moves(to_move);
    if depth == 0 || moves.is_empty() {
        return (None, evaluate(board, Side::White));
    }

    let maximizing = to_move == Side::White;
    let mut best = None;
    let mut best_value = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let mut child = board.clone();
        child.apply_move(mv, to_move);
        let (_, value) = minimax(&child, to_move.opponent(), depth - 1);

        let improves = if maximizing {
            value > best_value
        } else {
            value < best_value
        };
        if improves {
            best = Some(mv);
            best_value = value;
        }
    }

    (best, best_value)
}
