//! Root-parallel minimax.
//!
//! Top-level candidate moves are mutually independent simulations on
//! cloned boards, so they can be searched on separate threads. Workers
//! report (candidate index, value) pairs through a shared mutex; the final
//! selection runs over the collected values in enumeration order, which
//! keeps the earliest-move tie-break identical to the serial search.

use parking_lot::Mutex;
use std::thread;

use super::minimax::minimax;
use crate::board::{Board, Side, Square};

/// Parallel variant of [`choose_move`](super::choose_move).
///
/// Selects exactly the move the serial search would, including ties.
#[must_use]
pub fn choose_move_parallel(board: &Board, side: Side, depth: u32) -> Option<Square> {
    let depth = depth.max(1);
    let moves = board.legal_moves(side);
    if moves.is_empty() {
        return None;
    }

    let values: Mutex<Vec<(usize, i32)>> = Mutex::new(Vec::with_capacity(moves.len()));
    thread::scope(|scope| {
        for (idx, &mv) in moves.iter().enumerate() {
            let values = &values;
            scope.spawn(move || {
                let mut child = board.clone();
                child.apply_move(mv, side);
                let (_, value) = minimax(&child, side.opponent(), depth - 1);
                values.lock().push((idx, value));
            });
        }
    });

    let mut values = values.into_inner();
    values.sort_unstable_by_key(|&(idx, _)| idx);

    let maximizing = side == Side::White;
    let (mut best_idx, mut best_value) = values[0];
    for &(idx, value) in &values[1..] {
        let improves = if maximizing {
            value > best_value
        } else {
            value < best_value
        };
        if improves {
            best_idx = idx;
            best_value = value;
        }
    }

    Some(moves[best_idx])
}
