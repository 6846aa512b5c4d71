//! Search module implementing the automated opponent.
//!
//! Features:
//! - Static positional evaluation over a fixed weight matrix
//! - Full-width fixed-depth minimax (no pruning; the tree is small enough
//!   that exhaustive search stays cheap at the depths used)
//! - Optional root-parallel variant with identical move selection
//! - Uniform-random baseline mover
//!
//! The search is a pure function of (board, side, depth): it simulates on
//! cloned boards and never mutates the caller's state.

mod minimax;
mod parallel;
mod random;
mod weights;

pub use minimax::{choose_move, evaluate, DEFAULT_DEPTH};
pub use parallel::choose_move_parallel;
pub use random::random_move;
