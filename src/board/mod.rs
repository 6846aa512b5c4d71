//! Othello board representation and game rules.
//!
//! The board is an 8x8 grid of cells, each empty or holding a Black or
//! White disc. Legality checking, move application with flipping, scoring,
//! and terminal detection all live here; the automated opponent is in
//! [`search`].
//!
//! # Example
//! ```
//! use othello_engine::board::{Board, Side};
//!
//! let board = Board::opening();
//! let moves = board.legal_moves(Side::Black);
//! assert_eq!(moves.len(), 4);
//! ```

mod apply;
mod error;
mod movegen;
mod notation;
mod rays;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{BoardParseError, SquareError};
pub use state::{Board, Score};
pub use types::{Cell, Side, Square};

// Public API - move choosers
pub use search::{choose_move, choose_move_parallel, evaluate, random_move, DEFAULT_DEPTH};
