pub mod board;
pub mod game;

pub use board::{Board, Cell, Score, Side, Square};
pub use game::GameState;
