//! Core value types for the board module.

mod cell;
mod square;

pub use cell::{Cell, Side};
pub use square::Square;
