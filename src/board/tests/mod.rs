//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `opening.rs` - Opening position and initial legal moves
//! - `rules.rs` - Legality, flipping, scoring, terminal detection
//! - `notation.rs` - Diagram and square notation
//! - `search.rs` - Evaluator and minimax behavior
//! - `proptest.rs` - Property-based tests

mod notation;
mod rules;
