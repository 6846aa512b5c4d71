//! Static positional weight matrix.
//!
//! Corners are decisive (they can never be flipped back), cells adjacent
//! to an unclaimed corner hand the corner to the opponent, edges are
//! stable, interior cells slightly cede mobility. Symmetric under both
//! board reflections.

pub(crate) const WEIGHTS: [[i32; 8]; 8] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -1, -1, -1, -1, -50, -20],
    [10, -1, -1, -1, -1, -1, -1, 10],
    [5, -1, -1, -2, -2, -1, -1, 5],
    [5, -1, -1, -2, -2, -1, -1, 5],
    [10, -1, -1, -1, -1, -1, -1, 10],
    [-20, -50, -1, -1, -1, -1, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];
