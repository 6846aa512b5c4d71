//! Precomputed direction rays.
//!
//! Legality checking and flipping both walk outward from a candidate square
//! along each of the 8 compass directions. The squares along every ray are
//! computed once, so the hot loops index a table instead of redoing signed
//! coordinate arithmetic.

use once_cell::sync::Lazy;

use super::Square;

/// The 8 compass unit vectors (Δrow, Δcol)
pub(crate) const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// `RAYS[sq.as_index()][d]` lists the on-board squares along `DIRECTIONS[d]`
/// starting from the cell adjacent to `sq`, nearest first.
pub(crate) static RAYS: Lazy<Vec<[Vec<Square>; 8]>> = Lazy::new(|| {
    (0..64)
        .map(|idx| {
            let origin = Square::from_index(idx);
            let mut rays: [Vec<Square>; 8] = Default::default();
            for (d, &(dr, dc)) in DIRECTIONS.iter().enumerate() {
                let mut r = origin.row() as i8 + dr;
                let mut c = origin.col() as i8 + dc;
                while (0..8).contains(&r) && (0..8).contains(&c) {
                    rays[d].push(Square(r as usize, c as usize));
                    r += dr;
                    c += dc;
                }
            }
            rays
        })
        .collect()
});
