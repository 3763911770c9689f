//! Food placement.
//!
//! Placement is rejection sampling over the playable area. Sampling is capped
//! so a nearly full board cannot spin forever; past the cap the remaining free
//! cells are enumerated and one is picked uniformly.

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::types::{Bounds, Position};

/// Sampling attempts per playable cell before falling back to a scan.
const ATTEMPTS_PER_CELL: usize = 4;

/// Pick a random free cell, or `None` when every cell is occupied.
pub fn place_food<R, F>(rng: &mut R, bounds: Bounds, occupied: F) -> Option<Position>
where
    R: Rng,
    F: Fn(Position) -> bool,
{
    if bounds.area() == 0 {
        return None;
    }

    for _ in 0..bounds.area() * ATTEMPTS_PER_CELL {
        let pos = Position::new(rng.gen_range(0..bounds.rows), rng.gen_range(0..bounds.cols));
        if !occupied(pos) {
            return Some(pos);
        }
    }

    bounds.cells().filter(|&p| !occupied(p)).choose(rng)
}
