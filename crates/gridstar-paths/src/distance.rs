use gridstar_core::{Coord, Cost};

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two coordinates.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Heuristic that never estimates anything; turns A* into Dijkstra.
#[inline]
pub fn no_estimate<C: Cost>(_: Coord) -> C {
    C::ZERO
}
