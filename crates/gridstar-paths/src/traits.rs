use gridstar_core::{Coord, Cost};

/// Read-only description of a grid: which cells can be entered and what
/// entering them costs.
///
/// Implementations must be safe to query concurrently if several searches
/// share one map across threads; the engine itself never mutates the map.
pub trait MapOracle<C: Cost> {
    /// Whether `position` can be part of a path. Positions outside the map
    /// must report `false`.
    fn is_visitable(&self, position: Coord) -> bool;

    /// Real cost of entering `position`. Only queried for visitable
    /// positions.
    fn cost(&self, position: Coord) -> C;
}

impl<C: Cost, M: MapOracle<C> + ?Sized> MapOracle<C> for &M {
    #[inline]
    fn is_visitable(&self, position: Coord) -> bool {
        (**self).is_visitable(position)
    }

    #[inline]
    fn cost(&self, position: Coord) -> C {
        (**self).cost(position)
    }
}
