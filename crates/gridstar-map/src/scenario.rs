//! The bundled sample scenario used by the demo binary.

use gridstar_core::Coord;

/// An 8×8 map with a walled pocket around [`SAMPLE_END`].
pub const SAMPLE_MAP: &str = "\
~.......
~.......
....#...
..#####.
..#..#~~
..#.#..~
~.#...##
~.....#.
";

/// Start position for [`SAMPLE_MAP`].
pub const SAMPLE_START: Coord = Coord::new(4, 0);

/// Goal position for [`SAMPLE_MAP`], inside the walled pocket.
pub const SAMPLE_END: Coord = Coord::new(4, 4);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TerrainMap;
    use crate::reference::cheapest_cost;
    use gridstar_paths::{AStar, Connectivity, chebyshev, find, manhattan};

    const AXIS_RENDER: &str = "\
~...S...
~..**...
.***#...
.*#####.
.*#*G#~~
.*#*#..~
~*#*..##
~***..#.
";

    const DIAGONAL_RENDER: &str = "\
~...S...
~....*..
....#.*.
..#####*
..#.G#*~
..#.#*.~
~.#...##
~.....#.
";

    fn sample() -> TerrainMap {
        TerrainMap::parse(SAMPLE_MAP).unwrap()
    }

    #[test]
    fn axis_route_integer_costs() {
        let map = sample();
        let path = find(&map, false, |p| manhattan(p, SAMPLE_END), SAMPLE_START, SAMPLE_END).unwrap();
        assert_eq!(map.render(&path), AXIS_RENDER);
        assert_eq!(map.path_cost::<i32>(&path), Some(16));
        assert_eq!(path.len(), 17);
    }

    #[test]
    fn axis_route_float_costs() {
        let map = sample();
        let path = find(
            &map,
            false,
            |p| manhattan(p, SAMPLE_END) as f32,
            SAMPLE_START,
            SAMPLE_END,
        )
        .unwrap();
        assert_eq!(map.render(&path), AXIS_RENDER);
        assert_eq!(map.path_cost::<f32>(&path), Some(16.0));
    }

    #[test]
    fn diagonal_route() {
        let map = sample();
        let path = find(&map, true, |p| manhattan(p, SAMPLE_END), SAMPLE_START, SAMPLE_END).unwrap();
        assert_eq!(map.render(&path), DIAGONAL_RENDER);
        assert_eq!(
            path,
            vec![
                Coord::new(4, 0),
                Coord::new(5, 1),
                Coord::new(6, 2),
                Coord::new(7, 3),
                Coord::new(6, 4),
                Coord::new(5, 5),
                Coord::new(4, 4),
            ]
        );
        assert_eq!(map.path_cost::<i32>(&path), Some(7));
    }

    #[test]
    fn diagonal_is_no_worse_than_axis() {
        let map = sample();
        let axis = find(&map, false, |p| manhattan(p, SAMPLE_END), SAMPLE_START, SAMPLE_END).unwrap();
        let diag = find(&map, true, |p| chebyshev(p, SAMPLE_END), SAMPLE_START, SAMPLE_END).unwrap();
        assert!(diag.len() <= axis.len());
        assert!(diag.iter().all(|&c| map.is_passable(c)));
        assert!(map.path_cost::<i32>(&diag) <= map.path_cost::<i32>(&axis));
    }

    #[test]
    fn costs_match_reference() {
        let map = sample();
        let axis: Option<i32> = cheapest_cost(&map, Connectivity::Cardinal, SAMPLE_START, SAMPLE_END);
        let diag: Option<i32> = cheapest_cost(&map, Connectivity::Diagonal, SAMPLE_START, SAMPLE_END);
        assert_eq!(axis, Some(16));
        assert_eq!(diag, Some(7));
    }

    #[test]
    fn unreachable_corner() {
        let map = sample();
        let end = Coord::new(7, 7);
        assert_eq!(find(&map, false, |p| manhattan(p, end), SAMPLE_START, end), None);
        assert_eq!(find(&map, true, |p| chebyshev(p, end), SAMPLE_START, end), None);
    }

    #[test]
    fn enclosed_start_has_no_path() {
        let map = sample();
        let start = Coord::new(7, 7);
        let h = |p| manhattan(p, SAMPLE_END);
        assert_eq!(find(&map, false, h, start, SAMPLE_END), None);
        assert_eq!(find(&map, true, h, start, SAMPLE_END), None);

        for conn in [Connectivity::Cardinal, Connectivity::Diagonal] {
            let (path, stats) = AStar::new(&map, conn, h).find_with_stats(start, SAMPLE_END);
            assert_eq!(path, None);
            assert_eq!(stats.expanded, 1);
            assert_eq!(stats.pushed, 1);
            assert_eq!(stats.visited, 1);
        }
    }

    #[test]
    fn invalid_endpoints() {
        let map = sample();
        let h = |p| manhattan(p, SAMPLE_END);
        assert_eq!(find(&map, false, h, Coord::new(-1, 0), SAMPLE_END), None);
        assert_eq!(find(&map, false, h, SAMPLE_START, Coord::new(4, 1000)), None);
        assert_eq!(find(&map, true, h, SAMPLE_START, SAMPLE_START), None);
    }

    #[test]
    fn stats_are_reported() {
        let map = sample();
        let engine = AStar::new(&map, Connectivity::Cardinal, |p| manhattan(p, SAMPLE_END));
        let (path, stats) = engine.find_with_stats(SAMPLE_START, SAMPLE_END);
        assert!(path.is_some());
        assert!(stats.expanded > 0);
        assert!(stats.visited >= 17);
        assert!(stats.pushed >= stats.visited);
    }
}
