//! Exhaustive reference solver used to check A* results.

use std::collections::HashMap;

use gridstar_core::{Coord, Cost};
use gridstar_paths::{Connectivity, MapOracle};
use gridstar_queue::PriorityQueue;

/// Cost of the cheapest path from `start` to `end`, found with a plain
/// Dijkstra search that needs no heuristic.
///
/// Follows the same conventions as [`gridstar_paths::find`]: `None` when
/// `start == end`, when either endpoint is not visitable, or when the goal is
/// unreachable. Entry costs must be non-negative.
pub fn cheapest_cost<M, C>(map: &M, connectivity: Connectivity, start: Coord, end: Coord) -> Option<C>
where
    M: MapOracle<C> + ?Sized,
    C: Cost,
{
    if start == end || !map.is_visitable(start) || !map.is_visitable(end) {
        return None;
    }

    let mut best: HashMap<Coord, C> = HashMap::new();
    let mut open = PriorityQueue::new(|a: &(C, Coord), b: &(C, Coord)| a.0 <= b.0);
    best.insert(start, C::ZERO);
    open.push((C::ZERO, start));

    while let Some((cost, pos)) = open.pop() {
        if best.get(&pos).is_some_and(|&known| known < cost) {
            continue;
        }
        if pos == end {
            return Some(cost);
        }
        for next in connectivity.neighbors(pos) {
            if !map.is_visitable(next) {
                continue;
            }
            let candidate = cost + map.cost(next);
            if best.get(&next).is_none_or(|&known| candidate < known) {
                best.insert(next, candidate);
                open.push((candidate, next));
            }
        }
    }
    None
}
