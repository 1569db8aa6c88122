use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

use gridstar_core::{Coord, Cost};
use gridstar_queue::{OrderFn, PriorityQueue};

use crate::neighbors::Connectivity;
use crate::node::{NodeRef, SearchNode};
use crate::traits::MapOracle;

/// Counters gathered during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes popped from the open queue and expanded.
    pub expanded: usize,
    /// Pushes onto the open queue, including the start node.
    pub pushed: usize,
    /// Successful reparentings.
    pub reparented: usize,
    /// Distinct positions discovered.
    pub visited: usize,
}

/// Reusable A* engine bound to one map, connectivity and heuristic.
///
/// Every call to [`find`](Self::find) builds a fresh open queue and visited
/// cache, so one engine can serve any number of searches.
pub struct AStar<'m, M: ?Sized, C, H> {
    map: &'m M,
    connectivity: Connectivity,
    heuristic: H,
    _cost: PhantomData<fn() -> C>,
}

impl<'m, M, C, H> AStar<'m, M, C, H>
where
    M: MapOracle<C> + ?Sized,
    C: Cost,
    H: Fn(Coord) -> C,
{
    /// Create an engine. `heuristic` estimates the remaining cost from a
    /// position to the goal and must know the goal itself.
    pub fn new(map: &'m M, connectivity: Connectivity, heuristic: H) -> Self {
        Self {
            map,
            connectivity,
            heuristic,
            _cost: PhantomData,
        }
    }

    /// The connectivity used for neighbour expansion.
    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Compute the lowest-cost path from `start` to `end`.
    ///
    /// Returns the full path (including both endpoints) or `None` if
    /// `start == end`, either endpoint is not visitable, or no path exists.
    /// The path is optimal when the heuristic is admissible and consistent.
    pub fn find(&self, start: Coord, end: Coord) -> Option<Vec<Coord>> {
        self.find_with_stats(start, end).0
    }

    /// Like [`find`](Self::find), also returning the search counters.
    pub fn find_with_stats(&self, start: Coord, end: Coord) -> (Option<Vec<Coord>>, SearchStats) {
        if start == end {
            log::debug!("astar: start and end are both {start}");
            return (None, SearchStats::default());
        }
        if !self.map.is_visitable(start) {
            log::debug!("astar: start {start} is not visitable");
            return (None, SearchStats::default());
        }
        if !self.map.is_visitable(end) {
            log::debug!("astar: end {end} is not visitable");
            return (None, SearchStats::default());
        }

        log::debug!(
            "astar: searching {start} -> {end} ({:?})",
            self.connectivity
        );
        let search = Search {
            map: self.map,
            heuristic: &self.heuristic,
            offsets: self.connectivity.offsets(),
            open: PriorityQueue::new(by_total_cost as OrderFn<NodeRef<C>>),
            visited: HashMap::new(),
            stats: SearchStats::default(),
        };
        let (path, stats) = search.run(start, end);
        match &path {
            Some(p) => log::debug!("astar: found path of {} steps, {stats:?}", p.len() - 1),
            None => log::debug!("astar: no path, {stats:?}"),
        }
        (path, stats)
    }
}

/// Find the lowest-cost path from `start` to `end` on `map`.
///
/// `consider_diagonal_paths` adds the four diagonal moves to the four axis
/// moves. See [`AStar::find`] for the meaning of `None`.
pub fn find<M, C, H>(
    map: &M,
    consider_diagonal_paths: bool,
    heuristic: H,
    start: Coord,
    end: Coord,
) -> Option<Vec<Coord>>
where
    M: MapOracle<C> + ?Sized,
    C: Cost,
    H: Fn(Coord) -> C,
{
    AStar::new(map, Connectivity::from_diagonal(consider_diagonal_paths), heuristic).find(start, end)
}

fn by_total_cost<C: Cost>(a: &NodeRef<C>, b: &NodeRef<C>) -> bool {
    a.total_cost() <= b.total_cost()
}

// ---------------------------------------------------------------------------
// Per-call search state
// ---------------------------------------------------------------------------

struct Search<'s, M: ?Sized, C, H> {
    map: &'s M,
    heuristic: &'s H,
    offsets: &'static [Coord],
    open: PriorityQueue<NodeRef<C>>,
    /// Position -> node. Entries are never removed during a search.
    visited: HashMap<Coord, NodeRef<C>>,
    stats: SearchStats,
}

impl<M, C, H> Search<'_, M, C, H>
where
    M: MapOracle<C> + ?Sized,
    C: Cost,
    H: Fn(Coord) -> C,
{
    fn run(mut self, start: Coord, end: Coord) -> (Option<Vec<Coord>>, SearchStats) {
        self.enqueue_root(start);

        // A node may be popped again after being locked if it was pushed more
        // than once; it is expanded again, which cannot improve anything.
        while let Some(node) = self.open.pop() {
            if node.position() == end {
                self.stats.visited = self.visited.len();
                return (Some(node.path()), self.stats);
            }
            if node.is_locked() {
                log::trace!("astar: re-expanding locked {}", node.position());
            }
            node.lock();
            self.stats.expanded += 1;
            for &offset in self.offsets {
                self.enqueue(node.position() + offset, &node);
            }
        }

        self.stats.visited = self.visited.len();
        (None, self.stats)
    }

    fn enqueue_root(&mut self, position: Coord) {
        let node = SearchNode::root(position, (self.heuristic)(position));
        self.visited.insert(position, Rc::clone(&node));
        self.push(node);
    }

    fn enqueue(&mut self, position: Coord, parent: &NodeRef<C>) {
        if !self.map.is_visitable(position) {
            return;
        }
        if let Some(node) = self.visit(position, parent) {
            self.push(node);
        }
    }

    /// Create the node for `position`, or try to reparent the cached one.
    /// Returns the node to push, if any.
    fn visit(&mut self, position: Coord, parent: &NodeRef<C>) -> Option<NodeRef<C>> {
        let heuristic_remaining = (self.heuristic)(position);
        if let Some(node) = self.visited.get(&position) {
            let updated = node.reparent_if_cheaper(heuristic_remaining, parent);
            if updated.is_some() {
                self.stats.reparented += 1;
                log::trace!("astar: reparented {position} under {}", parent.position());
            }
            return updated;
        }

        let node = SearchNode::child(
            position,
            self.map.cost(position),
            heuristic_remaining,
            parent,
        );
        self.visited.insert(position, Rc::clone(&node));
        Some(node)
    }

    #[inline]
    fn push(&mut self, node: NodeRef<C>) {
        self.stats.pushed += 1;
        self.open.push(node);
    }
}
