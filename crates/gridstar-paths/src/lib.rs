//! A* shortest-path search over abstract 2D grids.
//!
//! The grid itself is described by a caller-supplied [`MapOracle`]: which
//! cells can be entered and what entering them costs. Costs are generic over
//! [`Cost`](gridstar_core::Cost), so the same engine runs on integer or
//! floating-point cost models.
//!
//! - [`find`] runs a single search.
//! - [`AStar`] binds a map, a [`Connectivity`] and a heuristic for repeated
//!   searches, and can report [`SearchStats`].
//!
//! Nodes discovered during a search are shared handles kept in a
//! position-keyed visited cache; the open set is a
//! [`PriorityQueue`](gridstar_queue::PriorityQueue) of those handles ordered
//! by total cost, so a reparented node is re-pushed rather than moved.
//!
//! A search runs synchronously to completion on the calling thread. Nothing
//! is shared between searches.

mod astar;
mod distance;
mod neighbors;
mod node;
mod traits;

pub use astar::{AStar, SearchStats, find};
pub use distance::{chebyshev, manhattan, no_estimate};
pub use neighbors::Connectivity;
pub use traits::MapOracle;
