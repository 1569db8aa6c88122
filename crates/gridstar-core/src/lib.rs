//! **gridstar-core**: foundational types for gridstar path searches.
//!
//! This crate provides the grid geometry ([`Coord`], [`Bounds`]) and the
//! [`Cost`] numeric capability shared by the queue, the search engine and
//! map implementations.

pub mod cost;
pub mod geom;

pub use cost::Cost;
pub use geom::{Bounds, BoundsIter, Coord};
