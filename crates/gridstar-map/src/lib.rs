//! **gridstar-map**: a concrete terrain map for gridstar searches.
//!
//! [`TerrainMap`] is a rectangular grid of [`Terrain`] tiles that implements
//! [`gridstar_paths::MapOracle`] for every cost type convertible from `u8`.
//! The crate also parses and renders the text map format, generates random
//! maps with [`MapGen`], and provides an exhaustive [`cheapest_cost`] solver
//! for checking search results.
//!
//! ```
//! use gridstar_map::{TerrainMap, SAMPLE_END, SAMPLE_MAP, SAMPLE_START};
//! use gridstar_paths::{find, manhattan};
//!
//! let map = TerrainMap::parse(SAMPLE_MAP).unwrap();
//! let path = find(&map, false, |p| manhattan(p, SAMPLE_END), SAMPLE_START, SAMPLE_END).unwrap();
//! assert_eq!(map.path_cost::<i32>(&path), Some(16));
//! ```

mod error;
mod map;
mod mapgen;
mod reference;
mod scenario;
mod terrain;

pub use error::MapError;
pub use map::{GOAL_GLYPH, PATH_GLYPH, START_GLYPH, TerrainMap};
pub use mapgen::{GenConfig, MapGen};
pub use reference::cheapest_cost;
pub use scenario::{SAMPLE_END, SAMPLE_MAP, SAMPLE_START};
pub use terrain::Terrain;
