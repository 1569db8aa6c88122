//! Random terrain generation for demos and tests.

use gridstar_core::Coord;
use rand::{Rng, RngExt};

use crate::map::TerrainMap;
use crate::terrain::Terrain;

/// Parameters for [`MapGen::random_map`].
///
/// Each cell rolls once: below `wall_chance` it becomes a wall, below
/// `wall_chance + water_chance` water, below the sum of all three a hill,
/// otherwise plain ground.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    pub width: i32,
    pub height: i32,
    pub wall_chance: f64,
    pub water_chance: f64,
    pub hill_chance: f64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            wall_chance: 0.25,
            water_chance: 0.10,
            hill_chance: 0.10,
        }
    }
}

/// Map generator driven by a caller-supplied random source.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    /// Create a generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a map according to `config`.
    pub fn random_map(&mut self, config: &GenConfig) -> TerrainMap {
        log::debug!("mapgen: {config:?}");
        let mut map = TerrainMap::new(config.width, config.height);
        let water = config.wall_chance + config.water_chance;
        let hill = water + config.hill_chance;
        for c in map.bounds().iter() {
            let roll: f64 = self.rng.random_range(0.0..1.0);
            let terrain = if roll < config.wall_chance {
                Terrain::Wall
            } else if roll < water {
                Terrain::Water
            } else if roll < hill {
                Terrain::Hill
            } else {
                Terrain::Plain
            };
            map.set(c, terrain);
        }
        map
    }

    /// A uniformly chosen passable cell, or `None` if the map has none.
    pub fn random_open_cell(&mut self, map: &TerrainMap) -> Option<Coord> {
        let open: Vec<Coord> = map.bounds().iter().filter(|&c| map.is_passable(c)).collect();
        if open.is_empty() {
            return None;
        }
        Some(open[self.rng.random_range(0..open.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn same_seed_same_map() {
        let config = GenConfig::default();
        let a = MapGen::new(StdRng::seed_from_u64(7)).random_map(&config);
        let b = MapGen::new(StdRng::seed_from_u64(7)).random_map(&config);
        assert_eq!(a, b);
        assert_eq!(a.width(), 16);
        assert_eq!(a.height(), 16);
    }

    #[test]
    fn all_walls() {
        let config = GenConfig {
            wall_chance: 1.0,
            ..GenConfig::default()
        };
        let mut mg = MapGen::new(StdRng::seed_from_u64(1));
        let map = mg.random_map(&config);
        assert_eq!(map.count(Terrain::Wall), 16 * 16);
        assert_eq!(mg.random_open_cell(&map), None);
    }

    #[test]
    fn no_walls() {
        let config = GenConfig {
            width: 10,
            height: 5,
            wall_chance: 0.0,
            ..GenConfig::default()
        };
        let mut mg = MapGen::new(StdRng::seed_from_u64(3));
        let map = mg.random_map(&config);
        assert_eq!(map.count(Terrain::Wall), 0);
        let c = mg.random_open_cell(&map).unwrap();
        assert!(map.is_passable(c));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let config = GenConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
