//! Runs A* on the bundled sample map (or a random one) and prints the
//! resulting routes.
//!
//! ```text
//! gridstar-demo [--diagonal] [--random] [--seed N] [--size WxH]
//! ```
//!
//! Set `RUST_LOG=debug` to see the search log.

use std::error::Error;

use clap::Parser;
use gridstar_core::Coord;
use gridstar_map::{GenConfig, MapGen, SAMPLE_END, SAMPLE_MAP, SAMPLE_START, TerrainMap, cheapest_cost};
use gridstar_paths::{AStar, Connectivity, chebyshev, manhattan};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Run A* on the sample map or a generated one.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Also search with diagonal moves
    #[arg(long)]
    diagonal: bool,

    /// Generate a random map instead of using the sample
    #[arg(long)]
    random: bool,

    /// Seed for the random map (implies --random)
    #[arg(long)]
    seed: Option<u64>,

    /// Size of the random map as WxH (implies --random)
    #[arg(long, value_parser = parse_size)]
    size: Option<MapSize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MapSize {
    width: i32,
    height: i32,
}

fn parse_size(s: &str) -> Result<MapSize, String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
    let width: i32 = w.parse().map_err(|e| format!("width {w:?}: {e}"))?;
    let height: i32 = h.parse().map_err(|e| format!("height {h:?}: {e}"))?;
    if width <= 0 || height <= 0 {
        return Err(format!("size must be positive, got {s:?}"));
    }
    Ok(MapSize { width, height })
}

#[derive(Debug, Clone, PartialEq)]
struct DemoConfig {
    diagonal: bool,
    random: bool,
    seed: u64,
    map_gen: GenConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            diagonal: false,
            random: false,
            seed: 42,
            map_gen: GenConfig::default(),
        }
    }
}

impl From<Args> for DemoConfig {
    fn from(args: Args) -> Self {
        let mut config = Self {
            diagonal: args.diagonal,
            random: args.random || args.seed.is_some() || args.size.is_some(),
            ..Self::default()
        };
        if let Some(seed) = args.seed {
            config.seed = seed;
        }
        if let Some(size) = args.size {
            config.map_gen.width = size.width;
            config.map_gen.height = size.height;
        }
        config
    }
}

fn run_search(map: &TerrainMap, connectivity: Connectivity, start: Coord, end: Coord) {
    let engine = AStar::new(map, connectivity, move |p: Coord| match connectivity {
        Connectivity::Cardinal => manhattan(p, end),
        Connectivity::Diagonal => chebyshev(p, end),
    });
    let (path, stats) = engine.find_with_stats(start, end);
    println!("{connectivity:?} route from {start} to {end}:");
    match path {
        Some(path) => {
            print!("{}", map.render(&path));
            let cost = map.path_cost::<i32>(&path).unwrap_or_default();
            let best: Option<i32> = cheapest_cost(map, connectivity, start, end);
            println!("steps: {}, cost: {cost}, cheapest: {best:?}", path.len() - 1);
        }
        None => println!("no path"),
    }
    println!(
        "expanded: {}, pushed: {}, reparented: {}, visited: {}\n",
        stats.expanded, stats.pushed, stats.reparented, stats.visited
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = DemoConfig::from(Args::parse());
    log::info!("demo config: {config:?}");

    let (map, start, end) = if config.random {
        let mut mg = MapGen::new(StdRng::seed_from_u64(config.seed));
        let map = mg.random_map(&config.map_gen);
        let (Some(start), Some(end)) = (mg.random_open_cell(&map), mg.random_open_cell(&map)) else {
            println!("generated map has no open cells:\n{map}");
            return Ok(());
        };
        (map, start, end)
    } else {
        (TerrainMap::parse(SAMPLE_MAP)?, SAMPLE_START, SAMPLE_END)
    };

    println!("{map}");
    run_search(&map, Connectivity::Cardinal, start, end);
    if config.diagonal {
        run_search(&map, Connectivity::Diagonal, start, end);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn config(args: &[&str]) -> DemoConfig {
        let argv = std::iter::once("gridstar-demo").chain(args.iter().copied());
        DemoConfig::from(Args::try_parse_from(argv).unwrap())
    }

    fn parse_err(args: &[&str]) -> ErrorKind {
        let argv = std::iter::once("gridstar-demo").chain(args.iter().copied());
        Args::try_parse_from(argv).unwrap_err().kind()
    }

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        assert_eq!(config(&[]), DemoConfig::default());
    }

    #[test]
    fn flags() {
        let config = config(&["--diagonal", "--seed", "7", "--size", "20x10"]);
        assert!(config.diagonal);
        assert!(config.random);
        assert_eq!(config.seed, 7);
        assert_eq!((config.map_gen.width, config.map_gen.height), (20, 10));
    }

    #[test]
    fn random_alone_keeps_default_seed() {
        let config = config(&["--random"]);
        assert!(config.random);
        assert!(!config.diagonal);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn size_values() {
        assert_eq!(parse_size("3x4"), Ok(MapSize { width: 3, height: 4 }));
        assert!(parse_size("0x3").is_err());
        assert!(parse_size("3").is_err());
        assert!(parse_size("ax3").is_err());
    }

    #[test]
    fn errors() {
        assert_eq!(parse_err(&["--bogus"]), ErrorKind::UnknownArgument);
        assert_eq!(parse_err(&["--size", "0x3"]), ErrorKind::ValueValidation);
        assert_eq!(parse_err(&["--seed", "abc"]), ErrorKind::ValueValidation);
        assert!(Args::try_parse_from(["gridstar-demo", "--seed"]).is_err());
    }
}
