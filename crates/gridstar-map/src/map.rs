//! A rectangular terrain grid usable as a search map.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use gridstar_core::{Bounds, Coord, Cost};
use gridstar_paths::MapOracle;

use crate::error::MapError;
use crate::terrain::Terrain;

/// Glyph for the first cell of a rendered path.
pub const START_GLYPH: char = 'S';
/// Glyph for the last cell of a rendered path.
pub const GOAL_GLYPH: char = 'G';
/// Glyph for the cells in between.
pub const PATH_GLYPH: char = '*';

/// A grid of [`Terrain`] cells anchored at the origin.
///
/// Coordinates outside the grid are never visitable, so searches may be
/// started from or aimed at any coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainMap {
    bounds: Bounds,
    cells: Vec<Terrain>,
}

impl TerrainMap {
    /// Create a `width` × `height` map of [`Terrain::Plain`].
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Terrain::Plain)
    }

    /// Create a `width` × `height` map filled with `terrain`.
    pub fn filled(width: i32, height: i32, terrain: Terrain) -> Self {
        let bounds = Bounds::with_size(width.max(0), height.max(0));
        Self {
            bounds,
            cells: vec![terrain; bounds.len()],
        }
    }

    /// Parse the text map format: one row per line, one glyph per cell.
    ///
    /// Surrounding whitespace on each line and blank lines before the first
    /// and after the last row are ignored.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let first = lines
            .iter()
            .position(|l| !l.is_empty())
            .ok_or(MapError::Empty)?;
        let last = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(first);
        let rows = &lines[first..=last];

        let width = rows[0].chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(MapError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let terrain = Terrain::from_glyph(ch).ok_or(MapError::InvalidTile {
                    ch,
                    pos: Coord::new(x as i32, y as i32),
                })?;
                cells.push(terrain);
            }
        }

        Ok(Self {
            bounds: Bounds::with_size(width as i32, rows.len() as i32),
            cells,
        })
    }

    /// The map's extent.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Map width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Map height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Terrain at `c`, or `None` outside the map.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Terrain> {
        self.bounds.index_of(c).map(|i| self.cells[i])
    }

    /// Set the terrain at `c`. Returns `false` if `c` is outside the map.
    pub fn set(&mut self, c: Coord, terrain: Terrain) -> bool {
        match self.bounds.index_of(c) {
            Some(i) => {
                self.cells[i] = terrain;
                true
            }
            None => false,
        }
    }

    /// Whether `c` is inside the map and passable.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(Terrain::is_passable)
    }

    /// Number of cells holding `terrain`.
    pub fn count(&self, terrain: Terrain) -> usize {
        self.cells.iter().filter(|&&t| t == terrain).count()
    }

    /// Real cost of walking `path`: the sum of entry costs of every cell
    /// after the first. `None` if the path touches an impassable cell.
    pub fn path_cost<C: Cost + From<u8>>(&self, path: &[Coord]) -> Option<C> {
        path.iter().skip(1).try_fold(C::ZERO, |acc, &c| {
            let cost = self.at(c)?.cost()?;
            Some(acc + C::from(cost))
        })
    }

    /// Render the map with `path` drawn over it.
    ///
    /// The first cell is drawn as [`START_GLYPH`], the last as
    /// [`GOAL_GLYPH`] and the rest as [`PATH_GLYPH`]. Every row ends with a
    /// newline.
    pub fn render(&self, path: &[Coord]) -> String {
        let on_path: HashSet<Coord> = path.iter().copied().collect();
        let (first, last) = (path.first(), path.last());
        let mut text = String::with_capacity(self.cells.len() + self.height() as usize);
        for (c, terrain) in self.bounds.iter().zip(&self.cells) {
            let ch = if Some(&c) == first {
                START_GLYPH
            } else if Some(&c) == last {
                GOAL_GLYPH
            } else if on_path.contains(&c) {
                PATH_GLYPH
            } else {
                terrain.glyph()
            };
            text.push(ch);
            if c.x == self.bounds.max.x - 1 {
                text.push('\n');
            }
        }
        text
    }
}

impl<C: Cost + From<u8>> MapOracle<C> for TerrainMap {
    #[inline]
    fn is_visitable(&self, position: Coord) -> bool {
        self.is_passable(position)
    }

    #[inline]
    fn cost(&self, position: Coord) -> C {
        self.at(position)
            .and_then(Terrain::cost)
            .map_or(C::ZERO, C::from)
    }
}

impl FromStr for TerrainMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TerrainMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
        ####
        #.~#
        #^.#
        ####
    ";

    #[test]
    fn parse_and_size() {
        let m = TerrainMap::parse(ROOM).unwrap();
        assert_eq!(m.width(), 4);
        assert_eq!(m.height(), 4);
        assert_eq!(m.at(Coord::new(1, 1)), Some(Terrain::Plain));
        assert_eq!(m.at(Coord::new(2, 1)), Some(Terrain::Water));
        assert_eq!(m.at(Coord::new(1, 2)), Some(Terrain::Hill));
        assert_eq!(m.at(Coord::new(4, 0)), None);
        assert_eq!(m.count(Terrain::Wall), 12);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(TerrainMap::parse("\n  \n"), Err(MapError::Empty));
        assert_eq!(
            TerrainMap::parse("...\n..\n"),
            Err(MapError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        let err = TerrainMap::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidTile {
                ch: 'x',
                pos: Coord::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn display_round_trips() {
        let m: TerrainMap = ROOM.parse().unwrap();
        let text = m.to_string();
        assert_eq!(text, "####\n#.~#\n#^.#\n####\n");
        assert_eq!(TerrainMap::parse(&text).unwrap(), m);
    }

    #[test]
    fn oracle_costs() {
        let m = TerrainMap::parse(ROOM).unwrap();
        assert!(MapOracle::<i32>::is_visitable(&m, Coord::new(1, 1)));
        assert!(!MapOracle::<i32>::is_visitable(&m, Coord::new(0, 0)));
        assert!(!MapOracle::<i32>::is_visitable(&m, Coord::new(-1, 2)));
        assert_eq!(MapOracle::<i32>::cost(&m, Coord::new(2, 1)), 2);
        assert_eq!(MapOracle::<f32>::cost(&m, Coord::new(1, 2)), 3.0);
    }

    #[test]
    fn set_and_path_cost() {
        let mut m = TerrainMap::new(3, 1);
        assert!(m.set(Coord::new(1, 0), Terrain::Hill));
        assert!(!m.set(Coord::new(3, 0), Terrain::Hill));
        let path = [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)];
        assert_eq!(m.path_cost::<i32>(&path), Some(4));
        m.set(Coord::new(2, 0), Terrain::Wall);
        assert_eq!(m.path_cost::<i32>(&path), None);
    }

    #[test]
    fn render_marks_path() {
        let m = TerrainMap::new(3, 2);
        let path = [Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)];
        assert_eq!(m.render(&path), "S*.\n.G.\n");
        assert_eq!(m.render(&[]), "...\n...\n");
    }
}
