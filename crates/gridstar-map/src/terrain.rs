//! Terrain kinds and their movement costs.

use std::fmt;

/// One cell of a [`TerrainMap`](crate::TerrainMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Open ground, cost 1.
    #[default]
    Plain,
    /// Shallow water, cost 2.
    Water,
    /// Hills, cost 3.
    Hill,
    /// Impassable.
    Wall,
}

impl Terrain {
    /// All terrain kinds, cheapest first.
    pub const ALL: [Terrain; 4] = [Self::Plain, Self::Water, Self::Hill, Self::Wall];

    /// Entry cost, or `None` for impassable terrain.
    #[inline]
    pub const fn cost(self) -> Option<u8> {
        match self {
            Self::Plain => Some(1),
            Self::Water => Some(2),
            Self::Hill => Some(3),
            Self::Wall => None,
        }
    }

    /// Whether a path may enter this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        self.cost().is_some()
    }

    /// Character used in the text map format.
    pub const fn glyph(self) -> char {
        match self {
            Self::Plain => '.',
            Self::Water => '~',
            Self::Hill => '^',
            Self::Wall => '#',
        }
    }

    /// Parse a text map character.
    pub fn from_glyph(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.glyph() == ch)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
