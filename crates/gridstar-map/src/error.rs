use std::fmt;

use gridstar_core::Coord;

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The text holds no rows.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a terrain glyph was found.
    InvalidTile { ch: char, pos: Coord },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no rows"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "map: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidTile { ch, pos } => write!(f, "map: invalid tile {ch:?} at {pos}"),
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_share_prefix() {
        let errors = [
            MapError::Empty,
            MapError::InconsistentWidth {
                row: 2,
                expected: 5,
                found: 4,
            },
            MapError::InvalidTile {
                ch: 'x',
                pos: Coord::new(3, 1),
            },
        ];
        for e in &errors {
            assert!(e.to_string().starts_with("map: "), "{e}");
        }
        assert_eq!(errors[0].to_string(), "map: no rows");
        assert_eq!(errors[1].to_string(), "map: row 2 has width 4, expected 5");
        assert_eq!(errors[2].to_string(), "map: invalid tile 'x' at (3, 1)");
    }
}
