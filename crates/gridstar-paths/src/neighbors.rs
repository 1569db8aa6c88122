use gridstar_core::Coord;

/// The moves a search may take from one cell to the next.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Four axis-aligned moves.
    #[default]
    Cardinal,
    /// The four axis-aligned moves plus the four diagonals.
    Diagonal,
}

const ALL_OFFSETS: [Coord; 8] = [
    Coord::AXIS_OFFSETS[0],
    Coord::AXIS_OFFSETS[1],
    Coord::AXIS_OFFSETS[2],
    Coord::AXIS_OFFSETS[3],
    Coord::DIAGONAL_OFFSETS[0],
    Coord::DIAGONAL_OFFSETS[1],
    Coord::DIAGONAL_OFFSETS[2],
    Coord::DIAGONAL_OFFSETS[3],
];

impl Connectivity {
    /// `Diagonal` when `consider_diagonal_paths` is set, `Cardinal` otherwise.
    #[inline]
    pub fn from_diagonal(consider_diagonal_paths: bool) -> Self {
        if consider_diagonal_paths {
            Self::Diagonal
        } else {
            Self::Cardinal
        }
    }

    /// Neighbour offsets, axis moves first.
    #[inline]
    pub fn offsets(self) -> &'static [Coord] {
        match self {
            Self::Cardinal => &Coord::AXIS_OFFSETS,
            Self::Diagonal => &ALL_OFFSETS,
        }
    }

    /// Every neighbour of `c`, unfiltered.
    pub fn neighbors(self, c: Coord) -> impl Iterator<Item = Coord> {
        self.offsets().iter().map(move |&d| c + d)
    }

    /// Whether `step` is one of the permitted offsets.
    pub fn permits(self, step: Coord) -> bool {
        self.offsets().contains(&step)
    }
}
