//! Geometry primitives: [`Coord`] and [`Bounds`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A 2D integer grid coordinate. X grows right, Y grows down.
///
/// Equality and hashing depend on both fields only, so coordinates are
/// usable directly as map keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// The four axis-aligned unit offsets (west, north, south, east).
    pub const AXIS_OFFSETS: [Coord; 4] = [
        Self::new(-1, 0),
        Self::new(0, -1),
        Self::new(0, 1),
        Self::new(1, 0),
    ];

    /// The four diagonal unit offsets (north-west, south-west, north-east,
    /// south-east).
    pub const DIAGONAL_OFFSETS: [Coord; 4] = [
        Self::new(-1, -1),
        Self::new(-1, 1),
        Self::new(1, -1),
        Self::new(1, 1),
    ];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The cells `min.x..max.x` × `min.y..max.y`. Maps use it to decide which
/// coordinates exist at all.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Coord,
    pub max: Coord,
}

impl Bounds {
    /// Bounds spanning `min` (inclusive) to `max` (exclusive).
    #[inline]
    pub const fn new(min: Coord, max: Coord) -> Self {
        Self { min, max }
    }

    /// Bounds of a `width` × `height` grid anchored at the origin.
    #[inline]
    pub const fn with_size(width: i32, height: i32) -> Self {
        Self::new(Coord::new(0, 0), Coord::new(width, height))
    }

    /// Number of columns, zero when inverted.
    #[inline]
    pub fn width(self) -> i32 {
        (self.max.x - self.min.x).max(0)
    }

    /// Number of rows, zero when inverted.
    #[inline]
    pub fn height(self) -> i32 {
        (self.max.y - self.min.y).max(0)
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Whether no cell is covered.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether `c` is one of the covered cells.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        (self.min.x..self.max.x).contains(&c.x) && (self.min.y..self.max.y).contains(&c.y)
    }

    /// Row-major position of `c` in a buffer of [`len`](Self::len) cells, or
    /// `None` when `c` is not covered.
    #[inline]
    pub fn index_of(self, c: Coord) -> Option<usize> {
        self.contains(c).then(|| {
            let row = (c.y - self.min.y) as usize;
            let col = (c.x - self.min.x) as usize;
            row * self.width() as usize + col
        })
    }

    /// Every covered coordinate, row by row. Yields cells in the same order
    /// as [`index_of`](Self::index_of) numbers them.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
            end: self.len(),
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coord;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

/// Row-major iterator over the coordinates in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
    end: usize,
}

impl Iterator for BoundsIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.end {
            return None;
        }
        let width = self.bounds.width() as usize;
        let (row, col) = (self.next / width, self.next % width);
        self.next += 1;
        Some(Coord::new(
            self.bounds.min.x + col as i32,
            self.bounds.min.y + row as i32,
        ))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for BoundsIter {}
