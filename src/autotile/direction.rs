//! Compass directions and the 8-bit neighbor mask
//!
//! ```text
//! TopLeft(1)     Top(2)    TopRight(4)
//!   Left(8)        *         Right(16)
//! BottomLeft(32) Bottom(64) BottomRight(128)
//! ```

use std::fmt;

/// One of the eight neighbors of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Diagonal neighbor above and to the left
    TopLeft,
    /// Neighbor directly above
    Top,
    /// Diagonal neighbor above and to the right
    TopRight,
    /// Neighbor directly to the left
    Left,
    /// Neighbor directly to the right
    Right,
    /// Diagonal neighbor below and to the left
    BottomLeft,
    /// Neighbor directly below
    Bottom,
    /// Diagonal neighbor below and to the right
    BottomRight,
}

impl Direction {
    /// All directions in ascending bit order
    pub const ALL: [Self; 8] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Left,
        Self::Right,
        Self::BottomLeft,
        Self::Bottom,
        Self::BottomRight,
    ];

    /// Clockwise ring starting at the top-left diagonal
    ///
    /// Corner classification indexes into this ring, so the order is fixed.
    pub const CYCLIC_ORDER: [Self; 8] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
    ];

    /// Bit value of this direction in a neighbor mask
    pub const fn bit(self) -> u8 {
        match self {
            Self::TopLeft => 1,
            Self::Top => 2,
            Self::TopRight => 4,
            Self::Left => 8,
            Self::Right => 16,
            Self::BottomLeft => 32,
            Self::Bottom => 64,
            Self::BottomRight => 128,
        }
    }

    /// Grid offset `(dx, dy)` of the neighbor, with y growing downwards
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::TopLeft => (-1, -1),
            Self::Top => (0, -1),
            Self::TopRight => (1, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::BottomLeft => (-1, 1),
            Self::Bottom => (0, 1),
            Self::BottomRight => (1, 1),
        }
    }

    /// Direction at a position of the cyclic ring
    ///
    /// Positions wrap modulo 8, so `-1` names the last entry.
    pub const fn at_ring_position(position: i32) -> Self {
        let wrapped = position.rem_euclid(8) as usize;
        match wrapped {
            0 => Self::TopLeft,
            1 => Self::Top,
            2 => Self::TopRight,
            3 => Self::Right,
            4 => Self::BottomRight,
            5 => Self::Bottom,
            6 => Self::BottomLeft,
            _ => Self::Left,
        }
    }
}

/// Set of neighbors that belong to the same autotile
///
/// Every `u8` is a valid mask, and the mask value doubles as the variant
/// index inside a compiled strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct NeighborMask(u8);

impl NeighborMask {
    /// No neighbors present
    pub const EMPTY: Self = Self(0);
    /// All eight neighbors present
    pub const FULL: Self = Self(u8::MAX);

    /// Wrap raw mask bits
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw mask bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Mask value as a strip variant index
    pub const fn variant(self) -> usize {
        self.0 as usize
    }

    /// Test whether a neighbor is present
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Return a copy with the neighbor added
    #[must_use]
    pub const fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.bit())
    }

    /// Add a neighbor in place
    pub const fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// Iterate over every possible mask in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=u8::MAX).map(Self)
    }
}

impl From<u8> for NeighborMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl FromIterator<Direction> for NeighborMask {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for NeighborMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}
