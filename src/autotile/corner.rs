//! Classification of tile quadrants from the neighbor mask

use crate::autotile::direction::{Direction, NeighborMask};

/// Quadrant of a 32x32 tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Upper-left quadrant
    TopLeft,
    /// Upper-right quadrant
    TopRight,
    /// Lower-left quadrant
    BottomLeft,
    /// Lower-right quadrant
    BottomRight,
}

impl Corner {
    /// All corners in compositing order
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Position of the corner's diagonal in [`Direction::CYCLIC_ORDER`]
    pub const fn ring_position(self) -> i32 {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 2,
            Self::BottomRight => 4,
            Self::BottomLeft => 6,
        }
    }

    /// Pixel origin of the quadrant inside a tile
    pub const fn local_origin(self) -> (u32, u32) {
        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (16, 0),
            Self::BottomRight => (16, 16),
            Self::BottomLeft => (0, 16),
        }
    }

    /// Edge neighbor preceding the diagonal on the ring
    pub const fn leading_edge(self) -> Direction {
        Direction::at_ring_position(self.ring_position() - 1)
    }

    /// Diagonal neighbor touching this corner
    pub const fn diagonal(self) -> Direction {
        Direction::at_ring_position(self.ring_position())
    }

    /// Edge neighbor following the diagonal on the ring
    pub const fn trailing_edge(self) -> Direction {
        Direction::at_ring_position(self.ring_position() + 1)
    }
}

/// How a quadrant's artwork renders given its neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerShape {
    /// Both edges continue but the diagonal is missing
    ExtCorner,
    /// Neither edge continues
    IntCorner,
    /// Only the trailing edge continues
    FirstSide,
    /// Only the leading edge continues
    SecondSide,
    /// Both edges and the diagonal continue
    Plain,
}

impl CornerShape {
    /// All shapes in table column order
    pub const ALL: [Self; 5] = [
        Self::IntCorner,
        Self::ExtCorner,
        Self::FirstSide,
        Self::SecondSide,
        Self::Plain,
    ];
}

/// Classify one quadrant of a tile
///
/// Total over every corner and mask.
pub const fn classify(corner: Corner, mask: NeighborMask) -> CornerShape {
    let leading = mask.contains(corner.leading_edge());
    let trailing = mask.contains(corner.trailing_edge());

    match (leading, trailing) {
        (true, true) => {
            if mask.contains(corner.diagonal()) {
                CornerShape::Plain
            } else {
                CornerShape::ExtCorner
            }
        }
        (true, false) => CornerShape::SecondSide,
        (false, true) => CornerShape::FirstSide,
        (false, false) => CornerShape::IntCorner,
    }
}

/// Classify all four quadrants in [`Corner::ALL`] order
pub const fn classify_tile(mask: NeighborMask) -> [(Corner, CornerShape); 4] {
    [
        (Corner::TopLeft, classify(Corner::TopLeft, mask)),
        (Corner::TopRight, classify(Corner::TopRight, mask)),
        (Corner::BottomRight, classify(Corner::BottomRight, mask)),
        (Corner::BottomLeft, classify(Corner::BottomLeft, mask)),
    ]
}
