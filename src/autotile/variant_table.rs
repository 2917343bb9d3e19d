//! Source quadrant lookup for the three-column autotile sheet
//!
//! ```text
//!  x:   0        32       64       96
//! y 0   +--------+--------+--------+
//!       | preview|        | inner  |
//! y 32  +--------+--------+--------+
//!       | TL     | top    | TR     |
//! y 64  +--------+--------+--------+
//!       | left   | center | right  |
//! y 96  +--------+--------+--------+
//!       | BL     | bottom | BR     |
//! y 128 +--------+--------+--------+
//! ```
//!
//! The preview block at the origin is never sampled.

use crate::autotile::corner::{Corner, CornerShape};

/// Pixel origin of a 16x16 quadrant inside a source sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceOffset {
    /// Horizontal pixel offset
    pub x: u32,
    /// Vertical pixel offset
    pub y: u32,
}

impl SourceOffset {
    const fn at(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Shift the offset by the same padding on both axes
    ///
    /// Saturates at `u32::MAX`; such an offset lies outside any real sheet.
    #[must_use]
    pub const fn padded(self, padding: u32) -> Self {
        Self {
            x: self.x.saturating_add(padding),
            y: self.y.saturating_add(padding),
        }
    }
}

/// Look up the source quadrant for a corner rendered with a given shape
pub const fn source_offset(corner: Corner, shape: CornerShape) -> SourceOffset {
    match (corner, shape) {
        (Corner::TopLeft, CornerShape::IntCorner) => SourceOffset::at(0, 32),
        (Corner::TopLeft, CornerShape::ExtCorner) => SourceOffset::at(64, 0),
        (Corner::TopLeft, CornerShape::FirstSide) => SourceOffset::at(0, 64),
        (Corner::TopLeft, CornerShape::SecondSide) => SourceOffset::at(32, 32),
        (Corner::TopLeft, CornerShape::Plain) => SourceOffset::at(32, 64),

        (Corner::TopRight, CornerShape::IntCorner) => SourceOffset::at(80, 32),
        (Corner::TopRight, CornerShape::ExtCorner) => SourceOffset::at(80, 0),
        (Corner::TopRight, CornerShape::FirstSide) => SourceOffset::at(48, 32),
        (Corner::TopRight, CornerShape::SecondSide) => SourceOffset::at(80, 64),
        (Corner::TopRight, CornerShape::Plain) => SourceOffset::at(48, 64),

        (Corner::BottomRight, CornerShape::IntCorner) => SourceOffset::at(80, 112),
        (Corner::BottomRight, CornerShape::ExtCorner) => SourceOffset::at(80, 16),
        (Corner::BottomRight, CornerShape::FirstSide) => SourceOffset::at(80, 80),
        (Corner::BottomRight, CornerShape::SecondSide) => SourceOffset::at(48, 112),
        (Corner::BottomRight, CornerShape::Plain) => SourceOffset::at(48, 80),

        (Corner::BottomLeft, CornerShape::IntCorner) => SourceOffset::at(0, 112),
        (Corner::BottomLeft, CornerShape::ExtCorner) => SourceOffset::at(64, 16),
        (Corner::BottomLeft, CornerShape::FirstSide) => SourceOffset::at(32, 112),
        (Corner::BottomLeft, CornerShape::SecondSide) => SourceOffset::at(0, 80),
        (Corner::BottomLeft, CornerShape::Plain) => SourceOffset::at(32, 80),
    }
}
