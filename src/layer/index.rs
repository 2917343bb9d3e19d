//! Packed signed tile indices
//!
//! A layer cell is a single `i32`:
//! - `> 0` indexes a plain tileset
//! - `== 0` is empty
//! - `< 0` is an autotile cell packing `slot` and neighbor mask as
//!   `-(slot * 256 + mask + 1)`
//!
//! Each slot owns the 256 values `-(slot * 256 + 1) ..= -(slot * 256 + 256)`,
//! so ranges of different slots never overlap.

use std::fmt;
use std::ops::RangeInclusive;

use crate::autotile::direction::NeighborMask;
use crate::io::error::{AutotileError, Result, invalid_parameter};

const SLOT_STRIDE: u32 = 256;

/// Ordinal position of an autotile among those attached to a map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AutotileSlot(u32);

impl AutotileSlot {
    /// Number of slots the packed index space can address
    pub const CAPACITY: usize = 1 << 23;

    /// Slot for an ordinal position
    ///
    /// # Errors
    ///
    /// Returns `SlotOverflow` if the ordinal is beyond [`Self::CAPACITY`]
    pub fn new(ordinal: usize) -> Result<Self> {
        if ordinal < Self::CAPACITY {
            Ok(Self(ordinal as u32))
        } else {
            Err(AutotileError::SlotOverflow { ordinal })
        }
    }

    /// Ordinal position as a number
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Ordinal position usable as an index
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Packed value of a cell of this slot whose neighbors are not yet known
    pub const fn pending(self) -> i32 {
        pack(self, NeighborMask::EMPTY)
    }

    /// All packed values belonging to this slot, from most to least negative
    pub const fn packed_range(self) -> RangeInclusive<i32> {
        pack(self, NeighborMask::FULL)..=pack(self, NeighborMask::EMPTY)
    }
}

impl fmt::Display for AutotileSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

/// Pack a slot and neighbor mask into a negative cell value
pub const fn pack(slot: AutotileSlot, mask: NeighborMask) -> i32 {
    -((slot.0 * SLOT_STRIDE + mask.bits() as u32) as i32) - 1
}

/// Decode a negative cell value into its slot and neighbor mask
///
/// Returns `None` for empty cells and plain tileset indices.
pub const fn decode(value: i32) -> Option<(AutotileSlot, NeighborMask)> {
    if value >= 0 {
        return None;
    }
    let raw = value.unsigned_abs() - 1;
    Some((
        AutotileSlot(raw / SLOT_STRIDE),
        NeighborMask::from_bits((raw % SLOT_STRIDE) as u8),
    ))
}

/// Whether a cell value is an autotile cell of `slot`
pub const fn belongs_to_slot(value: i32, slot: AutotileSlot) -> bool {
    match decode(value) {
        Some((decoded, _)) => decoded.0 == slot.0,
        None => false,
    }
}

/// Explicitly tagged cell value
///
/// Unlike the packed form, a pending autotile cell is distinguishable from a
/// resolved cell whose neighbor mask happens to be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileCell {
    /// Nothing drawn
    #[default]
    Empty,
    /// Plain tileset index (always positive in packed form)
    Tileset(u32),
    /// Autotile cell awaiting neighbor resolution
    AutotilePending(AutotileSlot),
    /// Autotile cell with its resolved variant
    AutotileResolved(AutotileSlot, NeighborMask),
}

impl TileCell {
    /// Interpret a packed value that follows the pre-encoding convention
    ///
    /// Negative values with an empty mask are the pending sentinel and become
    /// [`TileCell::AutotilePending`]; other negative values are resolved.
    pub const fn from_packed(value: i32) -> Self {
        match decode(value) {
            Some((slot, mask)) if mask.bits() == 0 => Self::AutotilePending(slot),
            Some((slot, mask)) => Self::AutotileResolved(slot, mask),
            None if value == 0 => Self::Empty,
            None => Self::Tileset(value as u32),
        }
    }

    /// Packed form of the cell
    ///
    /// Pending cells pack to the empty-mask sentinel.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a tileset index of 0 or above `i32::MAX`
    pub fn to_packed(self) -> Result<i32> {
        match self {
            Self::Empty => Ok(0),
            Self::Tileset(index) => match i32::try_from(index) {
                Ok(packed) if packed > 0 => Ok(packed),
                _ => Err(invalid_parameter(
                    "tileset index",
                    &index,
                    &"must be in 1..=i32::MAX",
                )),
            },
            Self::AutotilePending(slot) => Ok(slot.pending()),
            Self::AutotileResolved(slot, mask) => Ok(pack(slot, mask)),
        }
    }

    /// Slot of an autotile cell
    pub const fn slot(self) -> Option<AutotileSlot> {
        match self {
            Self::AutotilePending(slot) | Self::AutotileResolved(slot, _) => Some(slot),
            Self::Empty | Self::Tileset(_) => None,
        }
    }

    /// Whether the cell is an autotile cell of `slot`, pending or resolved
    pub const fn is_autotile_of(self, slot: AutotileSlot) -> bool {
        match self.slot() {
            Some(own) => own.0 == slot.0,
            None => false,
        }
    }
}
