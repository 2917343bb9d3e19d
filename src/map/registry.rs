//! Ordered registry of the autotiles attached to a map
//!
//! The slot of an autotile is its attach position. Packed layer values refer
//! to slots, so the order must stay stable for as long as encoded layers are
//! in use.

use tracing::{debug, info};

use crate::autotile::compiler::Autotile;
use crate::io::configuration::TILE_SIZE;
use crate::io::error::{AutotileError, Result};
use crate::layer::encoder::encode_autotile_slot;
use crate::layer::grid::Layer;
use crate::layer::index::{AutotileSlot, decode};
use crate::surface::blit::Surface;

/// Autotiles of one map in slot order
pub struct AutotileRegistry<S: Surface> {
    autotiles: Vec<Autotile<S>>,
}

impl<S: Surface> Default for AutotileRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> AutotileRegistry<S> {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self {
            autotiles: Vec::new(),
        }
    }

    /// Attach an autotile at the next slot, compiling it if needed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An autotile with the same name is already attached
    /// - The slot space is exhausted
    /// - Compilation fails
    pub fn attach(&mut self, mut autotile: Autotile<S>) -> Result<AutotileSlot> {
        if self.slot_of(autotile.name()).is_some() {
            return Err(AutotileError::DuplicateAutotile {
                name: autotile.name().to_string(),
            });
        }
        let slot = AutotileSlot::new(self.autotiles.len())?;
        if !autotile.is_compiled() {
            autotile.compile()?;
        }

        info!(autotile = %autotile.name(), slot = slot.get(), "attached autotile");
        self.autotiles.push(autotile);
        Ok(slot)
    }

    /// Number of attached autotiles
    pub fn len(&self) -> usize {
        self.autotiles.len()
    }

    /// Whether no autotile is attached
    pub fn is_empty(&self) -> bool {
        self.autotiles.is_empty()
    }

    /// Autotile at a slot
    pub fn get(&self, slot: AutotileSlot) -> Option<&Autotile<S>> {
        self.autotiles.get(slot.index())
    }

    /// Slot of the autotile with the given name
    pub fn slot_of(&self, name: &str) -> Option<AutotileSlot> {
        self.autotiles
            .iter()
            .position(|autotile| autotile.name() == name)
            .and_then(|ordinal| AutotileSlot::new(ordinal).ok())
    }

    /// Slots and autotiles in slot order
    pub fn iter(&self) -> impl Iterator<Item = (AutotileSlot, &Autotile<S>)> {
        self.autotiles
            .iter()
            .enumerate()
            .filter_map(|(ordinal, autotile)| {
                AutotileSlot::new(ordinal).ok().map(|slot| (slot, autotile))
            })
    }

    /// Encode every attached slot of a layer, in increasing slot order
    ///
    /// Returns the number of cells rewritten.
    pub fn encode_layer(&self, layer: &mut Layer) -> usize {
        let encoded = self
            .iter()
            .map(|(slot, _)| encode_autotile_slot(layer, slot))
            .sum::<usize>();
        debug!(slots = self.len(), encoded, "encoded layer");
        encoded
    }

    /// Draw the autotile variant a packed cell refers to
    ///
    /// Returns `false` for empty cells and plain tileset indices, which this
    /// registry does not draw.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No autotile is attached at the decoded slot
    /// - The tile does not fit on the destination at `(x, y)`
    pub fn draw_cell(&self, dest: &mut S, value: i32, x: u32, y: u32) -> Result<bool> {
        let Some((slot, mask)) = decode(value) else {
            return Ok(false);
        };
        let autotile = self.get(slot).ok_or(AutotileError::UnknownSlot {
            slot: slot.get(),
            attached: self.len(),
        })?;
        autotile.draw_tile(dest, mask.variant(), x, y)?;
        Ok(true)
    }

    /// Render every autotile cell of a layer onto `dest`, one 32x32 tile per cell
    ///
    /// Returns the number of cells drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if a cell refers to an unknown slot or a tile does
    /// not fit on the destination
    pub fn render_layer(&self, dest: &mut S, layer: &Layer) -> Result<usize> {
        let mut drawn = 0;
        for ((row, col), &value) in layer.view().indexed_iter() {
            if decode(value).is_none() {
                continue;
            }
            let (Some(x), Some(y)) = (tile_origin(col), tile_origin(row)) else {
                return Err(AutotileError::RegionOutOfBounds {
                    surface: "destination",
                    region: (u32::MAX, u32::MAX, TILE_SIZE, TILE_SIZE),
                    bounds: dest.dimensions(),
                });
            };
            if self.draw_cell(dest, value, x, y)? {
                drawn += 1;
            }
        }
        Ok(drawn)
    }
}

/// Pixel origin of the tile at a cell coordinate, `None` past `u32` pixels
pub fn tile_origin(cell: usize) -> Option<u32> {
    u32::try_from(cell).ok()?.checked_mul(TILE_SIZE)
}
