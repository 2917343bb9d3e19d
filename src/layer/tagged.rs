//! Tagged tile grid with explicit pending and resolved autotile cells
//!
//! Resolution only rewrites pending cells, so running it again over a resolved
//! grid changes nothing.

use ndarray::Array2;
use tracing::debug;

use crate::io::error::Result;
use crate::layer::encoder::neighbor_mask;
use crate::layer::grid::{Layer, LayerSize};
use crate::layer::index::{AutotileSlot, TileCell};

/// Layer of tagged cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    size: LayerSize,
    cells: Array2<TileCell>,
}

impl TileGrid {
    /// Create a grid of empty cells
    pub fn new(size: LayerSize) -> Self {
        Self {
            size,
            cells: Array2::from_elem(size.shape(), TileCell::Empty),
        }
    }

    /// Interpret a packed layer, treating empty-mask autotile values as pending
    pub fn from_layer(layer: &Layer) -> Self {
        Self {
            size: layer.size(),
            cells: layer.view().mapv(TileCell::from_packed),
        }
    }

    /// Grid dimensions
    pub const fn size(&self) -> LayerSize {
        self.size
    }

    /// Cell at `(x, y)`
    pub fn get(&self, x: usize, y: usize) -> Option<TileCell> {
        self.cells.get((y, x)).copied()
    }

    /// Overwrite the cell at `(x, y)`
    ///
    /// Returns `false` if the position lies outside the grid.
    pub fn set(&mut self, x: usize, y: usize, cell: TileCell) -> bool {
        self.cells.get_mut((y, x)).map(|target| *target = cell).is_some()
    }

    /// Resolve every pending cell of `slot` to its neighbor mask
    ///
    /// Pending and resolved cells of the slot both count as neighbors.
    /// Returns the number of cells resolved.
    pub fn resolve_slot(&mut self, slot: AutotileSlot) -> usize {
        let (rows, cols) = self.cells.dim();
        let mut resolved = 0;

        for row in 0..rows {
            for col in 0..cols {
                if self.cells.get((row, col)) != Some(&TileCell::AutotilePending(slot)) {
                    continue;
                }
                let mask = neighbor_mask(&self.cells.view(), col, row, |cell| {
                    cell.is_autotile_of(slot)
                });
                if let Some(cell) = self.cells.get_mut((row, col)) {
                    *cell = TileCell::AutotileResolved(slot, mask);
                    resolved += 1;
                }
            }
        }

        debug!(slot = slot.get(), resolved, "resolved tagged autotile slot");
        resolved
    }

    /// Resolve every pending cell of every slot
    ///
    /// Returns the number of cells resolved.
    pub fn resolve_all(&mut self) -> usize {
        let mut slots: Vec<AutotileSlot> = self
            .cells
            .iter()
            .filter_map(|cell| match cell {
                TileCell::AutotilePending(slot) => Some(*slot),
                _ => None,
            })
            .collect();
        slots.sort_unstable();
        slots.dedup();

        slots.into_iter().map(|slot| self.resolve_slot(slot)).sum()
    }

    /// Number of cells still awaiting resolution
    pub fn pending_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, TileCell::AutotilePending(_)))
            .count()
    }

    /// Packed layer for rendering
    ///
    /// # Errors
    ///
    /// Returns an error if a tileset index cannot be packed
    pub fn to_layer(&self) -> Result<Layer> {
        let values = self
            .cells
            .iter()
            .map(|cell| cell.to_packed())
            .collect::<Result<Vec<i32>>>()?;
        Layer::from_vec(self.size, values)
    }
}
