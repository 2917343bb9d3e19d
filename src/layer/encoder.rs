//! Neighbor-mask encoding of autotile cells in a packed layer
//!
//! A single row-major pass rewrites every cell of the target slot to
//! `-(slot * 256 + mask + 1)`. Membership is decided by the decoded slot, so
//! cells already rewritten earlier in the pass still count as neighbors.

use ndarray::{ArrayView2, ArrayViewMut2};
use tracing::debug;

use crate::autotile::direction::{Direction, NeighborMask};
use crate::io::error::{AutotileError, Result};
use crate::layer::grid::{Layer, LayerSize};
use crate::layer::index::{AutotileSlot, belongs_to_slot, pack};

/// Neighbor mask of `(x, y)` under a membership predicate
///
/// Neighbors outside the grid are absent. Generic over the cell type so the
/// packed and tagged grids share it.
pub fn neighbor_mask<T, F>(
    cells: &ArrayView2<'_, T>,
    x: usize,
    y: usize,
    is_member: F,
) -> NeighborMask
where
    F: Fn(&T) -> bool,
{
    Direction::ALL
        .into_iter()
        .filter(|direction| {
            let (dx, dy) = direction.offset();
            let col = x.checked_add_signed(dx);
            let row = y.checked_add_signed(dy);
            match (row, col) {
                (Some(row), Some(col)) => cells.get((row, col)).is_some_and(&is_member),
                _ => false,
            }
        })
        .collect()
}

/// Rewrite every cell of `slot` in a `(row, col)` view with its neighbor mask
///
/// Returns the number of cells rewritten.
pub fn encode_view(mut cells: ArrayViewMut2<'_, i32>, slot: AutotileSlot) -> usize {
    let (rows, cols) = cells.dim();
    let mut encoded = 0;

    for row in 0..rows {
        for col in 0..cols {
            let is_target = cells
                .get((row, col))
                .is_some_and(|&value| belongs_to_slot(value, slot));
            if !is_target {
                continue;
            }

            let mask = neighbor_mask(&cells.view(), col, row, |&value| belongs_to_slot(value, slot));
            if let Some(cell) = cells.get_mut((row, col)) {
                *cell = pack(slot, mask);
                encoded += 1;
            }
        }
    }

    debug!(slot = slot.get(), encoded, "encoded autotile slot");
    encoded
}

/// Encode one autotile slot of a layer in place
///
/// Cells of the slot are expected to hold the pending sentinel
/// [`AutotileSlot::pending`] beforehand. Returns the number of cells rewritten.
pub fn encode_autotile_slot(layer: &mut Layer, slot: AutotileSlot) -> usize {
    encode_view(layer.view_mut(), slot)
}

/// Encode one autotile slot over a caller-owned row-major slice
///
/// # Errors
///
/// Returns `LayerSizeMismatch` if `values.len() != width * height`
pub fn encode_packed_slot(
    values: &mut [i32],
    size: LayerSize,
    slot: AutotileSlot,
) -> Result<usize> {
    let actual = values.len();
    let mismatch = || AutotileError::LayerSizeMismatch {
        expected: size.cell_count(),
        actual,
    };
    if actual != size.cell_count() {
        return Err(mismatch());
    }
    let cells =
        ArrayViewMut2::from_shape(size.shape(), values).map_err(|_shape_error| mismatch())?;
    Ok(encode_view(cells, slot))
}
