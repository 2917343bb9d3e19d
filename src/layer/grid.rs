//! Row-major layer storage backed by a 2D array

use ndarray::{Array2, ArrayView2, ArrayViewMut2};

use crate::io::error::{AutotileError, Result};

/// Layer dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerSize {
    /// Cells per row
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl LayerSize {
    /// Create a size from width and height
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Array shape as (rows, cols)
    pub const fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }
}

/// One map layer of packed cell values
///
/// Cells are addressed as `(x, y)` with `x` the column; storage is
/// `(row, col)` so the flat order is row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    size: LayerSize,
    cells: Array2<i32>,
}

impl Layer {
    /// Create an empty layer
    pub fn new(size: LayerSize) -> Self {
        Self {
            size,
            cells: Array2::zeros(size.shape()),
        }
    }

    /// Build a layer from row-major values
    ///
    /// # Errors
    ///
    /// Returns `LayerSizeMismatch` if `values.len() != width * height`
    pub fn from_vec(size: LayerSize, values: Vec<i32>) -> Result<Self> {
        let actual = values.len();
        let cells = Array2::from_shape_vec(size.shape(), values).map_err(|_shape_error| {
            AutotileError::LayerSizeMismatch {
                expected: size.cell_count(),
                actual,
            }
        })?;
        Ok(Self { size, cells })
    }

    /// Layer dimensions
    pub const fn size(&self) -> LayerSize {
        self.size
    }

    /// Value at `(x, y)`, or `None` outside the layer
    ///
    /// Signed coordinates let neighbor probes step past the edges.
    pub fn get(&self, x: i64, y: i64) -> Option<i32> {
        cell_at(&self.cells.view(), x, y)
    }

    /// Overwrite the value at `(x, y)`
    ///
    /// Returns `false` if the position lies outside the layer.
    pub fn set(&mut self, x: usize, y: usize, value: i32) -> bool {
        self.cells.get_mut((y, x)).map(|cell| *cell = value).is_some()
    }

    /// Read-only view of the cells as (row, col)
    pub fn view(&self) -> ArrayView2<'_, i32> {
        self.cells.view()
    }

    /// Mutable view of the cells as (row, col)
    pub fn view_mut(&mut self) -> ArrayViewMut2<'_, i32> {
        self.cells.view_mut()
    }

    /// Row-major copy of the values
    pub fn to_vec(&self) -> Vec<i32> {
        self.cells.iter().copied().collect()
    }
}

/// Value at signed `(x, y)` of a `(row, col)` view, `None` when out of bounds
pub fn cell_at(cells: &ArrayView2<'_, i32>, x: i64, y: i64) -> Option<i32> {
    let col = usize::try_from(x).ok()?;
    let row = usize::try_from(y).ok()?;
    cells.get((row, col)).copied()
}
