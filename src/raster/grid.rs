//! Structured rectangular grid in 2D.
//!
//! Cells are identified by column/row index pairs, `(0, 0)` at the lower left:
//!
//! ```text
//!  ________ ________ ________
//! |        |        |        |
//! | (0, 1) | (1, 1) | (2, 1) |
//! |________|________|________|
//! |        |        |        |
//! | (0, 0) | (1, 0) | (2, 0) |
//! |________|________|________|
//! ```

use tracing::debug;

use crate::domain::{Cell, Rectangle};
use crate::error::AppError;

/// Upper bound on `n_cells_x * n_cells_y`; the cell list is materialized eagerly.
pub const MAX_CELLS: usize = 1 << 28;

/// A rectangle split into `n_cells_x × n_cells_y` equally sized cells.
///
/// Immutable after construction. The cell list is built eagerly in column-major
/// order (all rows of column 0, then column 1, ...).
#[derive(Debug, Clone)]
pub struct RasterGrid {
    bounding_box: Rectangle,
    n_cells_x: usize,
    n_cells_y: usize,
    n_cells: usize,
    cells: Vec<Cell>,
}

impl RasterGrid {
    pub fn new(bounding_box: Rectangle, n_cells_x: usize, n_cells_y: usize) -> Result<Self, AppError> {
        if n_cells_x == 0 || n_cells_y == 0 {
            return Err(AppError::invalid_input(format!(
                "Invalid cell counts: n_cells_x={n_cells_x}, n_cells_y={n_cells_y} (both must be > 0)."
            )));
        }
        if !bounding_box.is_well_formed() {
            return Err(AppError::invalid_input(format!(
                "Invalid box: lower-left=({}, {}), upper-right=({}, {}) (bounds must be finite, upper > lower).",
                bounding_box.x_lower_left,
                bounding_box.y_lower_left,
                bounding_box.x_upper_right,
                bounding_box.y_upper_right,
            )));
        }

        let n_cells = n_cells_x
            .checked_mul(n_cells_y)
            .filter(|&n| n <= MAX_CELLS)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Too many cells: {n_cells_x} x {n_cells_y} (at most {MAX_CELLS})."
                ))
            })?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(n_cells).map_err(|e| {
            AppError::invalid_input(format!("Cannot allocate {n_cells} cells: {e}"))
        })?;
        for i in 0..n_cells_x {
            for j in 0..n_cells_y {
                cells.push(Cell::new(i, j));
            }
        }

        debug!(n_cells_x, n_cells_y, n_cells, "constructed raster grid");
        Ok(Self {
            bounding_box,
            n_cells_x,
            n_cells_y,
            n_cells,
            cells,
        })
    }

    pub fn bounding_box(&self) -> &Rectangle {
        &self.bounding_box
    }

    pub fn n_cells_x(&self) -> usize {
        self.n_cells_x
    }

    pub fn n_cells_y(&self) -> usize {
        self.n_cells_y
    }

    /// Total number of cells (`n_cells_x * n_cells_y`).
    pub fn n_cells(&self) -> usize {
        self.n_cells
    }

    /// All cells in column-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True when the cell indices lie inside this grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.idx_x < self.n_cells_x && cell.idx_y < self.n_cells_y
    }

    /// Center point of `cell`.
    ///
    /// Indices are not checked: a cell outside the grid yields an extrapolated
    /// point outside the box.
    pub fn get_cell_center(&self, cell: Cell) -> (f64, f64) {
        let b = &self.bounding_box;
        (
            axis_center(b.x_lower_left, b.width(), cell.idx_x, self.n_cells_x),
            axis_center(b.y_lower_left, b.height(), cell.idx_y, self.n_cells_y),
        )
    }

    /// Every cell paired with its center, in cell order.
    pub fn centers(&self) -> Vec<(Cell, (f64, f64))> {
        self.cells
            .iter()
            .map(|&cell| (cell, self.get_cell_center(cell)))
            .collect()
    }
}

fn axis_center(lower: f64, extent: f64, idx: usize, n: usize) -> f64 {
    lower + (idx as f64 + 0.5) * extent / n as f64
}
