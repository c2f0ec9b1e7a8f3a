//! Raster grid: a rectangular domain split into equal cells.
//!
//! - grid construction and center lookup (`grid`)
//! - built-in self-checks (`selfcheck`)
//! - terminal/JSON listings of cell centers (this module)

use serde::Serialize;

use crate::domain::{Cell, Rectangle};

pub mod grid;
pub mod selfcheck;

pub use grid::*;
pub use selfcheck::*;

/// Serializable listing of a grid and its cell centers.
#[derive(Debug, Clone, Serialize)]
pub struct GridReport {
    #[serde(rename = "box")]
    pub bounding_box: Rectangle,
    pub n_cells_x: usize,
    pub n_cells_y: usize,
    pub n_cells: usize,
    pub centers: Vec<CellCenter>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellCenter {
    pub cell: Cell,
    pub x: f64,
    pub y: f64,
}

impl GridReport {
    pub fn from_grid(grid: &RasterGrid) -> Self {
        let centers = grid
            .centers()
            .into_iter()
            .map(|(cell, (x, y))| CellCenter { cell, x, y })
            .collect();
        Self {
            bounding_box: *grid.bounding_box(),
            n_cells_x: grid.n_cells_x(),
            n_cells_y: grid.n_cells_y(),
            n_cells: grid.n_cells(),
            centers,
        }
    }
}

/// Format a plain-text listing: a header line, then `(i, j) -> (x, y)` per cell.
pub fn format_grid_centers(grid: &RasterGrid) -> String {
    let b = grid.bounding_box();
    let mut out = String::new();
    out.push_str(&format!(
        "Grid: [{}, {}] x [{}, {}] | {}x{} = {} cells\n",
        b.x_lower_left,
        b.x_upper_right,
        b.y_lower_left,
        b.y_upper_right,
        grid.n_cells_x(),
        grid.n_cells_y(),
        grid.n_cells(),
    ));
    for (cell, (x, y)) in grid.centers() {
        out.push_str(&format!("({}, {}) -> ({x:.6}, {y:.6})\n", cell.idx_x, cell.idx_y));
    }
    out
}
