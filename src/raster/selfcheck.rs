//! Built-in grid self-checks, runnable from the `kata check` command.

use tracing::info;

use crate::domain::Rectangle;
use crate::error::AppError;
use crate::raster::RasterGrid;

const REL_TOL: f64 = 1e-9;

/// Cell counts must equal `n_cells_x * n_cells_y` for several layouts.
pub fn check_number_of_cells() -> Result<(), AppError> {
    let (x0, y0, dx, dy) = (0.0, 0.0, 1.0, 1.0);
    let bounding_box = Rectangle::new(x0, y0, x0 + dx, y0 + dy);

    for (nx, ny, expected) in [(10, 10, 100), (10, 20, 200), (20, 10, 200), (20, 20, 400)] {
        let grid = RasterGrid::new(bounding_box, nx, ny)?;
        if grid.n_cells() != expected {
            return Err(AppError::check_failed(format!(
                "Cell count check failed for {nx}x{ny}: expected {expected}, got {}.",
                grid.n_cells()
            )));
        }
    }
    info!("cell count check passed");
    Ok(())
}

/// A 2x2 grid over `[0,2]x[0,2]` must have exactly the four expected centers.
pub fn check_cell_center() -> Result<(), AppError> {
    let grid = RasterGrid::new(Rectangle::new(0.0, 0.0, 2.0, 2.0), 2, 2)?;
    let mut expected = vec![(0.5, 0.5), (1.5, 0.5), (0.5, 1.5), (1.5, 1.5)];

    for (_, (cx, cy)) in grid.centers() {
        if let Some(pos) = expected
            .iter()
            .position(|&(ex, ey)| is_close(cx, ex) && is_close(cy, ey))
        {
            expected.remove(pos);
        }
    }

    if !expected.is_empty() {
        return Err(AppError::check_failed(format!(
            "Cell center check failed: no cell centered at {expected:?}."
        )));
    }
    info!("cell center check passed");
    Ok(())
}

/// Run every self-check, stopping at the first failure.
pub fn run_self_checks() -> Result<(), AppError> {
    check_number_of_cells()?;
    check_cell_center()?;
    Ok(())
}

fn is_close(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= REL_TOL * a.abs().max(b.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_checks_pass() {
        assert!(run_self_checks().is_ok());
    }

    #[test]
    fn is_close_uses_relative_tolerance() {
        assert!(is_close(1.5, 1.5 + 1e-12));
        assert!(!is_close(1.5, 1.5001));
        assert!(!is_close(0.0, 1e-300));
    }
}
