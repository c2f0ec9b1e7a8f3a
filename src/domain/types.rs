//! Shared value types.
//!
//! All types are plain data: created once, never mutated, and serializable so the
//! CLI can emit them as JSON.

use serde::Serialize;

/// A person owing us money.
///
/// The debt is expected to be non-negative but this is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Debtor {
    pub name: String,
    pub debt: f64,
}

impl Debtor {
    pub fn new(name: impl Into<String>, debt: f64) -> Self {
        Self {
            name: name.into(),
            debt,
        }
    }
}

/// The five debtors reported when no explicit list is given.
pub fn sample_debtors() -> Vec<Debtor> {
    vec![
        Debtor::new("Person1", 100.0),
        Debtor::new("Person2", 200.0),
        Debtor::new("Person3", 10.0),
        Debtor::new("Person4", 50.0),
        Debtor::new("Person5", 1250.0),
    ]
}

/// Axis-aligned rectangle given by its lower-left and upper-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    pub x_lower_left: f64,
    pub y_lower_left: f64,
    pub x_upper_right: f64,
    pub y_upper_right: f64,
}

impl Rectangle {
    pub fn new(x_lower_left: f64, y_lower_left: f64, x_upper_right: f64, y_upper_right: f64) -> Self {
        Self {
            x_lower_left,
            y_lower_left,
            x_upper_right,
            y_upper_right,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_upper_right - self.x_lower_left
    }

    pub fn height(&self) -> f64 {
        self.y_upper_right - self.y_lower_left
    }

    /// True when every bound is finite and both extents are strictly positive.
    pub fn is_well_formed(&self) -> bool {
        let bounds = [
            self.x_lower_left,
            self.y_lower_left,
            self.x_upper_right,
            self.y_upper_right,
        ];
        bounds.iter().all(|v| v.is_finite()) && self.width() > 0.0 && self.height() > 0.0
    }
}

/// A grid cell identified by its column/row index pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub idx_x: usize,
    pub idx_y: usize,
}

impl Cell {
    pub fn new(idx_x: usize, idx_y: usize) -> Self {
        Self { idx_x, idx_y }
    }
}
