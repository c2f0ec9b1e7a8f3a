//! Domain types used by both exercises.
//!
//! This module defines:
//!
//! - debtor records (`Debtor`)
//! - grid geometry (`Rectangle`, `Cell`)

pub mod types;

pub use types::*;
