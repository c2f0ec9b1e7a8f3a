//! `kata` library crate.
//!
//! Two independent refactoring exercises live here:
//!
//! - debtor reporting (`report`): order debtors by amount owed and print them
//! - a raster grid (`raster`): a rectangle split into equal cells with center lookup
//!
//! The binary (`kata`) is a thin wrapper so both units stay testable in-process.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod raster;
pub mod report;
