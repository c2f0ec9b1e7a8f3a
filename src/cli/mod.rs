//! Command-line parsing for the `kata` binary.
//!
//! Argument parsing and command dispatch stay separate from the report and grid code.

use clap::{Args, Parser, Subcommand};

use crate::domain::Debtor;
use crate::report::HIGHLIGHT_THRESHOLD;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "kata", version, about = "Debtor report and raster grid exercises")]
pub struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print debtors ordered by debt, highlighting large amounts.
    Payday(PaydayArgs),
    /// List the cells of a raster grid with their center points.
    Grid(GridArgs),
    /// Run the raster grid self-checks.
    Check,
}

#[derive(Debug, Args, Clone)]
pub struct PaydayArgs {
    /// Debts strictly above this amount are wrapped in `!!!`.
    #[arg(long, default_value_t = HIGHLIGHT_THRESHOLD)]
    pub threshold: f64,

    /// A debtor as `NAME=AMOUNT` (repeatable). Defaults to the five sample debtors.
    #[arg(long = "debtor", value_name = "NAME=AMOUNT", value_parser = parse_debtor)]
    pub debtors: Vec<Debtor>,
}

#[derive(Debug, Args, Clone)]
pub struct GridArgs {
    /// Lower-left x bound.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub x0: f64,

    /// Lower-left y bound.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub y0: f64,

    /// Upper-right x bound.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub x1: f64,

    /// Upper-right y bound.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub y1: f64,

    /// Number of cells along x.
    #[arg(long, default_value_t = 2)]
    pub nx: usize,

    /// Number of cells along y.
    #[arg(long, default_value_t = 2)]
    pub ny: usize,

    /// Emit JSON instead of a text listing.
    #[arg(long)]
    pub json: bool,
}

fn parse_debtor(raw: &str) -> Result<Debtor, String> {
    let (name, amount) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=AMOUNT, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing debtor name in '{raw}'"));
    }
    let debt: f64 = amount
        .trim()
        .parse()
        .map_err(|e| format!("invalid amount '{amount}': {e}"))?;
    Ok(Debtor::new(name, debt))
}
