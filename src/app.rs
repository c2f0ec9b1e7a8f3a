//! Top-level application orchestration.
//!
//! `src/main.rs` stays tiny; this module parses arguments, sets up logging and
//! dispatches to the report or grid code.

use std::io::Write;

use clap::Parser;
use tracing::info;

use crate::cli::{Cli, Command, GridArgs, PaydayArgs};
use crate::domain::{Rectangle, sample_debtors};
use crate::error::AppError;
use crate::raster::{GridReport, RasterGrid, format_grid_centers, run_self_checks};

/// Entry point for the `kata` binary.
pub fn run() -> Result<(), AppError> {
    let argv = rewrite_args(std::env::args().collect());
    let cli = Cli::parse_from(argv);
    crate::logging::init_cli_logger(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Payday(args) => handle_payday(&mut out, args),
        Command::Grid(args) => handle_grid(&mut out, &args),
        Command::Check => handle_check(&mut out),
    }
}

fn handle_payday<W: Write>(out: &mut W, args: PaydayArgs) -> Result<(), AppError> {
    let debtors = if args.debtors.is_empty() {
        sample_debtors()
    } else {
        args.debtors
    };
    info!(count = debtors.len(), threshold = args.threshold, "running payday report");
    crate::report::payday_with(out, &debtors, args.threshold)
}

fn handle_grid<W: Write>(out: &mut W, args: &GridArgs) -> Result<(), AppError> {
    let bounding_box = Rectangle::new(args.x0, args.y0, args.x1, args.y1);
    let grid = RasterGrid::new(bounding_box, args.nx, args.ny)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &GridReport::from_grid(&grid))?;
        writeln!(out)?;
    } else {
        write!(out, "{}", format_grid_centers(&grid))?;
    }
    Ok(())
}

fn handle_check<W: Write>(out: &mut W) -> Result<(), AppError> {
    run_self_checks()?;
    writeln!(out, "All tests passed")?;
    Ok(())
}

/// Rewrite argv so a bare `kata` runs the debtor report.
///
/// Rules:
/// - `kata`                      -> `kata payday`
/// - `kata --threshold 50 ...`   -> `kata payday --threshold 50 ...`
/// - `kata --help/--version/-h`  -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("payday".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "payday" | "grid" | "check");
    if is_subcommand {
        return argv;
    }

    // Global flags may precede the subcommand.
    let has_subcommand = argv[1..]
        .iter()
        .any(|a| matches!(a.as_str(), "payday" | "grid" | "check"));
    if arg1.starts_with('-') && !has_subcommand {
        argv.insert(1, "payday".to_string());
    }
    argv
}
