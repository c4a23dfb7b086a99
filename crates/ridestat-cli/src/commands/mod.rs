//! Command implementations.

pub mod explore;
pub mod report;

use std::path::Path;
use std::time::Instant;

use colored::Colorize;
use ridestat::{discover_files, load_files, TripTable};

/// Discover and load every city CSV under `dir`, reporting timing.
///
/// `quiet` suppresses the banner so JSON output stays machine-readable.
pub(crate) fn load_table(
    dir: &Path,
    verbose: bool,
    quiet: bool,
) -> Result<TripTable, Box<dyn std::error::Error>> {
    if !dir.is_dir() {
        return Err(format!("Directory not found: {}", dir.display()).into());
    }

    let started = Instant::now();
    let paths = discover_files(dir)?;
    let table = load_files(&paths)?;
    let elapsed = started.elapsed();

    if quiet {
        return Ok(table);
    }

    println!(
        "{} {} rides from {} files in {:.3} seconds.",
        "Loaded".cyan().bold(),
        table.len().to_string().white().bold(),
        table.sources.len(),
        elapsed.as_secs_f64()
    );

    if verbose {
        for source in &table.sources {
            println!(
                "  {:20} {:>8} rows  {}  {}",
                source.file,
                source.row_count,
                source.city,
                source.hash
            );
        }
    }
    println!();

    Ok(table)
}
