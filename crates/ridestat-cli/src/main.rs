//! Ridestat CLI - explore bikeshare trip statistics.

mod cli;
mod commands;
mod output;
mod prompt;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Explore { dir } => commands::explore::run(dir, cli.verbose),

        Commands::Report {
            dir,
            city,
            month,
            day,
            json,
        } => commands::report::run(dir, city, month, day, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
