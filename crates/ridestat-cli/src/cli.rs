//! CLI argument definitions using clap.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use ridestat::{parse_month, parse_weekday, City};

/// Ridestat: bikeshare trip-log statistics
#[derive(Parser)]
#[command(name = "ridestat")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (per-file load provenance)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactively pick filters and browse statistics
    Explore {
        /// Directory containing the per-city CSV files
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },

    /// Print one report for a fixed set of filters
    Report {
        /// Directory containing the per-city CSV files
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// City filter (0-3, all, chicago, new york, washington)
        #[arg(short, long, default_value = "all")]
        city: City,

        /// Month filter (0-12, all, or a month name)
        #[arg(short, long, default_value = "all")]
        month: MonthArg,

        /// Weekday filter (0-7, all, or a day name; 1 = Monday)
        #[arg(short, long, default_value = "all")]
        day: WeekdayArg,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Month selection argument; `all` parses to no filter.
#[derive(Clone, Debug)]
pub struct MonthArg(pub Option<u32>);

impl FromStr for MonthArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_month(s).map(MonthArg)
    }
}

/// Weekday selection argument; `all` parses to no filter.
#[derive(Clone, Debug)]
pub struct WeekdayArg(pub Option<u32>);

impl FromStr for WeekdayArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_weekday(s).map(WeekdayArg)
    }
}
