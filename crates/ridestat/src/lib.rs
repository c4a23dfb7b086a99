//! Ridestat: bikeshare trip-log ingestion, filtering, and statistics.
//!
//! Ridestat reads per-city trip-log CSV files, merges them into one unified
//! in-memory table annotated with derived calendar fields, narrows that
//! table with a (city, month, weekday) selector, and computes a fixed
//! battery of descriptive statistics over the subset.
//!
//! The table is built once per run and is read-only thereafter; every
//! filter application produces an independent borrowed subset. All "most
//! common" statistics report every group tied at the maximum count, never
//! an arbitrary single winner.
//!
//! # Example
//!
//! ```no_run
//! use ridestat::{discover_files, load_files, filter, Selector, StatsReport};
//!
//! let paths = discover_files(".").unwrap();
//! let table = load_files(&paths).unwrap();
//!
//! let subset = filter::apply(&table.records, &Selector::ALL);
//! let report = StatsReport::compute(&subset, &Selector::ALL);
//! println!("{} rides", report.rides);
//! ```

pub mod error;
pub mod filter;
pub mod load;
pub mod model;
pub mod stats;

pub use error::{Result, RidestatError};
pub use filter::Selector;
pub use load::{discover_files, load_files, SourceMetadata};
pub use model::{parse_month, parse_weekday, City, TripRecord, TripTable};
pub use stats::{BirthYearSummary, DurationSummary, StatsReport, TopCounts};
