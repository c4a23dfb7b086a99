//! Error types for the ridestat library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ridestat operations.
///
/// Load-time failures are fatal: a file that cannot be parsed, or a row
/// whose start time or duration is unreadable, aborts the whole load
/// rather than silently dropping data.
#[derive(Debug, Error)]
pub enum RidestatError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library (malformed tabular structure).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from a file's header row.
    #[error("File '{file}' is missing required column '{column}'")]
    MissingColumn { file: String, column: String },

    /// A start-time value could not be parsed as a timestamp.
    #[error("File '{file}', row {row}: unparseable start time '{value}'")]
    Timestamp {
        file: String,
        row: usize,
        value: String,
    },

    /// A numeric field (e.g. trip duration) could not be parsed.
    #[error("File '{file}', row {row}: invalid value '{value}' in column '{column}'")]
    Field {
        file: String,
        row: usize,
        column: String,
        value: String,
    },

    /// No input files or no data rows to work with.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ridestat operations.
pub type Result<T> = std::result::Result<T, RidestatError>;
