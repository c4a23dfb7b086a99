//! Record loader: merges per-city CSV trip logs into one unified table.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Result, RidestatError};
use crate::model::{City, TripRecord, TripTable};

/// Required columns, matched against the header row by exact name.
const COL_START_TIME: &str = "Start Time";
const COL_START_STATION: &str = "Start Station";
const COL_END_STATION: &str = "End Station";
const COL_TRIP_DURATION: &str = "Trip Duration";

/// Optional columns; an absent column or empty cell yields a missing value.
const COL_USER_TYPE: &str = "User Type";
const COL_GENDER: &str = "Gender";
const COL_BIRTH_YEAR: &str = "Birth Year";

/// Timestamp formats accepted for the start-time column.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Metadata about one loaded source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// City assigned from the file's base name.
    pub city: City,
    /// Number of data rows loaded from this file.
    pub row_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

/// Find all `*.csv` files directly inside `dir`, sorted by file name.
///
/// Sorting fixes the discovery order, which in turn fixes the record order
/// of the unified table.
pub fn discover_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir).map_err(|e| RidestatError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("csv"))
                    .unwrap_or(false)
        })
        .collect();
    paths.sort();

    Ok(paths)
}

/// Load every file into one unified table, preserving file discovery order
/// and per-file row order. Duplicate records are kept.
///
/// Any unreadable file, missing required column, or unparseable start time
/// or duration aborts the whole load.
pub fn load_files(paths: &[PathBuf]) -> Result<TripTable> {
    if paths.is_empty() {
        return Err(RidestatError::EmptyData(
            "No input files to load".to_string(),
        ));
    }

    let mut records = Vec::new();
    let mut sources = Vec::new();

    for path in paths {
        let (mut file_records, metadata) = load_file(path)?;
        records.append(&mut file_records);
        sources.push(metadata);
    }

    Ok(TripTable { records, sources })
}

/// Parse one CSV file into trip records plus its provenance metadata.
fn load_file(path: &Path) -> Result<(Vec<TripRecord>, SourceMetadata)> {
    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let city = City::from_file_stem(&stem);

    // Read the whole file up front for hashing and parsing.
    let mut file = File::open(path).map_err(|e| RidestatError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut contents = Vec::new();
    file.read_to_end(&mut contents).map_err(|e| RidestatError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut hasher = Sha256::new();
    hasher.update(&contents);
    let hash = format!("sha256:{:x}", hasher.finalize());
    let size_bytes = contents.len() as u64;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_slice());

    let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

    let start_time_col = require_column(&headers, COL_START_TIME, &file_name)?;
    let start_station_col = require_column(&headers, COL_START_STATION, &file_name)?;
    let end_station_col = require_column(&headers, COL_END_STATION, &file_name)?;
    let duration_col = require_column(&headers, COL_TRIP_DURATION, &file_name)?;
    let user_type_col = column_index(&headers, COL_USER_TYPE);
    let gender_col = column_index(&headers, COL_GENDER);
    let birth_year_col = column_index(&headers, COL_BIRTH_YEAR);

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = row_idx + 1;

        let start_raw = record.get(start_time_col).unwrap_or("").trim();
        let start_time = parse_start_time(start_raw).ok_or_else(|| RidestatError::Timestamp {
            file: file_name.clone(),
            row,
            value: start_raw.to_string(),
        })?;

        let duration_raw = record.get(duration_col).unwrap_or("").trim();
        let duration_seconds: f64 =
            duration_raw
                .parse()
                .map_err(|_| RidestatError::Field {
                    file: file_name.clone(),
                    row,
                    column: COL_TRIP_DURATION.to_string(),
                    value: duration_raw.to_string(),
                })?;

        let birth_year = match optional_cell(&record, birth_year_col) {
            Some(raw) => Some(parse_birth_year(&raw).ok_or_else(|| RidestatError::Field {
                file: file_name.clone(),
                row,
                column: COL_BIRTH_YEAR.to_string(),
                value: raw.clone(),
            })?),
            None => None,
        };

        records.push(TripRecord::new(
            start_time,
            record.get(start_station_col).unwrap_or("").to_string(),
            record.get(end_station_col).unwrap_or("").to_string(),
            duration_seconds,
            optional_cell(&record, user_type_col),
            optional_cell(&record, gender_col),
            birth_year,
            city,
        ));
    }

    let metadata = SourceMetadata {
        file: file_name,
        path: path.to_path_buf(),
        hash,
        size_bytes,
        city,
        row_count: records.len(),
        loaded_at: Utc::now(),
    };

    Ok((records, metadata))
}

/// Position of a required column, or a fatal `MissingColumn` error.
fn require_column(headers: &[String], name: &str, file: &str) -> Result<usize> {
    column_index(headers, name).ok_or_else(|| RidestatError::MissingColumn {
        file: file.to_string(),
        column: name.to_string(),
    })
}

/// Position of a column by header name, if present.
fn column_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

/// Value of an optional cell; absent columns and empty cells are missing.
fn optional_cell(record: &csv::StringRecord, index: Option<usize>) -> Option<String> {
    let value = record.get(index?)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse a start-time cell as a datetime, falling back to a bare date
/// (midnight).
fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .map(|d| d.and_hms_opt(0, 0, 0).unwrap())
        })
}

/// Parse a birth-year cell; exports write both `1992` and `1992.0`.
fn parse_birth_year(value: &str) -> Option<i32> {
    let year: f64 = value.parse().ok()?;
    if year.fract() != 0.0 {
        return None;
    }
    Some(year as i32)
}
