//! Trip records, the unified table, and filter-dimension parsing.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::load::SourceMetadata;

/// Separator between start and end station in the full-trip key.
pub const TRIP_SEPARATOR: &str = " _ ";

/// English month names, indexed by month number minus one.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names, indexed by weekday number (0 = Monday).
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

// Lowercased name aliases for the month dimension.
static MONTH_ALIASES: Lazy<HashMap<String, u32>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for (idx, name) in MONTH_NAMES.iter().enumerate() {
        let number = idx as u32 + 1;
        let full = name.to_lowercase();
        // "jan", "feb", ... plus the common "sept"
        m.insert(full[..3].to_string(), number);
        m.insert(full, number);
    }
    m.insert("sept".to_string(), 9);
    m
});

// Lowercased name aliases for the weekday dimension.
static WEEKDAY_ALIASES: Lazy<HashMap<String, u32>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for (idx, name) in WEEKDAY_NAMES.iter().enumerate() {
        let full = name.to_lowercase();
        m.insert(full[..3].to_string(), idx as u32);
        m.insert(full, idx as u32);
    }
    m
});

/// City a trip record belongs to.
///
/// `Unknown` (-1) tags records from files whose base name matched no known
/// city; they stay in the unified table but cannot be selected by the city
/// dimension. `All` (0) is the no-filter value used in selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Unknown,
    All,
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Numeric identifier: -1 unknown, 0 all, then one per city.
    pub fn id(&self) -> i8 {
        match self {
            City::Unknown => -1,
            City::All => 0,
            City::Chicago => 1,
            City::NewYorkCity => 2,
            City::Washington => 3,
        }
    }

    /// Map an input file's base name (without extension) to its city.
    pub fn from_file_stem(stem: &str) -> Self {
        match stem {
            "chicago" => City::Chicago,
            "new_york_city" => City::NewYorkCity,
            "washington" => City::Washington,
            _ => City::Unknown,
        }
    }

    /// Human-readable city name.
    pub fn display_name(&self) -> &'static str {
        match self {
            City::Unknown => "Unknown",
            City::All => "All",
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York",
            City::Washington => "Washington",
        }
    }
}

impl FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "all" => Ok(City::All),
            "1" | "chicago" | "chi" => Ok(City::Chicago),
            "2" | "new york" | "ny" | "nyc" | "new york city" | "new_york_city" => {
                Ok(City::NewYorkCity)
            }
            "3" | "washington" | "wash" => Ok(City::Washington),
            _ => Err(format!(
                "Unknown city: {}. Use 0-3, all, chicago, new york, or washington.",
                s
            )),
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Parse a month selection: `None` means no month filter.
///
/// Accepts `0`/`all`, the numbers 1-12, full month names, and three-letter
/// abbreviations (plus `sept`), case-insensitively.
pub fn parse_month(input: &str) -> Result<Option<u32>, String> {
    let s = input.trim().to_lowercase();
    if s == "all" || s == "0" {
        return Ok(None);
    }
    if let Ok(n) = s.parse::<u32>() {
        if (1..=12).contains(&n) {
            return Ok(Some(n));
        }
        return Err(format!("Month number out of range: {}", n));
    }
    MONTH_ALIASES
        .get(&s)
        .map(|&n| Some(n))
        .ok_or_else(|| format!("Unknown month: {}. Use 0-12, all, or a month name.", input))
}

/// Parse a weekday selection: `None` means no weekday filter.
///
/// Accepts `0`/`all`, the numbers 1-7 (1 = Monday .. 7 = Sunday), full day
/// names, and three-letter abbreviations, case-insensitively. The returned
/// weekday number is 0-based (0 = Monday .. 6 = Sunday).
pub fn parse_weekday(input: &str) -> Result<Option<u32>, String> {
    let s = input.trim().to_lowercase();
    if s == "all" || s == "0" {
        return Ok(None);
    }
    if let Ok(n) = s.parse::<u32>() {
        if (1..=7).contains(&n) {
            return Ok(Some(n - 1));
        }
        return Err(format!("Weekday number out of range: {}", n));
    }
    WEEKDAY_ALIASES
        .get(&s)
        .map(|&n| Some(n))
        .ok_or_else(|| format!("Unknown weekday: {}. Use 0-7, all, or a day name.", input))
}

/// One ride entry, with calendar fields derived from its start time.
#[derive(Debug, Clone, Serialize)]
pub struct TripRecord {
    /// When the ride started.
    pub start_time: NaiveDateTime,
    /// Station the ride started from.
    pub start_station: String,
    /// Station the ride ended at.
    pub end_station: String,
    /// Ride length in seconds.
    pub duration_seconds: f64,
    /// Subscriber/customer category, when recorded.
    pub user_type: Option<String>,
    /// Rider gender, when recorded.
    pub gender: Option<String>,
    /// Rider birth year, when recorded.
    pub birth_year: Option<i32>,
    /// City the source file belongs to.
    pub city: City,
    /// Month number of the start time (1-12).
    pub month: u32,
    /// Month name of the start time.
    pub month_name: String,
    /// Weekday number of the start time (0 = Monday .. 6 = Sunday).
    pub weekday: u32,
    /// Weekday name of the start time.
    pub weekday_name: String,
    /// Hour of day of the start time (0-23).
    pub hour: u32,
    /// Composite trip key: start station + `" _ "` + end station.
    pub full_trip: String,
}

impl TripRecord {
    /// Build a record, deriving all calendar fields from `start_time`.
    pub fn new(
        start_time: NaiveDateTime,
        start_station: String,
        end_station: String,
        duration_seconds: f64,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
        city: City,
    ) -> Self {
        let month = start_time.month();
        let weekday = start_time.weekday().num_days_from_monday();
        let full_trip = format!("{}{}{}", start_station, TRIP_SEPARATOR, end_station);

        Self {
            start_time,
            month,
            month_name: MONTH_NAMES[(month - 1) as usize].to_string(),
            weekday,
            weekday_name: WEEKDAY_NAMES[weekday as usize].to_string(),
            hour: start_time.hour(),
            full_trip,
            start_station,
            end_station,
            duration_seconds,
            user_type,
            gender,
            birth_year,
            city,
        }
    }
}

/// The unified in-memory table of all loaded trip records.
///
/// Built once per run, ordered by file discovery order then per-file row
/// order, duplicates preserved, and treated as read-only thereafter.
#[derive(Debug, Clone)]
pub struct TripTable {
    /// All records from all loaded files.
    pub records: Vec<TripRecord>,
    /// Provenance of each loaded file, in discovery order.
    pub sources: Vec<SourceMetadata>,
}

impl TripTable {
    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no records were loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
