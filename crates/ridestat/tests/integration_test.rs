//! Integration tests for ridestat: load, filter, and report end to end.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use ridestat::{discover_files, filter, load_files, City, RidestatError, Selector, StatsReport};

/// Write a CSV file with the given base name into `dir`.
fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test CSV");
    path
}

const CHICAGO_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-06-05 08:00:00,2017-06-05 08:10:00,600,A,B,Subscriber,Male,1992.0
2017-06-12 09:00:00,2017-06-12 09:05:00,300,A,B,Subscriber,Female,1984
2017-05-01 10:00:00,2017-05-01 10:03:20,200,A,C,Customer,,
";

// Washington exports carry no demographic columns.
const WASHINGTON_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-06-07 11:00:00,2017-06-07 11:07:07,427.5,D,E,Registered
";

fn load_two_cities() -> (TempDir, ridestat::TripTable) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_csv(&dir, "chicago.csv", CHICAGO_CSV);
    write_csv(&dir, "washington.csv", WASHINGTON_CSV);

    let paths = discover_files(dir.path()).expect("Discovery failed");
    let table = load_files(&paths).expect("Load failed");
    (dir, table)
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_merges_all_files() {
    let (_dir, table) = load_two_cities();

    assert_eq!(table.len(), 4);
    let ids: Vec<i8> = table.records.iter().map(|r| r.city.id()).collect();
    assert_eq!(ids, vec![1, 1, 1, 3]);

    assert_eq!(table.sources.len(), 2);
    assert_eq!(table.sources[0].file, "chicago.csv");
    assert_eq!(table.sources[0].city, City::Chicago);
    assert_eq!(table.sources[0].row_count, 3);
    assert!(table.sources[0].hash.starts_with("sha256:"));
    assert_eq!(table.sources[1].city, City::Washington);
}

#[test]
fn test_load_preserves_file_then_row_order() {
    let (_dir, table) = load_two_cities();

    // Discovery is sorted by file name: chicago before washington, and
    // rows keep their per-file order.
    assert_eq!(table.records[0].full_trip, "A _ B");
    assert_eq!(table.records[2].full_trip, "A _ C");
    assert_eq!(table.records[3].full_trip, "D _ E");
}

#[test]
fn test_load_derives_calendar_fields() {
    let (_dir, table) = load_two_cities();

    // 2017-06-05 was a Monday.
    let first = &table.records[0];
    assert_eq!(first.month, 6);
    assert_eq!(first.month_name, "June");
    assert_eq!(first.weekday, 0);
    assert_eq!(first.weekday_name, "Monday");
    assert_eq!(first.hour, 8);
}

#[test]
fn test_load_optional_fields() {
    let (_dir, table) = load_two_cities();

    assert_eq!(table.records[0].birth_year, Some(1992));
    assert_eq!(table.records[1].birth_year, Some(1984));
    // Empty cells are missing, as are columns absent from the file.
    assert_eq!(table.records[2].gender, None);
    assert_eq!(table.records[3].gender, None);
    assert_eq!(table.records[3].user_type.as_deref(), Some("Registered"));
}

#[test]
fn test_unrecognized_file_stem_gets_unknown_city() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "boston.csv", WASHINGTON_CSV);

    let table = load_files(&[path]).unwrap();
    assert_eq!(table.records[0].city, City::Unknown);
    assert_eq!(table.records[0].city.id(), -1);
}

#[test]
fn test_missing_required_column_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "chicago.csv",
        "Start Time,Trip Duration,Start Station\n2017-06-05 08:00:00,600,A\n",
    );

    let err = load_files(&[path]).unwrap_err();
    assert!(matches!(err, RidestatError::MissingColumn { .. }));
}

#[test]
fn test_unparseable_start_time_is_fatal() {
    let dir = TempDir::new().unwrap();
    let bad = CHICAGO_CSV.replace("2017-06-12 09:00:00", "last tuesday");
    let path = write_csv(&dir, "chicago.csv", &bad);

    let err = load_files(&[path]).unwrap_err();
    assert!(matches!(err, RidestatError::Timestamp { row: 2, .. }));
}

#[test]
fn test_unparseable_duration_is_fatal() {
    let dir = TempDir::new().unwrap();
    let bad = CHICAGO_CSV.replace(",300,", ",five minutes,");
    let path = write_csv(&dir, "chicago.csv", &bad);

    let err = load_files(&[path]).unwrap_err();
    assert!(matches!(err, RidestatError::Field { .. }));
}

#[test]
fn test_no_input_files_is_an_error() {
    let err = load_files(&[]).unwrap_err();
    assert!(matches!(err, RidestatError::EmptyData(_)));
}

#[test]
fn test_discover_ignores_non_csv_files() {
    let dir = TempDir::new().unwrap();
    write_csv(&dir, "chicago.csv", CHICAGO_CSV);
    fs::write(dir.path().join("notes.txt"), "not data").unwrap();

    let paths = discover_files(dir.path()).unwrap();
    assert_eq!(paths.len(), 1);
}

// =============================================================================
// Filter + report scenarios
// =============================================================================

#[test]
fn test_city_filter_then_top_trip_pair() {
    let (_dir, table) = load_two_cities();

    let selector = Selector::new(City::Chicago, None, None);
    let subset = filter::apply(&table.records, &selector);
    assert_eq!(subset.len(), 3);

    let report = StatsReport::compute(&subset, &selector);
    assert_eq!(report.top_trip.count, 2);
    assert_eq!(report.top_trip.values, vec!["A _ B".to_string()]);
}

#[test]
fn test_all_selector_is_order_preserving_identity() {
    let (_dir, table) = load_two_cities();

    let subset = filter::apply(&table.records, &Selector::ALL);
    assert_eq!(subset.len(), table.len());
    for (kept, original) in subset.iter().zip(table.records.iter()) {
        assert_eq!(kept.start_time, original.start_time);
        assert_eq!(kept.full_trip, original.full_trip);
    }
}

#[test]
fn test_top_month_over_unequal_months() {
    let (_dir, table) = load_two_cities();

    // Three June rides, one May ride.
    let subset = filter::apply(&table.records, &Selector::ALL);
    let report = StatsReport::compute(&subset, &Selector::ALL);

    let top_month = report.top_month.expect("month unfiltered");
    assert_eq!(top_month.values, vec!["June".to_string()]);
    assert_eq!(top_month.count, 3);
}

#[test]
fn test_gender_no_data_for_washington_subset() {
    let (_dir, table) = load_two_cities();

    let selector = Selector::new(City::Washington, None, None);
    let subset = filter::apply(&table.records, &selector);
    let report = StatsReport::compute(&subset, &selector);

    assert!(report.genders.is_none());
    assert!(report.birth_years.is_none());
    assert_eq!(report.user_types, vec![("Registered".to_string(), 1)]);
}

#[test]
fn test_empty_subset_reports_degenerate_values() {
    let (_dir, table) = load_two_cities();

    // No Washington rides in May.
    let selector = Selector::new(City::Washington, Some(5), None);
    let subset = filter::apply(&table.records, &selector);
    assert!(subset.is_empty());

    let report = StatsReport::compute(&subset, &selector);
    assert_eq!(report.rides, 0);
    assert_eq!(report.durations.total_seconds, 0.0);
    assert_eq!(report.durations.mean_seconds, 0.0);
    assert!(report.top_start_station.is_empty());
    assert!(report.genders.is_none());
    assert!(report.birth_years.is_none());
}

#[test]
fn test_report_serializes_to_json() {
    let (_dir, table) = load_two_cities();

    let subset = filter::apply(&table.records, &Selector::ALL);
    let report = StatsReport::compute(&subset, &Selector::ALL);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["rides"], 4);
    assert!(json["top_trip"]["values"].is_array());
    assert!(json["genders"].is_array());
}
