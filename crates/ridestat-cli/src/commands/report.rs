//! Report command - one-shot statistics for a fixed set of filters.

use std::path::PathBuf;
use std::time::Instant;

use ridestat::{filter, City, Selector, StatsReport};

use crate::cli::{MonthArg, WeekdayArg};
use crate::output;

pub fn run(
    dir: PathBuf,
    city: City,
    month: MonthArg,
    day: WeekdayArg,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = super::load_table(&dir, verbose, json)?;
    let selector = Selector::new(city, month.0, day.0);

    let started = Instant::now();
    let subset = filter::apply(&table.records, &selector);
    let report = StatsReport::compute(&subset, &selector);

    if json {
        let payload = serde_json::json!({
            "selector": selector,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        output::print_report(&report, &selector, started.elapsed());
    }

    Ok(())
}
