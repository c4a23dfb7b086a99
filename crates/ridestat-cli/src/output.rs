//! Console rendering of a statistics report.

use std::time::Duration;

use colored::Colorize;
use ridestat::{Selector, StatsReport, TopCounts};

/// Print the full statistics battery for one filtered subset.
pub fn print_report(report: &StatsReport, selector: &Selector, elapsed: Duration) {
    println!("{}", "-".repeat(40));
    println!(
        "{} {}  ({} rides)",
        "Filters:".cyan().bold(),
        selector.to_string().white(),
        report.rides.to_string().white().bold()
    );
    println!();

    if let Some(ref top_month) = report.top_month {
        print_top("The most common month:", top_month);
    }
    if let Some(ref top_weekday) = report.top_weekday {
        print_top("The most common day of week:", top_weekday);
    }
    print_top("The most common start hour:", &report.top_hour);
    print_top("Most commonly used start station:", &report.top_start_station);
    print_top("Most commonly used end station:", &report.top_end_station);
    print_top(
        "Most frequent start/end station combination:",
        &report.top_trip,
    );

    println!(
        "{} {:.1} seconds",
        "Total travel time:".yellow().bold(),
        report.durations.total_seconds
    );
    println!(
        "{}  {:.1} seconds",
        "Mean travel time:".yellow().bold(),
        report.durations.mean_seconds
    );
    println!();

    println!("{}", "Counts of user types:".yellow().bold());
    if report.user_types.is_empty() {
        println!("  {}", no_data("user type"));
    } else {
        for (user_type, count) in &report.user_types {
            println!("  {:12} {}", user_type, count);
        }
    }
    println!();

    println!("{}", "Counts of gender:".yellow().bold());
    match &report.genders {
        Some(genders) => {
            for (gender, count) in genders {
                println!("  {:12} {}", gender, count);
            }
        }
        None => println!("  {}", no_data("gender")),
    }
    println!();

    match &report.birth_years {
        Some(years) => {
            println!(
                "{}    {}",
                "Earliest year of birth:".yellow().bold(),
                years.earliest
            );
            println!(
                "{}      {}",
                "Latest year of birth:".yellow().bold(),
                years.latest
            );
            println!(
                "{} {}",
                "Most common year of birth:".yellow().bold(),
                join(&years.most_common)
            );
        }
        None => {
            println!(
                "{} {}",
                "Years of birth:".yellow().bold(),
                no_data("birth year")
            );
        }
    }

    println!();
    println!(
        "Outputs were created in {:.3} seconds.",
        elapsed.as_secs_f64()
    );
    println!("{}", "-".repeat(40));
}

/// Print one "most common" statistic; ties are all listed.
fn print_top<T: std::fmt::Display>(label: &str, top: &TopCounts<T>) {
    if top.is_empty() {
        println!("{} {}", label.yellow().bold(), no_data("ride"));
    } else {
        println!(
            "{} {} ({} rides)",
            label.yellow().bold(),
            join(&top.values).white(),
            top.count
        );
    }
    println!();
}

fn join<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn no_data(what: &str) -> String {
    format!("<No {} data under the current filters.>", what)
        .dimmed()
        .to_string()
}
