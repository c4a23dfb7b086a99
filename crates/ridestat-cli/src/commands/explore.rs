//! Explore command - interactive filter/report loop.

use std::path::PathBuf;
use std::time::Instant;

use colored::Colorize;
use ridestat::{filter, StatsReport};

use crate::output;
use crate::prompt;

pub fn run(dir: PathBuf, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "Hello! Let's explore some US bikeshare data!".cyan().bold());
    println!();

    // The table is built once; every loop iteration filters it afresh.
    let table = super::load_table(&dir, verbose, false)?;

    loop {
        let selector = loop {
            let selector = prompt::read_selector()?;
            println!();
            println!("You chose: {}.", selector.to_string().white().bold());
            if prompt::confirm("Do you wish to proceed with these filters? Enter yes or no: ")? {
                break selector;
            }
            println!();
        };

        let started = Instant::now();
        let subset = filter::apply(&table.records, &selector);
        let report = StatsReport::compute(&subset, &selector);

        println!();
        output::print_report(&report, &selector, started.elapsed());
        println!();

        if !prompt::confirm("Would you like to restart? Enter yes to go again: ")? {
            println!("{}", "Thank you for using this program!".cyan());
            return Ok(());
        }
        println!();
    }
}
