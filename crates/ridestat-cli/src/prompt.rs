//! Interactive selector input with re-prompt on invalid values.

use std::io::{self, Write};

use colored::Colorize;
use ridestat::{parse_month, parse_weekday, City, Selector};

/// Ask for city, month, and weekday until every answer is valid.
pub fn read_selector() -> io::Result<Selector> {
    let city = ask_until_valid(
        "Which city do you want to see information for?\n\
         0 - All, 1 - Chicago, 2 - New York, 3 - Washington\n\
         You can use either number or city name: ",
        |input| input.parse::<City>(),
    )?;

    let month = ask_until_valid(
        "Which month do you want to see the data for?\n\
         0 - All, or 1-12 / a month name: ",
        parse_month,
    )?;

    let weekday = ask_until_valid(
        "Which day of the week do you want to see the data for?\n\
         0 - All, 1 - Mon, 2 - Tue, 3 - Wed, 4 - Thu, 5 - Fri, 6 - Sat, 7 - Sun\n\
         You can use either number or day name: ",
        parse_weekday,
    )?;

    Ok(Selector::new(city, month, weekday))
}

/// Ask a yes/no question; "yes"/"y" (case-insensitive) is true.
pub fn confirm(question: &str) -> io::Result<bool> {
    let answer = read_line(question)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "yes" | "y"))
}

/// Repeat a prompt until `parse` accepts the answer.
fn ask_until_valid<T, F>(question: &str, parse: F) -> io::Result<T>
where
    F: Fn(&str) -> Result<T, String>,
{
    loop {
        let answer = read_line(question)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(message) => {
                println!("{} {}", "Invalid selection:".red().bold(), message);
                println!();
            }
        }
    }
}

/// Print a prompt and read one line from stdin.
fn read_line(question: &str) -> io::Result<String> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}
