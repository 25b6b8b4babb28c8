//! Julian Date converter demonstration.
//!
//! Usage:
//!     jdconv                      print the built-in example conversions
//!     jdconv 2024-03-15 06:30:15  convert one UTC date and time
//!     jdconv -v ...               log conversion details to stderr

use std::process::ExitCode;

use clap::Parser;
use julian_date::{ConversionError, convert_extended};
use tracing::Level;

/// Built-in demonstration inputs (date, time), all UT
const EXAMPLES: [(&str, &str); 3] = [
    ("2000-01-01", "12:00:00"), // J2000.0 noon
    ("2024-10-26", "00:00:00"), // midnight
    ("2024-03-15", "06:30:15"),
];

const RULE_WIDTH: usize = 40;

/// CLI arguments for the converter.
#[derive(Parser, Debug)]
#[command(name = "jdconv")]
#[command(about = "Convert a UTC date and time to Julian Date and Modified Julian Date")]
struct Args {
    /// Log conversion details to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Date as YYYY-MM-DD. Without it the built-in examples are shown.
    #[arg(requires = "time")]
    date: Option<String>,

    /// Time as HH:MM:SS, optionally with fractional seconds.
    time: Option<String>,
}

fn print_conversion(date: &str, time: &str) -> Result<(), ConversionError> {
    let (jd, mjd) = convert_extended(date, time)?;
    println!("\nTarget Date (UT): {date} {time}");
    println!("  Julian Date (JD): {jd:.6} days");
    println!("  Modified Julian Date (MJD): {mjd:.6} days");
    Ok(())
}

fn run_examples() -> Result<(), ConversionError> {
    println!("--- Julian Date Converter Demonstration ---");
    for (i, (date, time)) in EXAMPLES.iter().enumerate() {
        if i > 0 {
            println!("{}", "-".repeat(RULE_WIDTH));
        }
        print_conversion(date, time)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help lands here too; only real usage errors fail
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        },
    };

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match (args.date.as_deref(), args.time.as_deref()) {
        (Some(date), Some(time)) => print_conversion(date, time),
        _ => run_examples(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}. Please use YYYY-MM-DD and HH:MM:SS.");
            ExitCode::FAILURE
        },
    }
}
