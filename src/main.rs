//! # chatstats CLI
//!
//! Command-line front end for the chatstats library.

use std::io::{self, Read};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chatstats::ChatstatsError;
use chatstats::cli::Args;
use chatstats::core::analyze_export;
use chatstats::format::{to_format_string, write_to_format};

fn main() {
    init_logging();

    if let Err(e) = run() {
        error!(error = %e, "analysis failed");
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so the report on stdout stays machine readable.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), ChatstatsError> {
    let start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let config = args.analyzer_config();
    let format = args.output_format()?;

    let export = read_input(&args.input)?;
    let report = analyze_export(&export, &config)?;

    info!(
        authors = report.len(),
        failures = report.failures.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "analysis finished"
    );

    match &args.output {
        Some(path) => {
            write_to_format(&report, path, format)?;
            info!(path = %path, %format, "report written");
        }
        None => println!("{}", to_format_string(&report, format)?),
    }

    Ok(())
}

fn read_input(input: &str) -> Result<String, ChatstatsError> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}
