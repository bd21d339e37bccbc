//! Command-line argument definitions for the flight analytics tool
//!
//! Defines the CLI interface using the clap derive API. Every report argument
//! here is optional and overrides the matching configuration value.

use crate::config::parse_time_of_day;
use crate::error::{FlightError, Result};
use chrono::NaiveTime;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the flight analytics report
///
/// Reads a JSON file of scheduled flights and reports per-airline flight
/// times, flights between two airports, flights departing after a time of
/// day, and flights ordered by arrival.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "flight-analytics",
    version,
    about = "Descriptive analytics over a JSON file of scheduled flights",
    long_about = "Reads a JSON array of scheduled flight records and reports total and average \
                  flight time per airline, flights between an airport pair, flights departing \
                  after a time of day, and flights ordered by arrival time."
)]
pub struct Args {
    /// Path to the JSON flight data file
    ///
    /// Overrides the data path from the config file. Defaults to ./flights.json
    #[arg(value_name = "DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// JSON configuration file for reader and report settings. If not specified,
    /// looks for <config dir>/flight-analytics/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Airline for the total and average flight time tasks
    #[arg(
        short = 'a',
        long = "airline",
        value_name = "NAME",
        help = "Airline for the total and average flight time tasks"
    )]
    pub airline: Option<String>,

    /// Airport pair for the between-airports task
    ///
    /// Two airport names separated by a comma. Direction does not matter.
    #[arg(
        short = 'b',
        long = "between",
        value_name = "A,B",
        help = "Comma-separated airport pair for the between-airports task"
    )]
    pub between: Option<AirportPair>,

    /// Report flights departing strictly after this time of day
    #[arg(
        long = "after",
        value_name = "HH:MM",
        value_parser = parse_time_of_day,
        help = "Report flights departing strictly after this time of day"
    )]
    pub after: Option<NaiveTime>,

    /// List every flight before the report
    #[arg(long = "list-flights", help = "List every flight before the report")]
    pub list_flights: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only log errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Wrapper for parsing a comma-separated airport pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportPair {
    pub first: String,
    pub second: String,
}

impl FromStr for AirportPair {
    type Err = FlightError;

    fn from_str(s: &str) -> Result<Self> {
        let airports: Vec<&str> = s.split(',').map(str::trim).collect();

        match airports.as_slice() {
            [first, second] if !first.is_empty() && !second.is_empty() => Ok(AirportPair {
                first: first.to_string(),
                second: second.to_string(),
            }),
            _ => Err(FlightError::configuration(format!(
                "Airport pair must be two names separated by a comma, got '{}'",
                s
            ))),
        }
    }
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(FlightError::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(airline) = &self.airline {
            if airline.trim().is_empty() {
                return Err(FlightError::configuration("Airline name cannot be empty"));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
