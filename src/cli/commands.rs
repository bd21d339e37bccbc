//! Command implementations for the flight analytics CLI
//!
//! This module contains the report workflow: logging setup, layered
//! configuration, loading and flattening the data file, running the report
//! tasks, and rendering their results.

use crate::app::models::FlightInfo;
use crate::app::services::flight_analytics::{FlightSummary, summarize};
use crate::app::services::flight_flattener::flatten;
use crate::app::services::flight_reader::FlightReader;
use crate::cli::args::{Args, OutputFormat};
use crate::config::AppConfig;
use crate::constants::LOG_TARGET;
use anyhow::{Context, Result};
use chrono::TimeDelta;
use colored::*;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::time::Instant;
use tracing::{debug, info};

/// Main command runner for the flight analytics report
///
/// This function orchestrates the whole run:
/// 1. Set up logging and configuration
/// 2. Load raw flights and flatten them
/// 3. Run the report tasks
/// 4. Print the report in the requested format
pub fn run(args: Args) -> Result<FlightSummary> {
    let start_time = Instant::now();

    setup_logging(&args);

    info!("Starting flight analytics");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let reader = FlightReader::new(config.reader.clone());
    let raw_flights = reader.read().with_context(|| {
        format!(
            "Failed to load flights from {}",
            reader.data_path().display()
        )
    })?;

    let flights = flatten(&raw_flights);
    let summary = summarize(&flights, &config.report);

    let output = match args.output_format {
        OutputFormat::Human => render_human(&summary, &flights, config.report.list_flights),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&summary).context("Failed to render JSON report")?
        }
    };
    println!("{}", output);

    info!(
        "Report on {} flights completed in {:?}",
        summary.flight_count,
        start_time.elapsed()
    );

    Ok(summary)
}

/// Set up logging based on command line arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let initialized = if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialized.is_err() {
        debug!("Logging already initialized");
    } else {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Load configuration using layered approach (defaults -> file -> args)
pub fn load_configuration(args: &Args) -> Result<AppConfig> {
    let config_file = match &args.config_file {
        Some(path) => Some(path.clone()),
        None => AppConfig::default_config_path()
            .ok()
            .filter(|path| path.exists()),
    };

    let mut config = match &config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            AppConfig::from_file(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?
        }
        None => {
            info!("No config file found, using defaults");
            AppConfig::default()
        }
    };

    apply_cli_overrides(&mut config, args);

    config.validate()?;

    Ok(config)
}

/// Apply command line overrides on top of the loaded configuration
fn apply_cli_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(data_file) = &args.data_file {
        config.reader.data_path = data_file.clone();
    }

    if let Some(airline) = &args.airline {
        config.report.airline = airline.clone();
    }

    if let Some(pair) = &args.between {
        config.report.airport_pair = (pair.first.clone(), pair.second.clone());
    }

    if let Some(after) = args.after {
        config.report.cutoff_time = after;
    }

    if args.list_flights {
        config.report.list_flights = true;
    }
}

/// Render the report as human-readable text
pub fn render_human(
    summary: &FlightSummary,
    flights: &[FlightInfo],
    list_flights: bool,
) -> String {
    let mut out = String::new();

    if list_flights {
        section(&mut out, &format!("Flights ({}):", flights.len()));
        for flight in flights {
            let _ = writeln!(out, "{}", format_flight(flight));
        }
        out.push('\n');
    }

    section(&mut out, "Task 1: Total flight time");
    let _ = writeln!(
        out,
        "Airline {}'s total flight time: {}",
        summary.airline,
        format_duration(summary.total_duration)
    );
    out.push('\n');

    section(&mut out, "Task 2: Average flight time");
    let _ = writeln!(
        out,
        "Airline {}'s average flight time: {}",
        summary.airline,
        format_duration(summary.average_duration)
    );
    out.push('\n');

    let (first, second) = &summary.airport_pair;
    section(&mut out, "Task 3: Flights between airports");
    let _ = writeln!(
        out,
        "There are a total of {} flights between {} and {}.",
        summary.flights_between_airports.len(),
        first,
        second
    );
    out.push('\n');

    section(&mut out, "Task 4: Flights departing after a time of day");
    let _ = writeln!(
        out,
        "There are {} flights departing after {}.",
        summary.flights_after_time.len(),
        summary.cutoff_time.format("%H:%M")
    );
    out.push('\n');

    section(&mut out, "Task 5: Average flight time by airline");
    write_durations(&mut out, &summary.average_duration_by_airline);
    out.push('\n');

    section(&mut out, "Task 6: Flights sorted by arrival time");
    for flight in &summary.flights_by_arrival {
        let _ = writeln!(out, "{}", format_flight(flight));
    }
    out.push('\n');

    section(&mut out, "Task 7: Total flight time by airline");
    write_durations(&mut out, &summary.total_duration_by_airline);

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title.bold().cyan());
}

fn write_durations(out: &mut String, durations: &BTreeMap<String, TimeDelta>) {
    if durations.is_empty() {
        let _ = writeln!(out, "{}", "No airlines found".dimmed());
    }
    for (airline, duration) in durations {
        let _ = writeln!(out, "{}: {}", airline, format_duration(*duration));
    }
}

/// One-line description of a flight
pub fn format_flight(flight: &FlightInfo) -> String {
    format!(
        "{} ({}) {}: {} -> {}, departs {}, arrives {}, {}",
        flight.name().unwrap_or("-"),
        flight.iata().unwrap_or("-"),
        flight.airline().unwrap_or("unknown airline"),
        flight.origin(),
        flight.destination(),
        flight.departure().format("%Y-%m-%d %H:%M"),
        flight.arrival().format("%Y-%m-%d %H:%M"),
        format_duration(flight.duration())
    )
}

/// Format a duration as `{h}h {m}m {s}s`, hours unbounded
pub fn format_duration(duration: TimeDelta) -> String {
    let total_seconds = duration.num_seconds();
    let sign = if total_seconds < 0 { "-" } else { "" };
    let seconds = total_seconds.unsigned_abs();

    format!(
        "{}{}h {}m {}s",
        sign,
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}
