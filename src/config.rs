//! Configuration management and validation.
//!
//! Provides the reader and report settings, loaded in layers: built-in
//! defaults, then an optional JSON config file, then command-line overrides
//! (applied by the CLI), then [`AppConfig::validate`].

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_AIRLINE, DEFAULT_AIRPORT_A, DEFAULT_AIRPORT_B,
    DEFAULT_CUTOFF_TIME, DEFAULT_DATA_FILE, TIME_OF_DAY_FORMATS,
};
use crate::error::{FlightError, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings for loading raw flight records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Path to the JSON flight data file
    pub data_path: PathBuf,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl ReaderConfig {
    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = data_path.into();
        self
    }
}

/// Arguments for the fixed report tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Airline for the single-airline total and average tasks
    pub airline: String,

    /// Airports for the between-airports task (unordered)
    pub airport_pair: (String, String),

    /// Departures strictly after this time-of-day are reported
    #[serde(with = "time_of_day")]
    pub cutoff_time: NaiveTime,

    /// Print every flattened flight before the report
    pub list_flights: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let (hour, minute) = DEFAULT_CUTOFF_TIME;
        Self {
            airline: DEFAULT_AIRLINE.to_string(),
            airport_pair: (DEFAULT_AIRPORT_A.to_string(), DEFAULT_AIRPORT_B.to_string()),
            cutoff_time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN),
            list_flights: false,
        }
    }
}

impl ReportConfig {
    pub fn with_airline(mut self, airline: impl Into<String>) -> Self {
        self.airline = airline.into();
        self
    }

    pub fn with_airport_pair(
        mut self,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        self.airport_pair = (first.into(), second.into());
        self
    }

    pub fn with_cutoff_time(mut self, cutoff_time: NaiveTime) -> Self {
        self.cutoff_time = cutoff_time;
        self
    }

    pub fn with_flight_listing(mut self) -> Self {
        self.list_flights = true;
        self
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub reader: ReaderConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    /// Default config file location, `<config dir>/flight-analytics/config.json`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            FlightError::configuration("Could not determine user configuration directory")
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a JSON file; absent keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents).map_err(|e| {
            FlightError::configuration(format!(
                "Invalid config file {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check the configuration is usable for a report run
    pub fn validate(&self) -> Result<()> {
        if self.reader.data_path.as_os_str().is_empty() {
            return Err(FlightError::configuration("Data file path cannot be empty"));
        }

        if self.report.airline.trim().is_empty() {
            return Err(FlightError::configuration("Airline name cannot be empty"));
        }

        let (first, second) = &self.report.airport_pair;
        if first.trim().is_empty() || second.trim().is_empty() {
            return Err(FlightError::configuration(
                "Airport pair must name two airports",
            ));
        }

        Ok(())
    }
}

/// Parse a time-of-day such as `01:00` or `13:45:30`
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime> {
    TIME_OF_DAY_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value.trim(), format).ok())
        .ok_or_else(|| {
            FlightError::configuration(format!(
                "Invalid time of day '{}', expected HH:MM or HH:MM:SS",
                value
            ))
        })
}

/// Serde adapter so config files may write `"01:00"` as well as `"01:00:00"`
mod time_of_day {
    use super::parse_time_of_day;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format("%H:%M:%S"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time_of_day(&raw).map_err(de::Error::custom)
    }
}
