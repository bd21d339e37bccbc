//! Loading raw flight records from a JSON data file
//!
//! The reader is an explicit value built from [`ReaderConfig`] and handed to
//! whoever needs to load data; there is no process-wide mapper instance.
//! Every failure here is fatal for the run: a missing file, unreadable
//! contents, malformed JSON, or a record missing a required field.

use crate::app::models::RawFlight;
use crate::config::ReaderConfig;
use crate::error::{FlightError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Reads the configured data file into raw flight records
#[derive(Debug, Clone)]
pub struct FlightReader {
    config: ReaderConfig,
}

impl FlightReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub fn data_path(&self) -> &Path {
        &self.config.data_path
    }

    /// Read and decode every record in the data file, in file order
    pub fn read(&self) -> Result<Vec<RawFlight>> {
        let path = self.data_path();

        if !path.exists() {
            return Err(FlightError::DataFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path)?;
        debug!("Read {} bytes from {}", contents.len(), path.display());

        let flights = parse_flights(path, &contents)?;
        info!("Loaded {} flights from {}", flights.len(), path.display());

        Ok(flights)
    }
}

/// Decode a JSON array of raw flight records
///
/// `source` only labels errors; nothing is read from it.
pub fn parse_flights(source: &Path, contents: &str) -> Result<Vec<RawFlight>> {
    serde_json::from_str(contents).map_err(|e| FlightError::InvalidFormat {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })
}
