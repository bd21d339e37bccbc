//! Error handling for flight data loading and report configuration.
//!
//! The analytics core never fails; every variant here originates in the
//! glue around it (reading the data file, decoding records, configuration).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlightError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Flight data file not found at path: {path}")]
    DataFileNotFound { path: PathBuf },

    #[error("Invalid flight data in file: {path} - {reason}")]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl FlightError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlightError>;
