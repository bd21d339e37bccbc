//! Flight Analytics Library
//!
//! Descriptive analytics over scheduled flight records read from a JSON data
//! file.
//!
//! This library provides tools for:
//! - Decoding nested raw flight records with serde
//! - Flattening them into duration-annotated [`FlightInfo`] records
//! - Per-airline total and average flight duration, singly or for every airline
//! - Flights between an airport pair, in either direction
//! - Flights departing after a time of day
//! - Flights ordered by arrival, latest first
//!
//! The analytics layer is pure and infallible; errors only arise while
//! loading data or configuration.

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod flight_analytics;
        pub mod flight_flattener;
        pub mod flight_reader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FlightInfo, RawFlight};
pub use config::{AppConfig, ReaderConfig, ReportConfig};
pub use error::{FlightError, Result};
