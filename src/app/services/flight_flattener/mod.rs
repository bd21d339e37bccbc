//! Flattening raw flight records for analysis
//!
//! Maps each nested [`RawFlight`] onto a flat [`FlightInfo`] with its
//! scheduled duration computed once. The mapping is one-to-one and keeps
//! input order; records are never filtered or repaired here. A structurally
//! broken record never reaches this point, since decoding it already failed.

use crate::app::models::{FlightInfo, RawFlight};
use tracing::debug;

/// Flatten every raw record, preserving input order
pub fn flatten(raw_flights: &[RawFlight]) -> Vec<FlightInfo> {
    let flights: Vec<FlightInfo> = raw_flights.iter().map(FlightInfo::from).collect();

    debug!("Flattened {} raw flight records", flights.len());

    flights
}

#[cfg(test)]
pub mod tests;
