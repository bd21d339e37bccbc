//! Tests for the flight flattener
//!
//! Fixture builders for raw records live here; the test cases are split
//! by concern.


use crate::app::models::{AirlineRef, Endpoint, FlightIdentity, RawFlight};
use chrono::{NaiveDate, NaiveDateTime};

/// Build a timestamp in August 2024
pub fn scheduled(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 8, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Create a raw flight record between two airports
pub fn create_raw_flight(
    number: &str,
    airline: Option<&str>,
    origin: &str,
    departure: NaiveDateTime,
    destination: &str,
    arrival: NaiveDateTime,
) -> RawFlight {
    RawFlight {
        flight: FlightIdentity {
            number: Some(number.to_string()),
            iata: Some(format!("XX{}", number)),
        },
        airline: AirlineRef {
            name: airline.map(str::to_string),
        },
        departure: Endpoint {
            airport: origin.to_string(),
            scheduled: departure,
        },
        arrival: Endpoint {
            airport: destination.to_string(),
            scheduled: arrival,
        },
    }
}
