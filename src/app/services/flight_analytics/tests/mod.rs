//! Tests for the flight analytics module
//!
//! Fixture builders shared by the airline, schedule and summary tests.


use crate::app::models::FlightInfo;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Build a timestamp in August 2024
pub fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 8, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Create a flight departing at `departure` and airborne for `minutes`
pub fn create_test_flight(
    number: &str,
    airline: Option<&str>,
    origin: &str,
    destination: &str,
    departure: NaiveDateTime,
    minutes: i64,
) -> FlightInfo {
    FlightInfo::new(
        Some(number.to_string()),
        Some(format!("XX{}", number)),
        airline.map(str::to_string),
        departure,
        departure + TimeDelta::minutes(minutes),
        origin.to_string(),
        destination.to_string(),
    )
}

/// Create a flight on `airline` with the given duration, other fields fixed
pub fn create_airline_flight(number: &str, airline: Option<&str>, minutes: i64) -> FlightInfo {
    create_test_flight(
        number,
        airline,
        "Fukuoka",
        "Haneda Airport",
        at(15, 8, 0),
        minutes,
    )
}

/// Mixed fleet: IndiGo, Japan Airlines, and one flight with no airline
pub fn create_mixed_fleet() -> Vec<FlightInfo> {
    vec![
        create_test_flight(
            "1",
            Some("IndiGo"),
            "Delhi",
            "Mumbai",
            at(15, 6, 0),
            125,
        ),
        create_test_flight(
            "2",
            Some("Japan Airlines"),
            "Fukuoka",
            "Haneda Airport",
            at(15, 7, 0),
            95,
        ),
        create_test_flight(
            "3",
            None,
            "Haneda Airport",
            "Fukuoka",
            at(15, 0, 30),
            110,
        ),
        create_test_flight(
            "4",
            Some("IndiGo"),
            "Mumbai",
            "Delhi",
            at(16, 23, 10),
            130,
        ),
        create_test_flight(
            "5",
            Some("Japan Airlines"),
            "Haneda Airport",
            "Fukuoka",
            at(16, 1, 1),
            115,
        ),
        create_test_flight(
            "6",
            Some("IndiGo"),
            "Delhi",
            "Bengaluru",
            at(17, 12, 0),
            170,
        ),
    ]
}

/// Flight numbers of `flights`, in order
pub fn numbers(flights: &[FlightInfo]) -> Vec<&str> {
    flights.iter().filter_map(FlightInfo::name).collect()
}
