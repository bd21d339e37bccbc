//! Flight analytics over flattened flight records
//!
//! Every function here borrows a slice of [`FlightInfo`] and returns a fresh
//! value. None of them fail: empty input or a query that matches nothing
//! yields a zero duration, an empty map or an empty vector.
//!
//! # Architecture
//!
//! - [`airline`] - airline filtering and duration aggregation, keyed by
//!   airline name
//! - [`schedule`] - route, time-of-day and arrival-order queries
//! - [`summary`] - the bundle of results the report prints
//!
//! # Example Usage
//!
//! ```rust
//! use flight_analytics::app::services::flight_analytics::{total_duration, flights_after_time};
//! use flight_analytics::FlightInfo;
//! use chrono::{NaiveDate, NaiveTime, TimeDelta};
//!
//! let day = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
//! let flights = vec![FlightInfo::new(
//!     Some("306".to_string()),
//!     Some("JL306".to_string()),
//!     Some("Japan Airlines".to_string()),
//!     day.and_hms_opt(7, 0, 0).unwrap(),
//!     day.and_hms_opt(8, 35, 0).unwrap(),
//!     "Fukuoka".to_string(),
//!     "Haneda Airport".to_string(),
//! )];
//!
//! assert_eq!(total_duration(&flights, "Japan Airlines"), TimeDelta::minutes(95));
//! let cutoff = NaiveTime::from_hms_opt(1, 0, 0).unwrap();
//! assert_eq!(flights_after_time(&flights, cutoff).len(), 1);
//! ```

pub mod airline;
pub mod schedule;
pub mod summary;

#[cfg(test)]
pub mod tests;

pub use airline::{
    airlines, average_duration, average_duration_by_airline, filter_by_airline, total_duration,
    total_duration_by_airline,
};
pub use schedule::{flights_after_time, flights_between_airports, sort_by_arrival_descending};
pub use summary::{FlightSummary, summarize};
