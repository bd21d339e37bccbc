//! Route, time-of-day and arrival-order queries

use crate::app::models::FlightInfo;
use chrono::NaiveTime;

/// Flights between `first` and `second` in either direction.
///
/// The pair is unordered: a flight matches when its origin and its
/// destination are each one of the two airports. A flight from one of them
/// back to the same airport therefore matches too.
pub fn flights_between_airports(
    flights: &[FlightInfo],
    first: &str,
    second: &str,
) -> Vec<FlightInfo> {
    let in_pair = |airport: &str| airport == first || airport == second;

    flights
        .iter()
        .filter(|flight| in_pair(flight.origin()) && in_pair(flight.destination()))
        .cloned()
        .collect()
}

/// Flights whose departure clock time is strictly after `time`, on any date
pub fn flights_after_time(flights: &[FlightInfo], time: NaiveTime) -> Vec<FlightInfo> {
    flights
        .iter()
        .filter(|flight| flight.departure().time() > time)
        .cloned()
        .collect()
}

/// Flights ordered by arrival, latest first; equal arrivals keep input order
pub fn sort_by_arrival_descending(flights: &[FlightInfo]) -> Vec<FlightInfo> {
    let mut sorted = flights.to_vec();
    // sort_by is stable
    sorted.sort_by(|a, b| b.arrival().cmp(&a.arrival()));
    sorted
}
