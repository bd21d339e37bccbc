//! Airline-keyed filtering and duration aggregation
//!
//! Airline matching is exact and case-sensitive. A flight without an airline
//! never matches a query and is left out of every per-airline grouping.

use crate::app::models::FlightInfo;
use chrono::TimeDelta;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Flights operated by `airline`, in input order
pub fn filter_by_airline(flights: &[FlightInfo], airline: &str) -> Vec<FlightInfo> {
    operated_by(flights, airline).cloned().collect()
}

/// Sum of durations for `airline`; zero when it has no flights
pub fn total_duration(flights: &[FlightInfo], airline: &str) -> TimeDelta {
    sum_durations(operated_by(flights, airline))
}

/// Mean duration for `airline`; zero when it has no flights
///
/// The division truncates at nanosecond resolution.
pub fn average_duration(flights: &[FlightInfo], airline: &str) -> TimeDelta {
    let (total, count) = operated_by(flights, airline)
        .fold((TimeDelta::zero(), 0usize), |(total, count), flight| {
            (total + flight.duration(), count + 1)
        });

    average_of(total, count)
}

/// Mean duration per airline, one entry per distinct airline present
pub fn average_duration_by_airline(flights: &[FlightInfo]) -> BTreeMap<String, TimeDelta> {
    group_by_airline(flights)
        .into_iter()
        .map(|(airline, (total, count))| (airline, average_of(total, count)))
        .collect()
}

/// Summed duration per airline, one entry per distinct airline present
pub fn total_duration_by_airline(flights: &[FlightInfo]) -> BTreeMap<String, TimeDelta> {
    group_by_airline(flights)
        .into_iter()
        .map(|(airline, (total, _))| (airline, total))
        .collect()
}

/// Distinct airline names present in `flights`
pub fn airlines(flights: &[FlightInfo]) -> BTreeSet<String> {
    flights
        .iter()
        .filter_map(|flight| flight.airline())
        .map(str::to_string)
        .collect()
}

fn operated_by<'a>(
    flights: &'a [FlightInfo],
    airline: &'a str,
) -> impl Iterator<Item = &'a FlightInfo> + 'a {
    flights
        .iter()
        .filter(move |flight| flight.airline() == Some(airline))
}

fn sum_durations<'a>(flights: impl Iterator<Item = &'a FlightInfo>) -> TimeDelta {
    flights.fold(TimeDelta::zero(), |total, flight| total + flight.duration())
}

/// Running (total, count) per airline
fn group_by_airline(flights: &[FlightInfo]) -> BTreeMap<String, (TimeDelta, usize)> {
    let mut groups: BTreeMap<String, (TimeDelta, usize)> = BTreeMap::new();

    for flight in flights {
        let Some(airline) = flight.airline() else {
            continue;
        };

        let entry = groups
            .entry(airline.to_string())
            .or_insert((TimeDelta::zero(), 0));
        entry.0 += flight.duration();
        entry.1 += 1;
    }

    debug!(
        "Grouped {} flights into {} airlines",
        flights.len(),
        groups.len()
    );

    groups
}

fn average_of(total: TimeDelta, count: usize) -> TimeDelta {
    match i32::try_from(count) {
        Ok(0) => TimeDelta::zero(),
        Ok(count) => total / count,
        // Beyond i32 flights, fall back to whole-second division
        Err(_) => TimeDelta::seconds(total.num_seconds() / count as i64),
    }
}
