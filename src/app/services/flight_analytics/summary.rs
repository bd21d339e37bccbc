//! Results of the fixed report tasks, gathered in one serializable value

use crate::app::models::{FlightInfo, duration_seconds};
use crate::config::ReportConfig;
use chrono::{NaiveTime, TimeDelta};
use serde::Serialize;
use std::collections::BTreeMap;

use super::airline::{
    average_duration, average_duration_by_airline, total_duration, total_duration_by_airline,
};
use super::schedule::{flights_after_time, flights_between_airports, sort_by_arrival_descending};

/// Every report task's result for one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSummary {
    pub flight_count: usize,
    pub airline: String,
    #[serde(serialize_with = "duration_seconds::serialize")]
    pub total_duration: TimeDelta,
    #[serde(serialize_with = "duration_seconds::serialize")]
    pub average_duration: TimeDelta,
    pub airport_pair: (String, String),
    pub flights_between_airports: Vec<FlightInfo>,
    pub cutoff_time: NaiveTime,
    pub flights_after_time: Vec<FlightInfo>,
    #[serde(serialize_with = "duration_seconds::serialize_map")]
    pub average_duration_by_airline: BTreeMap<String, TimeDelta>,
    pub flights_by_arrival: Vec<FlightInfo>,
    #[serde(serialize_with = "duration_seconds::serialize_map")]
    pub total_duration_by_airline: BTreeMap<String, TimeDelta>,
}

/// Run every report task over `flights` with the arguments in `report`
pub fn summarize(flights: &[FlightInfo], report: &ReportConfig) -> FlightSummary {
    let (first, second) = &report.airport_pair;

    FlightSummary {
        flight_count: flights.len(),
        airline: report.airline.clone(),
        total_duration: total_duration(flights, &report.airline),
        average_duration: average_duration(flights, &report.airline),
        airport_pair: report.airport_pair.clone(),
        flights_between_airports: flights_between_airports(flights, first, second),
        cutoff_time: report.cutoff_time,
        flights_after_time: flights_after_time(flights, report.cutoff_time),
        average_duration_by_airline: average_duration_by_airline(flights),
        flights_by_arrival: sort_by_arrival_descending(flights),
        total_duration_by_airline: total_duration_by_airline(flights),
    }
}
