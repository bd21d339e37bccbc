//! Core data structures for flight analytics.
//!
//! [`RawFlight`] mirrors the nested JSON document a flight data feed delivers;
//! [`FlightInfo`] is the flattened, duration-annotated record every analytics
//! query operates on.

use chrono::{DateTime, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// Flight identity block of a raw record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightIdentity {
    pub number: Option<String>,
    pub iata: Option<String>,
}

/// Operating airline block of a raw record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineRef {
    pub name: Option<String>,
}

/// Departure or arrival block of a raw record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub airport: String,
    #[serde(with = "scheduled_format")]
    pub scheduled: NaiveDateTime,
}

/// One flight exactly as ingested from the data file.
///
/// Fields the feed carries beyond these (status, terminals, delays, ...) are
/// ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFlight {
    pub flight: FlightIdentity,
    pub airline: AirlineRef,
    pub departure: Endpoint,
    pub arrival: Endpoint,
}

impl RawFlight {
    /// Flatten this record, computing its scheduled duration
    pub fn to_flight_info(&self) -> FlightInfo {
        FlightInfo::new(
            self.flight.number.clone(),
            self.flight.iata.clone(),
            self.airline.name.clone(),
            self.departure.scheduled,
            self.arrival.scheduled,
            self.departure.airport.clone(),
            self.arrival.airport.clone(),
        )
    }
}

impl From<&RawFlight> for FlightInfo {
    fn from(raw: &RawFlight) -> Self {
        raw.to_flight_info()
    }
}

/// Flattened flight record with its duration pre-computed.
///
/// `duration` always equals `arrival - departure`: the constructor is the only
/// way to build a value and the fields are read-only from outside. Inconsistent
/// source data can make the duration zero or negative; nothing here rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightInfo {
    name: Option<String>,
    iata: Option<String>,
    airline: Option<String>,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    #[serde(serialize_with = "duration_seconds::serialize")]
    duration: TimeDelta,
    origin: String,
    destination: String,
}

impl FlightInfo {
    pub fn new(
        name: Option<String>,
        iata: Option<String>,
        airline: Option<String>,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        origin: String,
        destination: String,
    ) -> Self {
        Self {
            name,
            iata,
            airline,
            departure,
            arrival,
            duration: arrival - departure,
            origin,
            destination,
        }
    }

    /// Flight number
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn iata(&self) -> Option<&str> {
        self.iata.as_deref()
    }

    pub fn airline(&self) -> Option<&str> {
        self.airline.as_deref()
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    /// Scheduled time in the air, `arrival - departure`
    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    /// Departure airport name
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Arrival airport name
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

/// Parse a scheduled timestamp as written in a flight feed.
///
/// Accepts naive ISO-8601 date-times (`T` or space separated, optional
/// fractional seconds) and RFC 3339 values carrying an offset. An offset is
/// dropped and the wall-clock time kept as written.
pub fn parse_scheduled(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.naive_local());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Serde adapter for `scheduled` fields
pub(crate) mod scheduled_format {
    use super::parse_scheduled;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format("%Y-%m-%dT%H:%M:%S"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_scheduled(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid scheduled timestamp '{}'", raw)))
    }
}

/// Durations leave the crate as whole seconds
pub(crate) mod duration_seconds {
    use chrono::TimeDelta;
    use serde::Serializer;
    use serde::ser::SerializeMap;
    use std::collections::BTreeMap;

    pub fn serialize<S: Serializer>(value: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.num_seconds())
    }

    pub fn serialize_map<S: Serializer>(
        value: &BTreeMap<String, TimeDelta>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(value.len()))?;
        for (airline, duration) in value {
            map.serialize_entry(airline, &duration.num_seconds())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 8, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_flight_info_duration_spans_midnight() {
        let info = FlightInfo::new(
            Some("1234".to_string()),
            Some("6E1234".to_string()),
            Some("IndiGo".to_string()),
            at(15, 22, 30),
            at(16, 1, 15),
            "Indira Gandhi International".to_string(),
            "Chhatrapati Shivaji International".to_string(),
        );

        assert_eq!(info.duration(), TimeDelta::minutes(165));
        assert_eq!(info.duration(), info.arrival() - info.departure());
        assert_eq!(info.name(), Some("1234"));
        assert_eq!(info.airline(), Some("IndiGo"));
    }

    #[test]
    fn test_flight_info_keeps_negative_duration() {
        let info = FlightInfo::new(
            None,
            None,
            None,
            at(15, 10, 0),
            at(15, 9, 0),
            "A".into(),
            "B".into(),
        );
        assert_eq!(info.duration(), TimeDelta::hours(-1));
    }

    #[test]
    fn test_parse_scheduled_formats() {
        let expected = at(15, 23, 20);

        assert_eq!(parse_scheduled("2024-08-15T23:20:00"), Some(expected));
        assert_eq!(parse_scheduled("2024-08-15T23:20:00+00:00"), Some(expected));
        assert_eq!(parse_scheduled("2024-08-15T23:20:00+05:30"), Some(expected));
        assert_eq!(parse_scheduled("2024-08-15 23:20:00"), Some(expected));
        assert_eq!(parse_scheduled("2024-08-15T23:20"), Some(expected));
        assert_eq!(parse_scheduled("2024-08-15T23:20:00.000"), Some(expected));
        assert_eq!(parse_scheduled("not a timestamp"), None);
    }

    #[test]
    fn test_raw_flight_ignores_unknown_fields() {
        let json = r#"{
            "flight_date": "2024-08-15",
            "flight_status": "scheduled",
            "departure": {"airport": "Fukuoka", "iata": "FUK", "scheduled": "2024-08-15T07:00:00+00:00"},
            "arrival": {"airport": "Haneda Airport", "iata": "HND", "scheduled": "2024-08-15T08:35:00+00:00"},
            "airline": {"name": "Japan Airlines", "iata": "JL"},
            "flight": {"number": "306", "iata": "JL306", "codeshared": null}
        }"#;

        let raw: RawFlight = serde_json::from_str(json).unwrap();
        assert_eq!(raw.flight.iata.as_deref(), Some("JL306"));
        assert_eq!(raw.departure.scheduled, at(15, 7, 0));
        assert_eq!(raw.to_flight_info().duration(), TimeDelta::minutes(95));
    }

    #[test]
    fn test_raw_flight_null_airline_name() {
        let json = r#"{
            "departure": {"airport": "A", "scheduled": "2024-08-15T07:00:00"},
            "arrival": {"airport": "B", "scheduled": "2024-08-15T08:00:00"},
            "airline": {"name": null},
            "flight": {}
        }"#;

        let raw: RawFlight = serde_json::from_str(json).unwrap();
        let info = FlightInfo::from(&raw);
        assert_eq!(info.airline(), None);
        assert_eq!(info.name(), None);
    }

    #[test]
    fn test_raw_flight_missing_arrival_is_an_error() {
        let json = r#"{
            "departure": {"airport": "A", "scheduled": "2024-08-15T07:00:00"},
            "airline": {"name": "X"},
            "flight": {"number": "1"}
        }"#;

        let result: std::result::Result<RawFlight, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_flight_info_serializes_duration_as_seconds() {
        let info = FlightInfo::new(
            None,
            None,
            Some("X".into()),
            at(15, 7, 0),
            at(15, 8, 30),
            "A".into(),
            "B".into(),
        );
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["duration"], 5400);
        assert_eq!(value["departure"], "2024-08-15T07:00:00");
    }
}
