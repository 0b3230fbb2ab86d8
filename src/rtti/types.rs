//! Response records for the RTTI API.
//!
//! One record per upstream JSON object, decoded field-for-field. The API
//! names fields in PascalCase and sometimes delivers numbers and booleans as
//! strings; the tolerant adapters in [`crate::de`] absorb that.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Deserialize;

use super::time;
use crate::de;

/// A location where buses provide scheduled service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stop {
    /// The 5-digit stop number.
    #[serde(deserialize_with = "de::int_from_any")]
    pub stop_no: i64,
    /// The stop name.
    pub name: String,
    /// The bay number, if applicable ("N/A" otherwise).
    pub bay_no: String,
    /// The city in which the stop is located.
    pub city: String,
    /// The street the stop is located on.
    pub on_street: String,
    /// The intersecting street of the stop.
    pub at_street: String,
    #[serde(deserialize_with = "de::float_from_any")]
    pub latitude: f64,
    #[serde(deserialize_with = "de::float_from_any")]
    pub longitude: f64,
    /// Whether the stop is wheelchair accessible.
    #[serde(deserialize_with = "de::bool_from_any")]
    pub wheelchair_access: bool,
    /// Distance in metres from the search location, when searching.
    #[serde(deserialize_with = "de::int_from_any")]
    pub distance: i64,
    /// Comma-separated route numbers the stop services.
    pub routes: String,
}

/// Bus arrival estimates for one route at a stop.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopEstimate {
    pub route_no: String,
    pub route_name: String,
    /// Direction of the route at this stop.
    pub direction: String,
    pub route_map: RouteMap,
    pub schedules: Vec<Schedule>,
}

/// Link to a route map file in KMZ format.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteMap {
    pub href: String,
}

/// A single real-time or scheduled arrival for a bus at a stop.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Schedule {
    /// The pattern of the specific trip.
    pub pattern: String,
    /// The destination headsign of the trip.
    pub destination: String,
    /// Expected departure at this stop, resolved to an absolute local
    /// datetime. Upstream sends something like `"05:20pm 2018-02-18"`;
    /// seconds are always 0.
    #[serde(deserialize_with = "time::de_leave_time")]
    pub expected_leave_time: DateTime<Tz>,
    /// Expected departure in minutes from now.
    #[serde(deserialize_with = "de::int_from_any")]
    pub expected_countdown: i64,
    /// `*` scheduled time, `-` delayed, `+` running ahead.
    pub schedule_status: String,
    #[serde(deserialize_with = "de::bool_from_any")]
    pub cancelled_trip: bool,
    #[serde(deserialize_with = "de::bool_from_any")]
    pub cancelled_stop: bool,
    #[serde(deserialize_with = "de::bool_from_any")]
    pub added_trip: bool,
    #[serde(deserialize_with = "de::bool_from_any")]
    pub added_stop: bool,
    /// When the trip was last updated. Upstream sends a bare clock time like
    /// `"05:20:30 pm"`; resolved to an absolute local datetime.
    #[serde(deserialize_with = "time::de_last_update")]
    pub last_update: DateTime<Tz>,
}

/// Last reported state of a bus in service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bus {
    pub vehicle_no: String,
    /// Id of the trip the bus is currently running.
    #[serde(deserialize_with = "de::int_from_any")]
    pub trip_id: i64,
    pub route_no: String,
    pub direction: String,
    /// Destination headsign. Not in the upstream API documentation, but
    /// always present.
    pub destination: String,
    pub pattern: String,
    #[serde(deserialize_with = "de::float_from_any")]
    pub latitude: f64,
    #[serde(deserialize_with = "de::float_from_any")]
    pub longitude: f64,
    /// When the position was recorded; bare clock time upstream, resolved to
    /// an absolute local datetime.
    #[serde(deserialize_with = "time::de_last_update")]
    pub recorded_time: DateTime<Tz>,
    pub route_map: RouteMap,
}

/// A sequenced pattern of service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Route {
    pub route_no: String,
    pub name: String,
    pub operating_company: String,
    pub patterns: Vec<Pattern>,
}

/// One trip pattern of a route.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pattern {
    pub pattern_no: String,
    pub destination: String,
    pub route_map: RouteMap,
    pub direction: String,
}

/// Availability of one RTTI service ("Location" or "Schedule").
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Status {
    pub name: String,
    /// "Online" or "Offline".
    pub value: String,
}
