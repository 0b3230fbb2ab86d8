//! Response records for the RTDS API.
//!
//! RTDS names its fields in camelCase, unlike RTTI. Link-level numeric
//! fields occasionally arrive as strings and are coerced. Snapshot
//! timestamps are nullable upstream: when no current data exists, the API
//! sends `"timestampUtc": null` rather than omitting the field.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::de;

/// Timestamp of the most recent live traffic snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveDataTimestampResult {
    /// When the live data was last updated, in UTC. `None` if there is no
    /// current data.
    pub timestamp_utc: Option<DateTime<Utc>>,
}

/// Current information about one direction of travel along a link.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkInfo {
    /// The link this information applies to.
    #[serde(deserialize_with = "de::int_from_any")]
    pub link_id: i64,
    /// Whether this applies to the forward (as opposed to reverse)
    /// direction of the link.
    #[serde(deserialize_with = "de::bool_from_any")]
    pub is_fwd: bool,
    /// Angle of travel over the link, in degrees clockwise from North
    /// (0.0 to 360.0).
    #[serde(deserialize_with = "de::float_from_any")]
    pub angle: f64,
    /// Length of the link, in metres.
    #[serde(deserialize_with = "de::float_from_any")]
    pub length_metres: f64,
    /// Current speed over the link, km/h. `None` if the link has no current
    /// data.
    #[serde(default, deserialize_with = "de::opt_float_from_any")]
    pub speed_kmph: Option<f64>,
    /// Time to travel the length of the link at current speed, in minutes.
    /// `None` if the link has no current data.
    #[serde(default, deserialize_with = "de::opt_float_from_any")]
    pub travel_time_minutes: Option<f64>,
    /// Quality of this information, 0 to 100. `None` if the link has no
    /// current data.
    #[serde(default, deserialize_with = "de::opt_int_from_any")]
    pub quality: Option<i64>,
}

/// Full live snapshot: all drivable directions on all links.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveDataResult {
    /// Snapshot timestamp in UTC. `None` if there is no current data.
    pub timestamp_utc: Option<DateTime<Utc>>,
    pub data: Vec<LinkInfo>,
}

/// Live snapshot restricted to the link directions that apply at a point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveDataAtPointResult {
    /// The x-coordinate (longitude) the lookup was evaluated at.
    #[serde(deserialize_with = "de::float_from_any")]
    pub x: f64,
    /// The y-coordinate (latitude) the lookup was evaluated at.
    #[serde(deserialize_with = "de::float_from_any")]
    pub y: f64,
    /// Snapshot timestamp in UTC. `None` if there is no current data.
    pub timestamp_utc: Option<DateTime<Utc>>,
    pub data: Vec<LinkInfo>,
}

/// Entry in the legend describing the colours used by the map tiles.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColourLegendItem {
    /// Speed category: one of "Fast", "Medium", "Slow", or "Unknown".
    pub name: String,
    /// Web-friendly colour string for the category, e.g. `#FF0000`.
    pub colour: String,
}
