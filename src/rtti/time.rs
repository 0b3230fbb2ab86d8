//! Parsers for the RTTI API's locale-bound timestamp strings.
//!
//! The API reports times as bare clock strings in TransLink's local zone:
//! `ExpectedLeaveTime` looks like `"05:20pm 2018-02-18"` (or just `"05:20pm"`
//! near the end of the service day), and `LastUpdate`/`RecordedTime` look
//! like `"05:20:30 pm"` with no date at all. Both are resolved against a
//! reference instant into absolute, zone-aware datetimes.

use chrono::{DateTime, Days, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::de::{Deserialize, Deserializer};
use thiserror::Error;

/// TransLink's local time zone (Vancouver).
pub const TRANSLINK_TZ: Tz = chrono_tz::America::Vancouver;

#[derive(Debug, Error)]
#[error("invalid time value {value:?}")]
pub struct TimeParseError {
    value: String,
}

impl TimeParseError {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

fn localize(naive: NaiveDateTime, value: &str) -> Result<DateTime<Tz>, TimeParseError> {
    TRANSLINK_TZ
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| TimeParseError::new(value))
}

/// Parses an `ExpectedLeaveTime` value relative to `relative_to`.
///
/// A value with a date part (`"05:20pm 2018-02-18"`) is absolute. A bare
/// clock time has rolled past the date boundary upstream and is taken to be
/// for the day after `relative_to`. Seconds are always 0.
pub fn parse_leave_time(
    value: &str,
    relative_to: DateTime<Tz>,
) -> Result<DateTime<Tz>, TimeParseError> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%I:%M%p %Y-%m-%d") {
        return localize(naive, value);
    }

    let time =
        NaiveTime::parse_from_str(value, "%I:%M%p").map_err(|_| TimeParseError::new(value))?;
    let tomorrow = relative_to
        .date_naive()
        .checked_add_days(Days::new(1))
        .ok_or_else(|| TimeParseError::new(value))?;
    localize(tomorrow.and_time(time), value)
}

/// Parses a `LastUpdate`/`RecordedTime` value relative to `relative_to`.
///
/// The value carries no date. It is combined with the reference date; a
/// result in the future means the clock has wrapped, so it is moved one day
/// back.
pub fn parse_last_update(
    value: &str,
    relative_to: DateTime<Tz>,
) -> Result<DateTime<Tz>, TimeParseError> {
    let time =
        NaiveTime::parse_from_str(value, "%I:%M:%S %p").map_err(|_| TimeParseError::new(value))?;

    let today = relative_to.date_naive();
    let parsed = localize(today.and_time(time), value)?;
    if parsed > relative_to {
        let yesterday = today
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| TimeParseError::new(value))?;
        return localize(yesterday.and_time(time), value);
    }
    Ok(parsed)
}

fn now() -> DateTime<Tz> {
    Utc::now().with_timezone(&TRANSLINK_TZ)
}

pub(crate) fn de_leave_time<'de, D>(deserializer: D) -> Result<DateTime<Tz>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_leave_time(&value, now()).map_err(serde::de::Error::custom)
}

pub(crate) fn de_last_update<'de, D>(deserializer: D) -> Result<DateTime<Tz>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_last_update(&value, now()).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Tz> {
        let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
        TRANSLINK_TZ.from_local_datetime(&naive).single().unwrap()
    }

    #[test]
    fn leave_time_with_date_is_absolute() {
        let parsed = parse_leave_time("9:59pm 2018-02-13", at("2018-02-13 21:30:00")).unwrap();
        assert_eq!(parsed, at("2018-02-13 21:59:00"));
    }

    #[test]
    fn dateless_leave_time_is_for_tomorrow() {
        let parsed = parse_leave_time("12:09am", at("2018-02-13 23:00:00")).unwrap();
        assert_eq!(parsed, at("2018-02-14 00:09:00"));

        // Known wart carried over from upstream behaviour: even a time later
        // today rolls forward a full day.
        let parsed = parse_leave_time("10:00pm", at("2018-02-13 23:00:00")).unwrap();
        assert_eq!(parsed, at("2018-02-14 22:00:00"));
    }

    #[test]
    fn last_update_earlier_today_stays_today() {
        let parsed = parse_last_update("08:53:10 pm", at("2018-01-01 21:00:00")).unwrap();
        assert_eq!(parsed, at("2018-01-01 20:53:10"));
    }

    #[test]
    fn last_update_in_the_future_wraps_to_yesterday() {
        let parsed = parse_last_update("08:53:10 pm", at("2018-01-02 00:30:00")).unwrap();
        assert_eq!(parsed, at("2018-01-01 20:53:10"));

        let parsed = parse_last_update("01:00:00 am", at("2018-01-02 00:30:00")).unwrap();
        assert_eq!(parsed, at("2018-01-01 01:00:00"));
    }

    #[test]
    fn parsed_times_carry_the_pacific_offset() {
        let parsed = parse_last_update("08:53:10 pm", at("2018-01-01 21:00:00")).unwrap();
        let iso = parsed.to_rfc3339();
        assert!(iso.ends_with("-08:00") || iso.ends_with("-07:00"), "{iso}");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_leave_time("later", at("2018-01-01 12:00:00")).is_err());
        assert!(parse_last_update("08:53 pm", at("2018-01-01 12:00:00")).is_err());
    }
}
