//! Tolerant deserializers for upstream quirks.
//!
//! The JSON APIs intermittently deliver numbers and booleans as strings
//! (`"StopNo": "53095"`, `"WheelchairAccess": "true"`). These adapters accept
//! either representation; anything else is a schema-validation failure.

use serde::Deserialize;
use serde::de::{Deserializer, Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

pub(crate) fn int_from_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawScalar::deserialize(deserializer)? {
        RawScalar::Int(v) => Ok(v),
        RawScalar::Float(v) if v.fract() == 0.0 => Ok(v as i64),
        RawScalar::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| Error::custom(format!("invalid integer: {s:?}"))),
        _ => Err(Error::custom("expected an integer")),
    }
}

pub(crate) fn float_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawScalar::deserialize(deserializer)? {
        RawScalar::Int(v) => Ok(v as f64),
        RawScalar::Float(v) => Ok(v),
        RawScalar::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| Error::custom(format!("invalid number: {s:?}"))),
        _ => Err(Error::custom("expected a number")),
    }
}

pub(crate) fn bool_from_any<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match RawScalar::deserialize(deserializer)? {
        RawScalar::Bool(v) => Ok(v),
        RawScalar::Int(0) => Ok(false),
        RawScalar::Int(1) => Ok(true),
        RawScalar::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(Error::custom(format!("invalid boolean: {s:?}"))),
        },
        _ => Err(Error::custom("expected a boolean")),
    }
}

pub(crate) fn opt_int_from_any<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawScalar> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(RawScalar::Int(v)) => Ok(Some(v)),
        Some(RawScalar::Float(v)) if v.fract() == 0.0 => Ok(Some(v as i64)),
        Some(RawScalar::Str(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::custom(format!("invalid integer: {s:?}"))),
        Some(_) => Err(Error::custom("expected an integer")),
    }
}

pub(crate) fn opt_float_from_any<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawScalar> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(RawScalar::Int(v)) => Ok(Some(v as f64)),
        Some(RawScalar::Float(v)) => Ok(Some(v)),
        Some(RawScalar::Str(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::custom(format!("invalid number: {s:?}"))),
        Some(_) => Err(Error::custom("expected a number")),
    }
}
