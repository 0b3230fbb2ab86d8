//! The single error surface shared by all three API façades.

use std::fmt;

use reqwest::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::codes;

/// Any failure from a TransLink API call.
///
/// Upstream-reported failures always arrive as [`Error::Api`], regardless of
/// which façade was called. The decode variants indicate that a 2xx response
/// did not conform to the documented shape; those are contract violations and
/// are never recovered from.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("response did not match the expected shape: {0}")]
    Json(#[from] serde_json::Error),

    #[error("feed could not be decoded: {0}")]
    Protobuf(#[from] prost::DecodeError),

    #[error("download failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid URL: {0}")]
    Url(String),
}

/// An error response from the TransLink API.
///
/// Upstream status codes are not semantically reliable (a bad RTTI key is a
/// 500, a bad RTDS key a 400), so the body is inspected for the real error
/// code and message. `code` is only ever populated by the RTTI API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status of the failed response.
    pub status: StatusCode,
    /// API error code, if the body carried one.
    pub code: Option<String>,
    /// Message from the error response, if the body carried one.
    pub message: Option<String>,
    /// Any additional fields the upstream included in the error body.
    pub extra: Map<String, Value>,
}

impl ApiError {
    /// Builds an error from a failed exchange.
    ///
    /// If the body parses as a JSON object, `Code` and `Message` are pulled
    /// out case-insensitively and the remaining fields are kept in `extra`.
    /// Anything else (HTML, empty bodies, as with a bad GTFS-realtime key)
    /// leaves only the status populated.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let mut err = ApiError {
            status,
            code: None,
            message: None,
            extra: Map::new(),
        };

        if let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(body) {
            for (key, value) in fields {
                match key.to_ascii_lowercase().as_str() {
                    "code" => err.code = scalar_to_string(&value),
                    "message" => err.message = scalar_to_string(&value),
                    _ => {
                        err.extra.insert(key, value);
                    }
                }
            }
        }

        err
    }

    /// The documented description of the error code, if any.
    pub fn description(&self) -> Option<&'static str> {
        self.code.as_deref().and_then(codes::describe)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} error", self.status.as_u16())?;
        if self.code.is_none() && self.message.is_none() {
            return Ok(());
        }
        write!(f, ":")?;
        if let Some(code) = &self.code {
            write!(f, " code {code}")?;
        }
        if let Some(message) = &self.message {
            write!(f, " '{message}'")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
