//! Client for TransLink's GTFS-realtime feed endpoints.
//!
//! Two binary protobuf feeds are served: trip updates (`gtfsrealtime`) and
//! vehicle positions (`gtfsposition`). Feeds decode into the prost-generated
//! [`FeedMessage`]. A bad API key here is a plain 403 with no JSON body.

use std::path::Path;

use chrono::{DateTime, FixedOffset};
use prost::Message;
use reqwest::header::HeaderMap;

use crate::error::Error;
use crate::fetch::auth::{API_KEY_PARAM, UrlParam};
use crate::fetch::{self, BasicClient, HttpClient};
use crate::transit_realtime::FeedMessage;

/// Production base URL for the GTFS-realtime endpoints.
pub const GTFSRT_BASE: &str = "https://gtfs.translink.ca/";

const TRIP_UPDATES_ENDPOINT: &str = "gtfsrealtime";
const POSITIONS_ENDPOINT: &str = "gtfsposition";

/// Decodes a protobuf-encoded GTFS-realtime [`FeedMessage`] from raw bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid protobuf for a `FeedMessage`.
pub fn decode_feed(bytes: &[u8]) -> Result<FeedMessage, Error> {
    Ok(FeedMessage::decode(bytes)?)
}

/// HTTP headers describing a feed file, without its body.
///
/// The upstream server disallows HEAD, so these are taken from a GET.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedHeaders {
    pub content_disposition: Option<String>,
    pub content_length: Option<u64>,
    pub content_type: Option<String>,
    /// Parsed RFC 2822 `Date` header.
    pub date: Option<DateTime<FixedOffset>>,
    pub server: Option<String>,
}

impl FeedHeaders {
    fn from_header_map(headers: &HeaderMap) -> Self {
        let text = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
        };
        Self {
            content_disposition: text("content-disposition"),
            content_length: text("content-length").and_then(|v| v.parse().ok()),
            content_type: text("content-type"),
            date: text("date").and_then(|v| DateTime::parse_from_rfc2822(&v).ok()),
            server: text("server"),
        }
    }
}

/// Stateless façade over the GTFS-realtime feed endpoints.
pub struct GtfsRt<C = UrlParam<BasicClient>> {
    base: reqwest::Url,
    client: C,
}

impl GtfsRt {
    /// Client against the production endpoints with the given key.
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(GTFSRT_BASE, api_key).expect("default GTFS-realtime base URL is valid")
    }

    /// Client with the given key against an alternate base URL.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Ok(Self {
            base: fetch::parse_base(base_url)?,
            client: UrlParam::new(BasicClient::new(), API_KEY_PARAM, api_key),
        })
    }
}

impl<C: HttpClient> GtfsRt<C> {
    /// Client with a caller-supplied transport. The transport is responsible
    /// for attaching credentials.
    pub fn with_client(base_url: &str, client: C) -> Result<Self, Error> {
        Ok(Self {
            base: fetch::parse_base(base_url)?,
            client,
        })
    }

    async fn feed(&self, path: &str) -> Result<FeedMessage, Error> {
        let url = fetch::endpoint(&self.base, path, &[])?;
        let bytes = fetch::get_bytes(&self.client, url).await?;
        decode_feed(&bytes)
    }

    async fn headers(&self, path: &str) -> Result<FeedHeaders, Error> {
        let url = fetch::endpoint(&self.base, path, &[])?;
        let (_, headers) = fetch::get_headers(&self.client, url).await?;
        Ok(FeedHeaders::from_header_map(&headers))
    }

    async fn download(&self, path: &str, destination: &Path) -> Result<u64, Error> {
        let url = fetch::endpoint(&self.base, path, &[])?;
        fetch::download(&self.client, url, destination).await
    }

    /// Fetches and decodes the trip updates feed.
    pub async fn trip_updates(&self) -> Result<FeedMessage, Error> {
        self.feed(TRIP_UPDATES_ENDPOINT).await
    }

    /// Fetches and decodes the vehicle positions feed.
    pub async fn positions(&self) -> Result<FeedMessage, Error> {
        self.feed(POSITIONS_ENDPOINT).await
    }

    /// Gets the headers for the trip updates feed.
    pub async fn headers_trip_updates(&self) -> Result<FeedHeaders, Error> {
        self.headers(TRIP_UPDATES_ENDPOINT).await
    }

    /// Gets the headers for the vehicle positions feed.
    pub async fn headers_positions(&self) -> Result<FeedHeaders, Error> {
        self.headers(POSITIONS_ENDPOINT).await
    }

    /// Downloads the trip updates feed to a local file, returning the number
    /// of bytes written.
    pub async fn download_trip_updates(&self, destination: impl AsRef<Path>) -> Result<u64, Error> {
        self.download(TRIP_UPDATES_ENDPOINT, destination.as_ref())
            .await
    }

    /// Downloads the vehicle positions feed to a local file, returning the
    /// number of bytes written.
    pub async fn download_positions(&self, destination: impl AsRef<Path>) -> Result<u64, Error> {
        self.download(POSITIONS_ENDPOINT, destination.as_ref())
            .await
    }
}
