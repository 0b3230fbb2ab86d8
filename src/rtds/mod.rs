//! Client for TransLink's Regional Traffic Data System (RTDS) API.
//!
//! RTDS serves point-in-time road link speeds for the traffic map, plus the
//! rendered map tiles themselves. Note that a bad API key here comes back as
//! HTTP 400 with a JSON message and no error code, unlike RTTI.

mod types;

pub use types::{
    ColourLegendItem, LinkInfo, LiveDataAtPointResult, LiveDataResult, LiveDataTimestampResult,
};

use std::path::Path;

use crate::error::Error;
use crate::fetch::auth::{API_KEY_PARAM, UrlParam};
use crate::fetch::{self, BasicClient, HttpClient};

/// Production base URL for the RTDS API.
pub const RTDS_BASE: &str = "https://rtdsapi.translink.ca/rtdsapi/v1/";

/// Stateless façade over the RTDS endpoints.
pub struct Rtds<C = UrlParam<BasicClient>> {
    base: reqwest::Url,
    client: C,
}

impl Rtds {
    /// Client against the production API with the given key.
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(RTDS_BASE, api_key).expect("default RTDS base URL is valid")
    }

    /// Client with the given key against an alternate base URL.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Ok(Self {
            base: fetch::parse_base(base_url)?,
            client: UrlParam::new(BasicClient::new(), API_KEY_PARAM, api_key),
        })
    }
}

impl<C: HttpClient> Rtds<C> {
    /// Client with a caller-supplied transport. The transport is responsible
    /// for attaching credentials.
    pub fn with_client(base_url: &str, client: C) -> Result<Self, Error> {
        Ok(Self {
            base: fetch::parse_base(base_url)?,
            client,
        })
    }

    /// Gets the date and time at which the live data was last updated, in
    /// UTC.
    pub async fn live_data_timestamp(&self) -> Result<LiveDataTimestampResult, Error> {
        let url = fetch::endpoint(&self.base, "LiveDataTimestampUtc", &[])?;
        fetch::get_json(&self.client, url).await
    }

    /// Gets real-time data for all links.
    pub async fn all_live_data(&self) -> Result<LiveDataResult, Error> {
        let url = fetch::endpoint(&self.base, "AllLiveData", &[])?;
        fetch::get_json(&self.client, url).await
    }

    /// Gets real-time data for links near the specified point.
    ///
    /// `x` is longitude and `y` latitude. `z` is the zoom level of the map
    /// on which the click occurred; it affects the tolerance used when
    /// matching links, and defaults to a generous tolerance if not provided.
    /// `types` should match the displayed tile types; see [`Rtds::tile`].
    pub async fn live_data_at_point(
        &self,
        x: f64,
        y: f64,
        z: Option<u8>,
        types: Option<u32>,
    ) -> Result<LiveDataAtPointResult, Error> {
        let url = fetch::endpoint(
            &self.base,
            "LiveDataAtPoint",
            &[
                ("x", Some(x.to_string())),
                ("y", Some(y.to_string())),
                ("z", z.map(|z| z.to_string())),
                ("types", types.map(|t| t.to_string())),
            ],
        )?;
        fetch::get_json(&self.client, url).await
    }

    /// Gets the congestion colour legend for the traffic map.
    pub async fn colour_legend(&self) -> Result<Vec<ColourLegendItem>, Error> {
        let url = fetch::endpoint(&self.base, "ColourLegend", &[])?;
        fetch::get_json(&self.client, url).await
    }

    /// Downloads one rendered PNG traffic tile to a local file.
    ///
    /// `x`/`y`/`z` address the tile in the map grid. `types` selects the
    /// roadway types drawn on the tile, as a bitwise-OR of highway (4),
    /// major road network (2) and arterial (1); omitted means all types.
    /// Returns the number of bytes written.
    pub async fn tile(
        &self,
        destination: impl AsRef<Path>,
        x: u32,
        y: u32,
        z: u8,
        types: Option<u32>,
    ) -> Result<u64, Error> {
        let url = fetch::endpoint(
            &self.base,
            "Tile",
            &[
                ("x", Some(x.to_string())),
                ("y", Some(y.to_string())),
                ("z", Some(z.to_string())),
                ("types", types.map(|t| t.to_string())),
            ],
        )?;
        fetch::download(&self.client, url, destination.as_ref()).await
    }
}
