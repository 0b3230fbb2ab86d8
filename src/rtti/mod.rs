//! Client for TransLink's Real-Time Transit Information (RTTI) API.
//!
//! Real-time data is limited to buses; vehicles that are not in service are
//! not exposed. Timestamps are resolved into the America/Vancouver zone, see
//! [`time`].

pub mod time;
mod types;

pub use types::{Bus, Pattern, Route, RouteMap, Schedule, Status, Stop, StopEstimate};

use crate::error::Error;
use crate::fetch::auth::{API_KEY_PARAM, UrlParam};
use crate::fetch::{self, BasicClient, HttpClient};

/// Production base URL for the RTTI API.
pub const RTTI_BASE: &str = "https://api.translink.ca/rttiapi/v1/";

/// Service selector for [`Rtti::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    All,
    /// Bus location information.
    Location,
    /// Real-time schedule information.
    Schedule,
}

impl Service {
    fn as_str(self) -> &'static str {
        match self {
            Service::All => "all",
            Service::Location => "location",
            Service::Schedule => "schedule",
        }
    }
}

/// Stateless façade over the RTTI endpoints.
///
/// Every call issues one GET with the API key attached as a query parameter
/// and decodes the JSON body into the matching record type.
pub struct Rtti<C = UrlParam<BasicClient>> {
    base: reqwest::Url,
    client: C,
}

impl Rtti {
    /// Client against the production API with the given key.
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(RTTI_BASE, api_key).expect("default RTTI base URL is valid")
    }

    /// Client with the given key against an alternate base URL.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Ok(Self {
            base: fetch::parse_base(base_url)?,
            client: UrlParam::new(BasicClient::new(), API_KEY_PARAM, api_key),
        })
    }
}

impl<C: HttpClient> Rtti<C> {
    /// Client with a caller-supplied transport. The transport is responsible
    /// for attaching credentials.
    pub fn with_client(base_url: &str, client: C) -> Result<Self, Error> {
        Ok(Self {
            base: fetch::parse_base(base_url)?,
            client,
        })
    }

    /// Gets a bus stop by its 5-digit stop number.
    pub async fn stop(&self, stop_number: &str) -> Result<Stop, Error> {
        let url = fetch::endpoint(&self.base, &format!("stops/{stop_number}"), &[])?;
        fetch::get_json(&self.client, url).await
    }

    /// Searches for stops around a point.
    ///
    /// `radius_m` defaults upstream to 500 and maxes out at 2000.
    /// `route_number` restricts the search to stops served by that route.
    pub async fn stops(
        &self,
        lat: f64,
        long: f64,
        radius_m: Option<u32>,
        route_number: Option<&str>,
    ) -> Result<Vec<Stop>, Error> {
        let url = fetch::endpoint(
            &self.base,
            "stops",
            &[
                ("lat", Some(format!("{lat:.6}"))),
                ("long", Some(format!("{long:.6}"))),
                ("radius", radius_m.map(|r| r.to_string())),
                ("routeno", route_number.map(str::to_string)),
            ],
        )?;
        fetch::get_json(&self.client, url).await
    }

    /// Gets the next bus estimates for a stop. Falls back to schedule data
    /// upstream when estimates are unavailable.
    ///
    /// `count` defaults upstream to 6, `timeframe` to 120 minutes. Results
    /// are grouped by route, destination, and direction.
    pub async fn stop_estimates(
        &self,
        stop_number: &str,
        count: Option<u32>,
        timeframe: Option<u32>,
        route_number: Option<&str>,
    ) -> Result<Vec<StopEstimate>, Error> {
        let url = fetch::endpoint(
            &self.base,
            &format!("stops/{stop_number}/estimates"),
            &[
                ("count", count.map(|c| c.to_string())),
                ("timeframe", timeframe.map(|t| t.to_string())),
                ("routeNo", route_number.map(str::to_string)),
            ],
        )?;
        fetch::get_json(&self.client, url).await
    }

    /// Gets a bus by its vehicle number.
    ///
    /// Only buses currently in service can be fetched. The upstream endpoint
    /// erroneously rejects 5-digit vehicle numbers.
    pub async fn bus(&self, vehicle_number: &str) -> Result<Bus, Error> {
        let url = fetch::endpoint(&self.base, &format!("buses/{vehicle_number}"), &[])?;
        fetch::get_json(&self.client, url).await
    }

    /// Retrieves all buses, or those filtered by stop and/or route.
    pub async fn buses(
        &self,
        stop_number: Option<&str>,
        route_number: Option<&str>,
    ) -> Result<Vec<Bus>, Error> {
        let url = fetch::endpoint(
            &self.base,
            "buses",
            &[
                ("stopNo", stop_number.map(str::to_string)),
                ("routeNo", route_number.map(str::to_string)),
            ],
        )?;
        fetch::get_json(&self.client, url).await
    }

    /// Gets a route by its route number.
    pub async fn route(&self, route_number: &str) -> Result<Route, Error> {
        let url = fetch::endpoint(&self.base, &format!("routes/{route_number}"), &[])?;
        fetch::get_json(&self.client, url).await
    }

    /// Gets routes passing through a stop.
    ///
    /// Though the upstream docs imply `stop_number` is optional, in practice
    /// omitting it always fails. This endpoint may also intermittently and
    /// incorrectly report error code 4014 (no routes for the stop).
    pub async fn routes(&self, stop_number: Option<&str>) -> Result<Vec<Route>, Error> {
        let url = fetch::endpoint(
            &self.base,
            "routes",
            &[("stopNo", stop_number.map(str::to_string))],
        )?;
        fetch::get_json(&self.client, url).await
    }

    /// Gets the update status of the location and schedule services.
    pub async fn status(&self, service: Service) -> Result<Vec<Status>, Error> {
        let url = fetch::endpoint(&self.base, &format!("status/{}", service.as_str()), &[])?;
        fetch::get_json(&self.client, url).await
    }
}
