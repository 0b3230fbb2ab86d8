//! Typed client for TransLink's Open API.
//!
//! Three façades wrap the three upstream surfaces: [`rtti::Rtti`] for
//! real-time bus/stop/route data, [`rtds::Rtds`] for regional traffic link
//! data, and [`gtfsrt::GtfsRt`] for the binary GTFS-realtime feeds. All of
//! them authenticate with the same API key, passed as a query parameter on
//! every request, and all of them fail with the one [`Error`] type.
//!
//! ```no_run
//! use translink::rtti::Rtti;
//!
//! # async fn demo() -> Result<(), translink::Error> {
//! let api = Rtti::new("my key");
//! let stop = api.stop("53095").await?;
//! assert_eq!(stop.name, "WB DOVER ST FS ROYAL OAK AVE");
//! assert!(!stop.wheelchair_access);
//! # Ok(())
//! # }
//! ```

mod codes;
mod de;
pub mod error;
pub mod fetch;
pub mod gtfsrt;
pub mod rtds;
pub mod rtti;

/// Generated GTFS-realtime message types.
pub mod transit_realtime {
    include!(concat!(env!("OUT_DIR"), "/transit_realtime.rs"));
}

pub use error::{ApiError, Error};
