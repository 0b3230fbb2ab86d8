//! Documented error codes for the RTTI API.
//!
//! The RTTI API reports failures through a `Code` field in the error body
//! rather than through the HTTP status. These are the documented codes and
//! their descriptions; the RTDS and GTFS-realtime surfaces do not use codes.

/// Returns the documented description for an RTTI error code.
pub fn describe(code: &str) -> Option<&'static str> {
    let desc = match code {
        // 1000x: general
        "10001" => "Invalid API key",
        "10002" => "Database connection error",

        // 10xx: stops
        "1001" => "Invalid stop number",
        "1002" => "Stop number not found",
        "1003" => "Unknown stop check error",
        "1004" => "Unknown get stop error",
        "1011" => "Invalid latitude/longitude",
        "1012" => "No stops found",
        "1013" => "Unknown get stops error",
        "1014" => "Radius too large",
        "1015" => "Invalid route number",

        // 20xx: buses
        "2001" => "Invalid bus number",
        "2002" => "Bus number not found",
        "2003" => "Unknown get bus error",
        "2011" => "No buses found",
        "2012" => "Unknown get buses by stop error",
        "2013" => "Unknown get buses by route error",
        "2014" => "Invalid stop number",
        "2015" => "Invalid route number",
        "2016" => "Stop number not found",
        "2017" => "Route number not found",
        "2018" => "Unknown get buses by stop and route error",

        // 30xx: stop estimates
        "3001" => "Invalid stop number",
        "3002" => "Stop number not found",
        "3003" => "Unknown get estimates error",
        "3004" => "Invalid route",
        "3005" => "No stop estimates found",
        "3006" => "Invalid time frame",
        "3007" => "Invalid count",

        // 40xx: routes
        "4002" => "Route number not found",
        "4003" => "Unknown get route error",
        "4004" => "Invalid route number",
        "4011" => "Invalid stop number",
        "4012" => "Stop number not found",
        "4013" => "Unknown error",
        "4014" => "No routes found",

        // 500x: status
        "5001" => "Invalid service name",

        _ => return None,
    };
    Some(desc)
}
