//! RTTI façade tests against a mocked upstream.

use mockito::Matcher;
use translink::Error;
use translink::rtti::{Rtti, Service};

const STOP_53095: &str = r#"{
    "StopNo": 53095,
    "Name": "WB DOVER ST FS ROYAL OAK AVE",
    "BayNo": "N/A",
    "City": "BURNABY",
    "OnStreet": "DOVER ST",
    "AtStreet": "ROYAL OAK AVE",
    "Latitude": 49.226745,
    "Longitude": -122.996609,
    "WheelchairAccess": false,
    "Distance": -1,
    "Routes": "129"
}"#;

#[tokio::test]
async fn stop_decodes_the_documented_sample() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/stops/53095")
        .match_query(Matcher::UrlEncoded("apikey".into(), "key".into()))
        .with_header("content-type", "application/json")
        .with_body(STOP_53095)
        .create_async()
        .await;

    let api = Rtti::with_base_url(&server.url(), "key").unwrap();
    let stop = api.stop("53095").await.unwrap();

    assert_eq!(stop.stop_no, 53095);
    assert_eq!(stop.name, "WB DOVER ST FS ROYAL OAK AVE");
    assert!(!stop.wheelchair_access);
    mock.assert_async().await;
}

#[tokio::test]
async fn requests_identify_the_library() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/stops/53095")
        .match_header(
            "user-agent",
            Matcher::Regex(format!(
                "^{}/{}$",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            )),
        )
        .match_query(Matcher::Regex(".*".into()))
        .with_header("content-type", "application/json")
        .with_body(STOP_53095)
        .create_async()
        .await;

    let api = Rtti::with_base_url(&server.url(), "key").unwrap();
    api.stop("53095").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn stop_search_sends_formatted_coordinates_and_filters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/stops")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("lat".into(), "49.248524".into()),
            Matcher::UrlEncoded("long".into(), "-123.108800".into()),
            Matcher::UrlEncoded("radius".into(), "500".into()),
            Matcher::UrlEncoded("routeno".into(), "N15".into()),
            Matcher::UrlEncoded("apikey".into(), "key".into()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(format!("[{STOP_53095}]"))
        .create_async()
        .await;

    let api = Rtti::with_base_url(&server.url(), "key").unwrap();
    let stops = api
        .stops(49.248523999, -123.1088, Some(500), Some("N15"))
        .await
        .unwrap();

    assert_eq!(stops.len(), 1);
    assert_eq!(stops[0].city, "BURNABY");
    mock.assert_async().await;
}

#[tokio::test]
async fn stop_estimates_decode_schedules_with_absolute_times() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/stops/55070/estimates")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("count".into(), "2".into()),
            Matcher::UrlEncoded("routeNo".into(), "502".into()),
            Matcher::UrlEncoded("apikey".into(), "key".into()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "RouteNo": "502",
                "RouteName": "LANGLEY CTR/SURREY CTRL STN",
                "Direction": "EAST",
                "RouteMap": {"Href": "http://nb.translink.ca/geodata/502.kmz"},
                "Schedules": [{
                    "Pattern": "EB1",
                    "Destination": "LANGLEY CTR",
                    "ExpectedLeaveTime": "10:30pm 2018-02-19",
                    "ExpectedCountdown": 22,
                    "ScheduleStatus": "*",
                    "CancelledTrip": false,
                    "CancelledStop": false,
                    "AddedTrip": false,
                    "AddedStop": false,
                    "LastUpdate": "10:07:57 pm"
                }]
            }]"#,
        )
        .create_async()
        .await;

    let api = Rtti::with_base_url(&server.url(), "key").unwrap();
    let estimates = api
        .stop_estimates("55070", Some(2), None, Some("502"))
        .await
        .unwrap();

    assert_eq!(estimates.len(), 1);
    let est = &estimates[0];
    assert_eq!(est.route_no, "502");
    assert_eq!(est.schedules.len(), 1);
    assert_eq!(
        est.schedules[0].expected_leave_time.to_rfc3339(),
        "2018-02-19T22:30:00-08:00"
    );
}

#[tokio::test]
async fn buses_filter_by_stop_and_route() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/buses")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("stopNo".into(), "53987".into()),
            Matcher::UrlEncoded("routeNo".into(), "228".into()),
            Matcher::UrlEncoded("apikey".into(), "key".into()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "VehicleNo": "2543",
                "TripId": 9171052,
                "RouteNo": "228",
                "Direction": "NORTH",
                "Destination": "LYNN VALLEY",
                "Pattern": "NB1",
                "Latitude": 49.2805,
                "Longitude": -123.11725,
                "RecordedTime": "10:07:57 pm",
                "RouteMap": {"Href": "http://nb.translink.ca/geodata/228.kmz"}
            }]"#,
        )
        .create_async()
        .await;

    let api = Rtti::with_base_url(&server.url(), "key").unwrap();
    let buses = api.buses(Some("53987"), Some("228")).await.unwrap();

    assert_eq!(buses.len(), 1);
    assert_eq!(buses[0].vehicle_no, "2543");
    assert_eq!(buses[0].trip_id, 9171052);
    assert_eq!((buses[0].latitude, buses[0].longitude), (49.2805, -123.11725));
}

#[tokio::test]
async fn status_hits_the_service_specific_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/status/all")
        .match_query(Matcher::UrlEncoded("apikey".into(), "key".into()))
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"Name": "Location", "Value": "Online"},
                {"Name": "Schedule", "Value": "Online"}
            ]"#,
        )
        .create_async()
        .await;

    let api = Rtti::with_base_url(&server.url(), "key").unwrap();
    let statuses = api.status(Service::All).await.unwrap();

    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].name, "Location");
    assert_eq!(statuses[0].value, "Online");
    mock.assert_async().await;
}

#[tokio::test]
async fn upstream_error_codes_map_to_the_uniform_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/stops/00000")
        .match_query(Matcher::Regex(".*".into()))
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"Code": "1002", "Message": "Stop number not found"}"#)
        .create_async()
        .await;

    let api = Rtti::with_base_url(&server.url(), "key").unwrap();
    let err = api.stop("00000").await.unwrap_err();

    match err {
        Error::Api(e) => {
            assert_eq!(e.status.as_u16(), 404);
            assert_eq!(e.code.as_deref(), Some("1002"));
            assert_eq!(e.message.as_deref(), Some("Stop number not found"));
            assert_eq!(e.description(), Some("Stop number not found"));
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn bad_api_key_is_a_500_with_a_code() {
    // RTTI reports a bad key as a server error, never a 403.
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/routes/144")
        .match_query(Matcher::Regex(".*".into()))
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"Code": "10001", "Message": "Invalid API Key"}"#)
        .create_async()
        .await;

    let api = Rtti::with_base_url(&server.url(), "foobar").unwrap();
    let err = api.route("144").await.unwrap_err();

    match err {
        Error::Api(e) => {
            assert_eq!(e.status.as_u16(), 500);
            assert_eq!(e.code.as_deref(), Some("10001"));
            assert!(e.message.is_some());
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn nonconforming_success_body_is_a_schema_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/stops/53095")
        .match_query(Matcher::Regex(".*".into()))
        .with_header("content-type", "application/json")
        .with_body(r#"{"StopNo": 53095}"#)
        .create_async()
        .await;

    let api = Rtti::with_base_url(&server.url(), "key").unwrap();
    let err = api.stop("53095").await.unwrap_err();

    assert!(matches!(err, Error::Json(_)), "got {err:?}");
}
