//! Gateway client tests against a local fake of the stations API.

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::domain::{LatLng, StationId};

use super::*;

/// Serve `router` on an ephemeral port and return the API base URL.
async fn spawn_api(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api/v1")
}

fn client(base_url: &str) -> GatewayClient {
    GatewayClient::new(GatewayConfig::new(base_url).with_timeout(5)).unwrap()
}

fn fake_api() -> Router {
    Router::new()
        .route(
            "/api/v1/stations",
            get(|| async {
                Json(json!({
                    "success": true,
                    "data": [
                        {"id": 1, "name": "Lac 2", "latitude": 36.84, "longitude": 10.27,
                         "max_power_kw": "150.00", "has_available_connectors": true},
                        {"id": 2, "name": "Marsa", "max_power_kw": 22}
                    ]
                }))
            }),
        )
        .route(
            "/api/v1/stations/nearby",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let name = format!(
                    "{}|{}|{}|{}",
                    params["lat"], params["lng"], params["radius"], params["limit"]
                );
                Json(json!({
                    "success": true,
                    "data": [{"id": 9, "name": name, "distance_meters": 2500.0,
                              "has_available_connectors": null}]
                }))
            }),
        )
        .route(
            "/api/v1/stations/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({
                    "success": true,
                    "data": [{"id": 3, "name": params["query"]}]
                }))
            }),
        )
        .route(
            "/api/v1/stations/:id",
            get(|Path(id): Path<i64>| async move {
                if id == 404 {
                    return Json(json!({"success": false, "message": "Station not found"}));
                }
                Json(json!({
                    "success": true,
                    "data": {
                        "station": {"id": id, "name": "Ariana", "operator": "STEG"},
                        "connectors": [
                            {"connector_type": "CCS", "current_type": "DC", "power_kw": 50,
                             "status": "operational", "count_available": 0, "count_total": 2}
                        ]
                    }
                }))
            }),
        )
        .route(
            "/api/v1/statistics",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database down") }),
        )
        .route(
            "/api/v1/connectors/types",
            get(|| async { "<html>not json</html>" }),
        )
        .route(
            "/api/v1/export/geojson",
            get(|| async {
                (
                    [("content-type", "application/json")],
                    r#"{"type":"FeatureCollection","features":[],"metadata":{"z":1,"a":2}}"#,
                )
            }),
        )
}

#[tokio::test]
async fn fetch_all_stations_unwraps_envelope() {
    let base = spawn_api(fake_api()).await;
    let stations = client(&base).fetch_all_stations().await.unwrap().unwrap();

    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0].max_power_kw, Some(150.0));
    assert!(stations[0].has_available_connectors);
    assert_eq!(stations[1].position(), None);
}

#[tokio::test]
async fn nearby_sends_position_radius_and_limit() {
    let base = spawn_api(fake_api()).await;
    let query = NearbyQuery::around(LatLng::new(36.8, 10.18));
    let stations = client(&base)
        .fetch_nearby_stations(query)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stations[0].name, "36.8|10.18|5000|50");
    assert_eq!(stations[0].distance_meters, Some(2500.0));
    assert!(!stations[0].has_available_connectors);
}

#[tokio::test]
async fn search_encodes_query() {
    let base = spawn_api(fake_api()).await;
    let stations = client(&base)
        .search_stations("Lac 2 & co/ú")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].name, "Lac 2 & co/ú");
}

#[tokio::test]
async fn empty_search_fetches_all() {
    let base = spawn_api(fake_api()).await;
    let stations = client(&base).search_stations("").await.unwrap().unwrap();
    assert_eq!(stations.len(), 2);
}

#[tokio::test]
async fn station_detail() {
    let base = spawn_api(fake_api()).await;
    let detail = client(&base)
        .fetch_station_detail(StationId(5))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(detail.station.id, StationId(5));
    assert_eq!(detail.connectors.len(), 1);
    assert!(!detail.connectors[0].is_available());
}

#[tokio::test]
async fn unsuccessful_envelope_is_no_result() {
    let base = spawn_api(fake_api()).await;
    let detail = client(&base)
        .fetch_station_detail(StationId(404))
        .await
        .unwrap();
    assert!(detail.is_none());
}

#[tokio::test]
async fn error_status_is_api_error() {
    let base = spawn_api(fake_api()).await;
    let err = client(&base).fetch_statistics().await.unwrap_err();
    match err {
        GatewayError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database down");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_json_error() {
    let base = spawn_api(fake_api()).await;
    let err = client(&base).fetch_connector_types().await.unwrap_err();
    assert!(matches!(err, GatewayError::Json { .. }));
}

#[tokio::test]
async fn export_returns_raw_document_in_order() {
    let base = spawn_api(fake_api()).await;
    let doc: Value = client(&base).export_geojson().await.unwrap();

    assert_eq!(doc["type"], "FeatureCollection");
    let keys: Vec<&String> = doc["metadata"].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["z", "a"]);
}

#[tokio::test]
async fn unreachable_api_is_http_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}/api/v1"))
        .fetch_all_stations()
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Http(_)));
}

fn slow_api() -> Router {
    Router::new().route(
        "/api/v1/stations",
        get(|| async {
            tokio::time::sleep(std::time::Duration::from_millis(1500)).await;
            Json(json!({"success": true, "data": []}))
        }),
    )
}

#[tokio::test]
async fn default_client_waits_for_slow_api() {
    let base = spawn_api(slow_api()).await;
    let client = GatewayClient::new(GatewayConfig::new(&base)).unwrap();

    let stations = client.fetch_all_stations().await.unwrap().unwrap();
    assert!(stations.is_empty());
}

#[tokio::test]
async fn configured_timeout_cuts_off_slow_api() {
    let base = spawn_api(slow_api()).await;
    let client = GatewayClient::new(GatewayConfig::new(&base).with_timeout(1)).unwrap();

    let err = client.fetch_all_stations().await.unwrap_err();
    match err {
        GatewayError::Http(e) => assert!(e.is_timeout()),
        other => panic!("expected HTTP timeout, got {other:?}"),
    }
}
