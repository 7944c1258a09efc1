use axum::extract::FromRequestParts;
use axum::http::Request;

use sundial_stats::http::dto::{ChartQuery, StationInfoDto};
use sundial_stats::http::identity::{PRIVILEGE_HEADER, STATION_HEADER};
use sundial_stats::models::Identity;
use sundial_stats::services::AccessibleStation;

#[test]
fn test_chart_query_accepts_camel_case_keys() {
    let query: ChartQuery = serde_json::from_value(serde_json::json!({
        "startDate": "2024-06-01",
        "endDate": "2024-06-03",
    }))
    .unwrap();
    assert_eq!(query.date, None);
    assert_eq!(query.start_date.as_deref(), Some("2024-06-01"));
    assert_eq!(query.end_date.as_deref(), Some("2024-06-03"));
}

#[test]
fn test_chart_query_single_date() {
    let query: ChartQuery = serde_json::from_value(serde_json::json!({
        "date": "2024-06-01",
    }))
    .unwrap();
    assert_eq!(query.date.as_deref(), Some("2024-06-01"));
    assert_eq!(query.start_date, None);
}

#[test]
fn test_station_dto_from_accessible_station() {
    let dto: StationInfoDto = AccessibleStation {
        id: "stgrz".to_string(),
        name: "Graz".to_string(),
    }
    .into();

    let json = serde_json::to_value(&dto).unwrap();
    assert_eq!(json["stationId"], "stgrz");
    assert_eq!(json["stationName"], "Graz");
}

#[tokio::test]
async fn test_identity_from_global_claims() {
    let request = Request::builder()
        .uri("/v1/stations")
        .header(PRIVILEGE_HEADER, "0")
        .body(())
        .unwrap();
    let (mut parts, _) = request.into_parts();

    let identity = Identity::from_request_parts(&mut parts, &()).await.unwrap();
    assert!(identity.is_global());
    assert_eq!(identity.station_id, None);
}

#[tokio::test]
async fn test_identity_from_restricted_claims() {
    let request = Request::builder()
        .uri("/v1/stations")
        .header(PRIVILEGE_HEADER, "3")
        .header(STATION_HEADER, "stgrz")
        .body(())
        .unwrap();
    let (mut parts, _) = request.into_parts();

    let identity = Identity::from_request_parts(&mut parts, &()).await.unwrap();
    assert!(!identity.is_global());
    assert_eq!(identity.station_id.as_deref(), Some("stgrz"));
}

#[tokio::test]
async fn test_identity_rejected_without_privilege_claim() {
    let request = Request::builder().uri("/v1/stations").body(()).unwrap();
    let (mut parts, _) = request.into_parts();

    let result = Identity::from_request_parts(&mut parts, &()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_restricted_identity_rejected_without_station_claim() {
    let request = Request::builder()
        .uri("/v1/stations")
        .header(PRIVILEGE_HEADER, "3")
        .body(())
        .unwrap();
    let (mut parts, _) = request.into_parts();

    let result = Identity::from_request_parts(&mut parts, &()).await;
    assert!(result.is_err());
}
