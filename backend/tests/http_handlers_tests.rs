//! End-to-end tests of the HTTP API against the in-memory repository.

#![cfg(feature = "http-server")]

mod support;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use flight_kpi::db::LocalRepository;
use flight_kpi::http::{create_router, AppState};

fn app(repo: &LocalRepository) -> Router {
    create_router(AppState::from_repository(Arc::new(repo.clone())))
}

async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn loaded_app() -> Router {
    let repo = LocalRepository::with_records(support::sample_records());
    let app = app(&repo);
    let (status, _) = call(&app, Method::POST, "/v1/refresh").await;
    assert_eq!(status, StatusCode::OK);
    app
}

#[tokio::test]
async fn test_health_reports_database_status() {
    let repo = LocalRepository::new();
    let app = app(&repo);

    let (status, body) = call(&app, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "connected");

    repo.set_healthy(false);
    let (_, body) = call(&app, Method::GET, "/health").await;
    assert_eq!(body["database"], "disconnected");
}

#[tokio::test]
async fn test_refresh_reports_outcome() {
    let repo = LocalRepository::with_records(support::sample_records());
    let app = app(&repo);

    let (status, body) = call(&app, Method::POST, "/v1/refresh").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "loaded");
    assert_eq!(body["record_count"], 6);

    let (_, body) = call(&app, Method::POST, "/v1/refresh").await;
    assert_eq!(body["outcome"], "unchanged");
}

#[tokio::test]
async fn test_refresh_unavailable_is_503() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);
    let app = app(&repo);

    let (status, body) = call(&app, Method::POST, "/v1/refresh").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "DATA_UNAVAILABLE");
}

#[tokio::test]
async fn test_dashboard_before_refresh_is_409() {
    let app = app(&LocalRepository::new());
    let (status, body) = call(&app, Method::GET, "/v1/dashboard").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "NOT_LOADED");
}

#[tokio::test]
async fn test_filters_lists_options() {
    let app = loaded_app().await;
    let (status, body) = call(&app, Method::GET, "/v1/filters").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["options"]["countries"],
        serde_json::json!(["DE", "FR", "US"])
    );
    assert_eq!(body["options"]["date_bounds"]["lower"], "2024-01-01");
    assert_eq!(body["options"]["date_bounds"]["upper"], "2024-01-03");
    assert_eq!(body["current_criteria"], body["default_criteria"]);
}

#[tokio::test]
async fn test_dashboard_default_view() {
    let app = loaded_app().await;
    let (status, body) = call(&app, Method::GET, "/v1/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    let labels: Vec<&str> = body["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Total Flights", "Avg Velocity", "On Ground"]);
    assert_eq!(body["cards"][0]["display"], "445");
    assert_eq!(body["records"].as_array().unwrap().len(), 6);
    assert!(body.get("notice").is_none());
}

#[tokio::test]
async fn test_dashboard_query_parameters() {
    let app = loaded_app().await;
    let (status, body) = call(
        &app,
        Method::GET,
        "/v1/dashboard?countries=US,FR&from=2024-01-02&to=2024-01-02",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["total_flights_sum"], 140);
    assert_eq!(body["flights_by_country"][0]["origin_country"], "FR");
    assert_eq!(body["flights_over_time"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_dashboard_empty_country_selection() {
    let app = loaded_app().await;
    let (status, body) = call(&app, Method::GET, "/v1/dashboard?countries=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notice"], "no_matching_records");
    assert_eq!(body["cards"][1]["display"], "n/a");
    assert!(body["records"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_dashboard_bad_date_is_400() {
    let app = loaded_app().await;
    let (status, body) = call(&app, Method::GET, "/v1/dashboard?from=01-02-2024").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_dashboard_empty_table_notice() {
    let repo = LocalRepository::new();
    let app = app(&repo);
    call(&app, Method::POST, "/v1/refresh").await;

    let (status, body) = call(&app, Method::GET, "/v1/dashboard?countries=US").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notice"], "empty_result");
    assert_eq!(body["notice_message"], "No data found in FLIGHT_KPIS table.");
}

#[tokio::test]
async fn test_dashboard_names_the_refresh_it_was_built_from() {
    let repo = LocalRepository::with_records(support::sample_records());
    let app = app(&repo);
    let (_, report) = call(&app, Method::POST, "/v1/refresh").await;

    let (_, plain) = call(&app, Method::GET, "/v1/dashboard").await;
    let (_, filtered) = call(&app, Method::GET, "/v1/dashboard?countries=DE").await;
    assert_eq!(plain["refresh_id"], report["refresh_id"]);
    assert_eq!(filtered["refresh_id"], report["refresh_id"]);
    assert_eq!(filtered["criteria"]["date_range"]["upper"], "2024-01-03");
}
