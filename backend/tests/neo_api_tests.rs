//! End-to-end tests for the catalog proxy endpoints.
#![cfg(feature = "http-server")]

use std::sync::Arc;

use axum::http::StatusCode;
use meteorguard::catalog::LocalCatalog;
use meteorguard::http::{create_router, AppState};
use serde_json::{json, Value};

mod support;
use support::{get, post_json, send};

fn row(des: &str, name: &str, diameter: &str, pha: &str) -> Vec<Value> {
    vec![
        json!(des),
        json!(name),
        json!(format!("20{}", des)),
        json!(diameter),
        json!(null),
        json!(pha),
    ]
}

fn catalog() -> LocalCatalog {
    LocalCatalog::new()
        .with_row(row("1", "Ceres", "939.4", "N"))
        .with_row(row("1566", "Icarus", "1.0", "Y"))
        .with_row(row("433", "Eros", "", "N"))
        .with_row(row("99942", "Apophis", "0.34", "Y"))
        .with_detail("433", json!({ "object": { "fullname": "433 Eros (A898 PA)" }, "phys_par": [] }))
}

fn app(catalog: LocalCatalog) -> axum::Router {
    create_router(AppState::new(Arc::new(catalog)))
}

#[tokio::test]
async fn test_search_defaults_with_empty_body() {
    let (status, body) = send(app(catalog()), post_json("/neo/search", "")).await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["des"], "1");
    assert_eq!(records[0]["name"], "Ceres");
    assert_eq!(records[0]["diameter"], 939.4);
    assert_eq!(records[2]["diameter"], Value::Null);
    assert_eq!(records[0]["albedo"], Value::Null);
}

#[tokio::test]
async fn test_search_pha_only() {
    let (status, body) = send(
        app(catalog()),
        post_json("/neo/search", r#"{"pha": true, "limit": 20}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r["pha"] == "Y"));
}

#[tokio::test]
async fn test_search_limit_truncates() {
    let (_, body) = send(app(catalog()), post_json("/neo/search", r#"{"limit": 2}"#)).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_rejects_out_of_range_limit() {
    for limit in [0, 101] {
        let (status, body) = send(
            app(catalog()),
            post_json("/neo/search", &format!(r#"{{"limit": {}}}"#, limit)),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"][0]["field"], "limit");
    }
}

#[tokio::test]
async fn test_search_upstream_down() {
    let (status, body) = send(app(LocalCatalog::offline()), post_json("/neo/search", "{}")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_search_malformed_upstream_row() {
    let catalog = LocalCatalog::new().with_row(vec![json!("1"), json!("Ceres")]);
    let (status, _) = send(app(catalog), post_json("/neo/search", "{}")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_detail_passthrough() {
    let (status, body) = send(app(catalog()), get("/neo/detail/433")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["object"]["fullname"], "433 Eros (A898 PA)");
    assert_eq!(body["phys_par"], json!([]));
}

#[tokio::test]
async fn test_detail_upstream_error() {
    let (status, body) = send(app(catalog()), get("/neo/detail/2024%20YR4")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["message"].as_str().unwrap().contains("2024 YR4"));
}
