//! Integration tests for the navigation API endpoints

#![cfg(feature = "ssr")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use propnav_core::NavConfig;
use std::sync::Arc;
use tower::ServiceExt;

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let router = propnav_web::create_router(Arc::new(NavConfig::default()));

    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_json("/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["items"], 7);
}

#[tokio::test]
async fn test_navigation_endpoint_returns_config() {
    let (status, json) = get_json("/api/navigation").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["items"][0]["path"], "/");
    assert_eq!(json["items"][4]["favorites"], true);
    assert_eq!(json["items"][4]["icon"], "heart");
    assert_eq!(json["compact_limit"], 5);
}

#[tokio::test]
async fn test_header_endpoint_defaults_to_wide_layout() {
    let (status, json) = get_json("/api/header").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["layout"]["variant"], "wide");
    assert_eq!(json["layout"]["items"][0]["active"], true);
    assert_eq!(json["backdrop"], false);
}

#[tokio::test]
async fn test_header_endpoint_compact_badge() {
    let (_, json) = get_json("/api/header?path=/favorites&width=1100&favorites=12").await;

    let items = json["layout"]["items"].as_array().unwrap();
    assert_eq!(json["layout"]["variant"], "compact");
    assert_eq!(items.len(), 5);
    assert_eq!(items[4]["badge"], "9+");
    assert_eq!(items[4]["active"], true);
    assert_eq!(items[4]["tooltip"], "お気に入り");
}

#[tokio::test]
async fn test_header_endpoint_open_mobile_menu() {
    let (_, json) = get_json("/api/header?path=/about&width=390&open=true").await;

    assert_eq!(json["layout"]["variant"], "mobile");
    assert_eq!(json["layout"]["toggle"]["aria_expanded"], true);
    assert_eq!(json["layout"]["panel"].as_array().unwrap().len(), 7);
    assert_eq!(json["backdrop"], true);
    assert!(json["secondary"].is_null());
}
