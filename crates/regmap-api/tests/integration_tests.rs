//! # Integration Tests for regmap-api
//!
//! Drives the router with `tower::ServiceExt::oneshot` over the built-in
//! fallback dataset and over small custom datasets.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use regmap_api::AppState;
use regmap_core::Regulation;
use regmap_engine::Dataset;

fn test_app() -> axum::Router {
    regmap_api::app(AppState::default())
}

fn app_with(regulations: Vec<Regulation>) -> axum::Router {
    regmap_api::app(AppState::new(Dataset::new("test", regulations)))
}

async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::http::Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

async fn get(app: axum::Router, uri: &str) -> axum::http::Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(app: axum::Router, uri: &str, body: Value) -> axum::http::Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

fn ids(json: &Value) -> Vec<String> {
    json["regulations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

// -- Health Checks ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_check() {
    let response = get(test_app(), "/health/liveness").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_check() {
    let response = get(test_app(), "/health/readiness").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

// -- Places -------------------------------------------------------------------

#[tokio::test]
async fn test_ancestors_of_state() {
    let response = get(test_app(), "/v1/places/California/ancestors").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["place"], "California");
    assert_eq!(
        json["ancestors"],
        serde_json::json!(["United States", "North America", "Global"])
    );
}

#[tokio::test]
async fn test_ancestors_resolve_aliases() {
    let json = body_json(get(test_app(), "/v1/places/Czechia/ancestors").await).await;
    assert_eq!(json["place"], "Czech Republic");
    assert_eq!(json["ancestors"], serde_json::json!(["EU", "Global"]));
}

#[tokio::test]
async fn test_ancestors_of_unknown_place_is_global() {
    let response = get(test_app(), "/v1/places/Atlantis/ancestors").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json.get("place").is_none());
    assert_eq!(json["ancestors"], serde_json::json!(["Global"]));
}

#[tokio::test]
async fn test_place_regulations_include_ancestor_rules() {
    let app = app_with(vec![
        Regulation::new("sb-253", "California", "United States").unwrap(),
        Regulation::new("sec", "US", "United States").unwrap(),
        Regulation::new("osfi", "North America", "Canada").unwrap(),
        Regulation::new("issb", "Global", "").unwrap(),
    ]);
    let json = body_json(get(app, "/v1/places/California/regulations").await).await;
    assert_eq!(ids(&json), ["sb-253", "sec", "issb"]);
    assert_eq!(json["count"], 3);
    assert_eq!(json["resolved"]["kind"], "place");
}

#[tokio::test]
async fn test_region_bucket_regulations() {
    let app = app_with(vec![
        Regulation::new("csrd", "EU", "").unwrap(),
        Regulation::new("sdr", "UK", "").unwrap(),
    ]);
    let json = body_json(get(app, "/v1/places/Europe/regulations").await).await;
    assert_eq!(json["resolved"], serde_json::json!({"kind": "bucket", "value": "Europe"}));
    assert_eq!(ids(&json), ["csrd"]);
}

// -- Regulations --------------------------------------------------------------

#[tokio::test]
async fn test_regulation_target() {
    let json = body_json(get(test_app(), "/v1/regulations/ca-sb-253/target").await).await;
    assert_eq!(json["target"], serde_json::json!({"kind": "location", "value": "California"}));
    assert_eq!(json["scope"], "state");
    assert_eq!(json["primary_location"], "California");
}

#[tokio::test]
async fn test_regional_regulation_has_no_primary_location() {
    let json = body_json(get(test_app(), "/v1/regulations/eu-csrd/target").await).await;
    assert_eq!(json["target"], serde_json::json!({"kind": "region", "value": "EU"}));
    assert_eq!(json["scope"], "regional");
    assert!(json["primary_location"].is_null());
}

#[tokio::test]
async fn test_unknown_regulation_is_404() {
    let response = get(test_app(), "/v1/regulations/nope/target").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert!(json["error"]["message"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn test_search() {
    let response = post_json(
        test_app(),
        "/v1/regulations/search",
        serde_json::json!({"locations": ["Oceania"], "categories": ["Disclosure"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(ids(&json), ["au-asrs"]);
}

#[tokio::test]
async fn test_search_rejects_malformed_body() {
    let response = post_json(
        test_app(),
        "/v1/regulations/search",
        serde_json::json!({"locations": "Europe"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_scopes_partition_dataset() {
    let dataset_len = Dataset::fallback().len();
    let json = body_json(get(test_app(), "/v1/scopes").await).await;
    let total: usize = ["global", "regional", "country", "state"]
        .iter()
        .map(|k| json[k].as_array().unwrap().len())
        .sum();
    assert_eq!(total, dataset_len);
}

// -- Map ----------------------------------------------------------------------

#[tokio::test]
async fn test_pins_absorb_country_under_state() {
    let app = app_with(vec![
        Regulation::new("sb-253", "California", "United States").unwrap(),
        Regulation::new("sec", "US", "United States").unwrap(),
    ]);
    let json = body_json(get(app, "/v1/pins").await).await;
    let pins = json.as_array().unwrap();
    assert_eq!(pins.len(), 1);
    assert_eq!(pins[0]["place"], "California");
    assert_eq!(pins[0]["level"], "state");
    assert_eq!(pins[0]["regulation_ids"], serde_json::json!(["sb-253", "sec"]));
    assert!(pins[0]["lat"].is_f64());
}

#[tokio::test]
async fn test_sidebar() {
    let app = app_with(vec![
        Regulation::new("fr", "France", "").unwrap().with_category("Disclosure"),
        Regulation::new("uk", "UK", "").unwrap(),
    ]);
    let json = body_json(get(app, "/v1/sidebar").await).await;
    assert_eq!(json["groups"]["EU"], serde_json::json!(["France"]));
    assert_eq!(json["groups"]["Europe"], serde_json::json!(["United Kingdom"]));
    assert_eq!(json["facets"]["by_scope"]["country"], 2);
    assert_eq!(json["facets"]["by_category"]["Disclosure"], 1);
}
