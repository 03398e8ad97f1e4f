mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum::http::StatusCode;
use axum_test::TestServer;
use linkcache::api::handlers::{redirect_handler, shorten_handler};
use serde_json::json;

fn server(state: linkcache::AppState) -> TestServer {
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/{token}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_success() {
    let (state, backends) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "http://example.com/a" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let short_url = json["short_url"].as_str().unwrap();
    let token = short_url.strip_prefix("http://s.test/").unwrap();
    assert_eq!(token.len(), 7);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));

    let records = backends.store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].token, token);
    assert_eq!(records[0].target, "http://example.com/a");
}

#[tokio::test]
async fn test_shorten_then_redirect() {
    let (state, _backends) = common::create_test_state();
    let server = server(state);

    let json = server
        .post("/shorten")
        .json(&json!({ "url": "https://www.rust-lang.org/learn" }))
        .await
        .json::<serde_json::Value>();
    let short_url = json["short_url"].as_str().unwrap();
    let token = short_url.rsplit('/').next().unwrap();

    let response = server.get(&format!("/{}", token)).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://www.rust-lang.org/learn");
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let (state, backends) = common::create_test_state();
    let server = server(state);

    let response = server.post("/shorten").json(&json!({})).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(backends.store.insert_calls(), 0);
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let (state, _backends) = common::create_test_state();
    let server = server(state);

    let response = server.post("/shorten").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_whitespace_url() {
    let (state, _backends) = common::create_test_state();
    let server = server(state);

    let response = server.post("/shorten").json(&json!({ "url": "   " })).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "URL not provided");
}

#[tokio::test]
async fn test_shorten_null_url() {
    let (state, backends) = common::create_test_state();
    let server = server(state);

    let response = server.post("/shorten").json(&json!({ "url": null })).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "URL not provided");
    assert_eq!(backends.store.insert_calls(), 0);
}

#[tokio::test]
async fn test_shorten_non_string_url() {
    let (state, _backends) = common::create_test_state();
    let server = server(state);

    let response = server.post("/shorten").json(&json!({ "url": 42 })).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["reason"].is_string());
}

#[tokio::test]
async fn test_shorten_non_json_body() {
    let (state, _backends) = common::create_test_state();
    let server = server(state);

    let response = server.post("/shorten").text("http://example.com/a").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_rejects_unredirectable_target() {
    let (state, backends) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "http://example.com/a\nb" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["field"], "url");
    assert!(backends.store.records().is_empty());
}

#[tokio::test]
async fn test_shorten_accepts_opaque_target() {
    let (state, backends) = common::create_test_state();
    let server = server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "not a url at all" }))
        .await;

    response.assert_status_ok();
    assert_eq!(backends.store.records()[0].target, "not a url at all");
}

#[tokio::test]
async fn test_shorten_store_unavailable() {
    let (state, backends) = common::create_test_state();
    backends.store.set_available(false);
    let server = server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "http://example.com/a" }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "service_unavailable");
    assert!(backends.cache.is_empty());
}

#[tokio::test]
async fn test_shorten_with_cache_down() {
    let (state, backends) = common::create_test_state();
    backends.cache.set_available(false);
    let server = server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "http://example.com/a" }))
        .await;

    response.assert_status_ok();
    assert_eq!(backends.store.records().len(), 1);
}
