mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_redirect_returns_302_with_location() {
    let server = TestServer::new(common::test_app()).unwrap();

    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": "example.com" }))
        .await;
    let code = created.json::<serde_json::Value>()["short_code"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/api/r/{code}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://example.com"
    );
}

#[tokio::test]
async fn test_redirect_increments_click_count() {
    let server = TestServer::new(common::test_app()).unwrap();

    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    let code = created.json::<serde_json::Value>()["short_code"]
        .as_str()
        .unwrap()
        .to_string();

    for expected in 1..=2 {
        server.get(&format!("/api/r/{code}")).await;

        let listing = server.get("/api/urls").await.json::<serde_json::Value>();
        assert_eq!(listing[0]["click_count"], expected);
        // The stored URL is returned unmodified.
        assert_eq!(listing[0]["original_url"], "https://example.com");
    }
}

#[tokio::test]
async fn test_redirect_unknown_code_is_not_found() {
    let server = TestServer::new(common::test_app()).unwrap();

    let response = server.get("/api/r/missing1").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_unknown_code_mutates_nothing() {
    let server = TestServer::new(common::test_app()).unwrap();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    server.get("/api/r/missing1").await;

    let listing = server.get("/api/urls").await.json::<serde_json::Value>();
    assert_eq!(listing[0]["click_count"], 0);
}
