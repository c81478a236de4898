mod common;

use axum_test::TestServer;

#[tokio::test]
async fn test_health_reports_healthy() {
    let server = TestServer::new(common::test_app()).unwrap();

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert!(body["service"].is_string());
    assert!(body["version"].is_string());
}
