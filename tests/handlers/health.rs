//! Health endpoint tests

use crate::common::TestApp;

#[tokio::test]
async fn test_health_returns_ok() {
    let app = TestApp::new().await;

    let response = app.client.get(app.url("/health")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}
