//! Error envelope tests: storage failures, timeouts and unrouted requests

use std::time::Duration;

use serde_json::json;
use uuid::Uuid;

use storefront::config::PaginationConfig;

use crate::common::{
    TestApp,
    helpers::{book_body, create, get, id_of, post, put, read},
};

// ============================================================================
// Storage failures
// ============================================================================

#[tokio::test]
async fn test_storage_failure_on_list_returns_500() {
    let app = TestApp::new().await;
    app.store.books.fail_storage();

    let envelope = get(&app, "/book").await;

    assert_eq!(envelope.status, 500);
    assert_eq!(envelope.body["status_code"], 500);
    assert_eq!(envelope.description(), "Storage error");
    assert!(!envelope.data().as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_storage_failure_on_create_returns_500() {
    let app = TestApp::new().await;
    app.store.books.fail_storage();

    let envelope = post(&app, "/book", &book_body("Dune")).await;

    assert_eq!(envelope.status, 500);
    assert_eq!(envelope.description(), "Storage error");
    assert_eq!(app.store.books.len(), 0);
}

#[tokio::test]
async fn test_storage_failure_on_update_returns_500() {
    let app = TestApp::new().await;
    let author = create(&app, "author", &json!({ "name": "Jane Austen" })).await;
    app.store.authors.fail_storage();

    let envelope = put(
        &app,
        &format!("/author/{}", id_of(&author)),
        &json!({ "name": "J. Austen" }),
    )
    .await;

    assert_eq!(envelope.status, 500);
    assert!(envelope.data().is_string());
}

#[tokio::test]
async fn test_validation_still_wins_over_failing_storage() {
    let app = TestApp::new().await;
    app.store.categories.fail_storage();

    let envelope = get(&app, "/category/not-a-uuid").await;

    assert_eq!(envelope.status, 400);
    assert_eq!(envelope.data(), "Invalid UUID");
}

// ============================================================================
// Requests that never reach a handler
// ============================================================================

#[tokio::test]
async fn test_slow_storage_times_out_with_408_envelope() {
    let app =
        TestApp::with_options(PaginationConfig::default(), Duration::from_millis(200)).await;
    app.store.users.stall();

    let envelope = get(&app, &format!("/user/{}", Uuid::new_v4())).await;

    assert_eq!(envelope.status, 408);
    assert_eq!(envelope.data(), "Request timed out");
}

#[tokio::test]
async fn test_unknown_route_returns_404_envelope() {
    let app = TestApp::new().await;

    let response = app.client.get(app.url("/warehouse")).send().await.unwrap();
    let envelope = read(response).await;

    assert_eq!(envelope.status, 404);
    assert_eq!(envelope.data(), "Route not found");
}

#[tokio::test]
async fn test_unsupported_method_returns_405_envelope() {
    let app = TestApp::new().await;
    let book = create(&app, "book", &book_body("Dune")).await;

    let response = app
        .client
        .patch(app.url(&format!("/book/{}", id_of(&book))))
        .json(&json!({ "name": "X" }))
        .send()
        .await
        .unwrap();
    let envelope = read(response).await;

    assert_eq!(envelope.status, 405);
    assert_eq!(envelope.data(), "Method not allowed");
}
