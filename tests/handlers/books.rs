//! Book endpoint tests

use serde_json::json;

use crate::common::{
    TestApp,
    helpers::{book_body, create, get, id_of, post, put},
};

#[tokio::test]
async fn test_create_book_keeps_commercial_figures() {
    let app = TestApp::new().await;

    let book = create(&app, "book", &book_body("Dune")).await;

    assert_eq!(book["name"], "Dune");
    assert_eq!(book["price"], 15.5);
    assert_eq!(book["count"], 3);
    assert_eq!(book["cost_price"], 10.0);
    assert_eq!(book["profit_status"], "profit");
    assert_eq!(book["profit"], 5.5);
    assert_eq!(book["sell_price"], 15.5);
    assert!(book["updated_at"].is_string());
}

#[tokio::test]
async fn test_create_book_accepts_came_price() {
    let app = TestApp::new().await;
    let mut body = book_body("Emma");
    let object = body.as_object_mut().unwrap();
    object.remove("cost_price");
    object.insert("came_price".to_string(), json!(7.25));

    let book = create(&app, "book", &body).await;

    assert_eq!(book["cost_price"], 7.25);
}

#[tokio::test]
async fn test_search_matches_name_case_insensitively() {
    let app = TestApp::new().await;
    create(&app, "book", &book_body("Dune")).await;
    create(&app, "book", &book_body("Dune Messiah")).await;
    create(&app, "book", &book_body("Emma")).await;

    let envelope = get(&app, "/book?search=dUNe").await;

    assert_eq!(envelope.status, 200);
    assert_eq!(envelope.description(), "Get List Book");
    assert_eq!(envelope.data()["count"], 2);
    let books = envelope.data()["books"].as_array().unwrap();
    assert_eq!(books.len(), 2);
    assert!(books.iter().all(|b| b["name"].as_str().unwrap().contains("Dune")));
}

#[tokio::test]
async fn test_search_without_matches_is_empty() {
    let app = TestApp::new().await;
    create(&app, "book", &book_body("Dune")).await;

    let envelope = get(&app, "/book?search=zzz").await;

    assert_eq!(envelope.data(), &json!({ "count": 0, "books": [] }));
}

#[tokio::test]
async fn test_whitespace_search_is_matched_as_sent() {
    let app = TestApp::new().await;
    create(&app, "book", &book_body("Dune")).await;
    create(&app, "book", &book_body("Dune Messiah")).await;
    create(&app, "book", &book_body("Emma")).await;

    let envelope = get(&app, "/book?search=%20").await;

    assert_eq!(envelope.status, 200);
    assert_eq!(envelope.data()["count"], 1);
    assert_eq!(envelope.data()["books"][0]["name"], "Dune Messiah");
}

#[tokio::test]
async fn test_padded_id_is_rejected() {
    let app = TestApp::new().await;
    let book = create(&app, "book", &book_body("Dune")).await;

    let envelope = get(&app, &format!("/book/%20{}", id_of(&book))).await;

    assert_eq!(envelope.status, 400);
    assert_eq!(envelope.data(), "Invalid UUID");
}

#[tokio::test]
async fn test_update_book_replaces_all_fields() {
    let app = TestApp::new().await;
    let book = create(&app, "book", &book_body("Dune")).await;
    let mut body = book_body("Dune (2nd ed.)");
    body["count"] = json!(0);
    body["profit_status"] = json!("loss");

    let envelope = put(&app, &format!("/book/{}", id_of(&book)), &body).await;

    assert_eq!(envelope.status, 202);
    assert_eq!(envelope.data()["name"], "Dune (2nd ed.)");
    assert_eq!(envelope.data()["count"], 0);
    assert_eq!(envelope.data()["profit_status"], "loss");
    assert_eq!(envelope.data()["id"], book["id"]);
    assert_eq!(envelope.data()["created_at"], book["created_at"]);
}

#[tokio::test]
async fn test_create_book_with_negative_count_is_rejected() {
    let app = TestApp::new().await;
    let mut body = book_body("Dune");
    body["count"] = json!(-1);

    let envelope = post(&app, "/book", &body).await;

    assert_eq!(envelope.status, 400);
    assert_eq!(envelope.data(), "count cannot be negative");
    assert_eq!(app.store.books.len(), 0);
}
