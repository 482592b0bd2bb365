//! Order endpoint tests, including partial updates

use serde_json::json;
use uuid::Uuid;

use crate::common::{
    TestApp,
    helpers::{create, get, id_of, order_body, patch, post},
};

#[tokio::test]
async fn test_create_order_accepts_misspelled_longitude() {
    let app = TestApp::new().await;
    let mut body = order_body("Lunch");
    let object = body.as_object_mut().unwrap();
    object.remove("longitude");
    object.insert("longtitude".to_string(), json!(69.5));

    let order = create(&app, "order", &body).await;

    assert_eq!(order["longitude"], 69.5);
    assert!(order.get("longtitude").is_none());
}

#[tokio::test]
async fn test_create_order_rejects_negative_quantity() {
    let app = TestApp::new().await;
    let mut body = order_body("Lunch");
    body["quantity"] = json!(-2);

    let envelope = post(&app, "/order", &body).await;

    assert_eq!(envelope.status, 400);
    assert_eq!(app.store.orders.len(), 0);
}

#[tokio::test]
async fn test_patch_quantity_changes_only_quantity() {
    let app = TestApp::new().await;
    let order = create(&app, "order", &order_body("Lunch")).await;
    let path = format!("/order/{}", id_of(&order));

    let envelope = patch(&app, &path, &json!({ "quantity": 5 })).await;

    assert_eq!(envelope.status, 200);
    assert_eq!(envelope.description(), "Patch Order");
    assert_eq!(envelope.data()["quantity"], 5);
    for field in [
        "name",
        "price",
        "phone_number",
        "latitude",
        "longitude",
        "user_id",
        "customer_id",
        "courier_id",
        "product_id",
        "created_at",
    ] {
        assert_eq!(envelope.data()[field], order[field], "{field} changed");
    }
    assert_eq!(get(&app, &path).await.data()["quantity"], 5);
}

#[tokio::test]
async fn test_patch_several_columns() {
    let app = TestApp::new().await;
    let order = create(&app, "order", &order_body("Lunch")).await;
    let courier_id = Uuid::new_v4();

    let envelope = patch(
        &app,
        &format!("/order/{}", id_of(&order)),
        &json!({ "price": 25.75, "courier_id": courier_id, "name": "Dinner" }),
    )
    .await;

    assert_eq!(envelope.status, 200);
    assert_eq!(envelope.data()["price"], 25.75);
    assert_eq!(envelope.data()["courier_id"], courier_id.to_string());
    assert_eq!(envelope.data()["name"], "Dinner");
    assert_eq!(envelope.data()["quantity"], order["quantity"]);
}

#[tokio::test]
async fn test_empty_patch_is_rejected_before_storage() {
    let app = TestApp::new().await;
    let order = create(&app, "order", &order_body("Lunch")).await;
    let calls = app.store.orders.calls();

    let envelope = patch(&app, &format!("/order/{}", id_of(&order)), &json!({})).await;

    assert_eq!(envelope.status, 400);
    assert_eq!(envelope.data(), "no fields to update");
    assert_eq!(app.store.orders.calls(), calls);
}

#[tokio::test]
async fn test_patch_rejects_protected_and_unknown_columns() {
    let app = TestApp::new().await;
    let order = create(&app, "order", &order_body("Lunch")).await;
    let path = format!("/order/{}", id_of(&order));

    for body in [
        json!({ "id": Uuid::new_v4() }),
        json!({ "created_at": "2024-01-01T00:00:00Z" }),
        json!({ "colour": "red" }),
    ] {
        let envelope = patch(&app, &path, &body).await;
        assert_eq!(envelope.status, 400, "{body} should be rejected");
    }

    assert_eq!(get(&app, &path).await.data(), &order);
}

#[tokio::test]
async fn test_patch_rejects_wrong_value_types() {
    let app = TestApp::new().await;
    let order = create(&app, "order", &order_body("Lunch")).await;
    let path = format!("/order/{}", id_of(&order));

    for body in [
        json!({ "quantity": "five" }),
        json!({ "quantity": null }),
        json!({ "user_id": "not-a-uuid" }),
        json!({ "latitude": "north" }),
    ] {
        let envelope = patch(&app, &path, &body).await;
        assert_eq!(envelope.status, 400, "{body} should be rejected");
    }
}

#[tokio::test]
async fn test_patch_with_non_object_body_is_rejected() {
    let app = TestApp::new().await;
    let order = create(&app, "order", &order_body("Lunch")).await;

    let envelope = patch(&app, &format!("/order/{}", id_of(&order)), &json!([1, 2])).await;

    assert_eq!(envelope.status, 400);
}

#[tokio::test]
async fn test_patch_missing_order_returns_no_rows_affected() {
    let app = TestApp::new().await;

    let envelope = patch(
        &app,
        &format!("/order/{}", Uuid::new_v4()),
        &json!({ "quantity": 2 }),
    )
    .await;

    assert_eq!(envelope.status, 400);
    assert_eq!(envelope.data(), "No rows affected");
}

#[tokio::test]
async fn test_patch_with_malformed_id_returns_invalid_uuid() {
    let app = TestApp::new().await;

    let envelope = patch(&app, "/order/abc", &json!({ "quantity": 2 })).await;

    assert_eq!(envelope.status, 400);
    assert_eq!(envelope.data(), "Invalid UUID");
}
