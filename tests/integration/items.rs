//! Item CRUD over HTTP.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::{send, send_request, test_app};

#[tokio::test]
async fn test_get_items_empty() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/items", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_item() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/items",
        Some(json!({"name": "Test Item", "description": "A test item", "price": 29.99})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Test Item");
    assert_eq!(body["description"], "A test item");
    assert_eq!(body["price"], 29.99);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_laptop_mouse_scenario() {
    let app = test_app();

    let (status, laptop) = send(
        &app,
        Method::POST,
        "/items",
        Some(json!({"name": "Laptop", "price": 1299.99})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(laptop["id"], 1);
    assert_eq!(laptop["name"], "Laptop");
    assert_eq!(laptop["description"], Value::Null);
    assert_eq!(laptop["price"], 1299.99);

    let (_, mouse) = send(
        &app,
        Method::POST,
        "/items",
        Some(json!({"name": "Mouse", "price": 19.99})),
    )
    .await;
    assert_eq!(mouse["id"], 2);

    let (_, listed) = send(&app, Method::GET, "/items", None).await;
    assert_eq!(listed, json!([laptop, mouse.clone()]));

    let (status, body) = send(&app, Method::DELETE, "/items/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Item deleted successfully"}));

    let (status, body) = send(&app, Method::GET, "/items/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Item not found"}));

    let (_, listed) = send(&app, Method::GET, "/items", None).await;
    assert_eq!(listed, json!([mouse]));
}

#[tokio::test]
async fn test_get_item_by_id() {
    let app = test_app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/items",
        Some(json!({"name": "Test Item 2", "description": "Another test item", "price": 39.99})),
    )
    .await;

    let uri = format!("/items/{}", created["id"]);
    let (status, body) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_get_nonexistent_item() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/items/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Item not found");
}

#[tokio::test]
async fn test_update_item() {
    let app = test_app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/items",
        Some(json!({"name": "Test Item 3", "description": "Yet another test item", "price": 49.99})),
    )
    .await;

    let uri = format!("/items/{}", created["id"]);
    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({"name": "Updated Item", "description": "Updated description", "price": 59.99})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_eq!(updated["name"], "Updated Item");
    assert_eq!(updated["description"], "Updated description");
    assert_eq!(updated["price"], 59.99);

    let (_, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_nonexistent_item() {
    let app = test_app();
    let (status, _) = send(
        &app,
        Method::PUT,
        "/items/42",
        Some(json!({"name": "Ghost", "price": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_invalid_body_is_422() {
    let app = test_app();
    send(&app, Method::POST, "/items", Some(json!({"name": "Lamp", "price": 15}))).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/items/1",
        Some(json!({"name": "Lamp", "price": -3})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("price"));

    let (_, fetched) = send(&app, Method::GET, "/items/1", None).await;
    assert_eq!(fetched["price"], 15.0);
}

#[tokio::test]
async fn test_delete_item() {
    let app = test_app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/items",
        Some(json!({"name": "Test Item 4", "description": "Item to be deleted", "price": 19.99})),
    )
    .await;

    let uri = format!("/items/{}", created["id"]);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_id_is_not_reassigned() {
    let app = test_app();
    send(&app, Method::POST, "/items", Some(json!({"name": "A", "price": 1}))).await;
    send(&app, Method::POST, "/items", Some(json!({"name": "B", "price": 2}))).await;
    send(&app, Method::DELETE, "/items/2", None).await;

    let (_, created) = send(&app, Method::POST, "/items", Some(json!({"name": "C", "price": 3}))).await;
    assert_eq!(created["id"], 3);
}

#[tokio::test]
async fn test_create_rejects_empty_name() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/items",
        Some(json!({"name": "", "price": 10})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "name must not be empty");
}

#[tokio::test]
async fn test_create_rejects_negative_price() {
    let app = test_app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/items",
        Some(json!({"name": "X", "price": -1})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, listed) = send(&app, Method::GET, "/items", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_create_rejects_missing_and_mistyped_fields() {
    let app = test_app();

    for body in [
        json!({"name": "No price"}),
        json!({"price": 5}),
        json!({"name": "Bad price", "price": "cheap"}),
        json!({"name": 7, "price": 5}),
    ] {
        let (status, response) = send(&app, Method::POST, "/items", Some(body.clone())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {body}");
        assert!(response["detail"].is_string(), "body: {body}");
    }
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/items")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": \"Broken\", "))
        .unwrap();

    let (status, body) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_create_requires_json_content_type() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/items")
        .body(Body::from(json!({"name": "Plain", "price": 1}).to_string()))
        .unwrap();

    let (status, _) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_non_numeric_id_is_422() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/items/abc", None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/items",
        Some(json!({"id": 500, "name": "Chair", "price": 80})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_any_non_empty_name_is_accepted() {
    let app = test_app();
    let long_name = "n".repeat(201);

    for name in ["   ", long_name.as_str()] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/items",
            Some(json!({"name": name, "price": 1})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], name);
    }
}

#[tokio::test]
async fn test_extreme_prices_are_stored_exactly() {
    let app = test_app();

    for price in [1e29, 1e300, 1e-30] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/items",
            Some(json!({"name": "Edge", "price": price})),
        )
        .await;

        assert_eq!(status, StatusCode::OK, "price: {price}");
        assert_eq!(body["price"].as_f64(), Some(price));

        let uri = format!("/items/{}", body["id"]);
        let (_, fetched) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(fetched["price"].as_f64(), Some(price));
    }
}
