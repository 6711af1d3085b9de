//! Integration tests for the item registry HTTP API.
//!
//! Every test drives a fresh router in-process, so no port is bound.
//! Run with: cargo test --test integration

mod items;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use item_registry::api::{create_router, AppState};
use item_registry::registry::ItemRegistry;

/// Router over an empty registry.
pub fn test_app() -> Router {
    create_router(AppState::new(ItemRegistry::new()))
}

/// Send one request and decode the JSON response body.
///
/// An empty body decodes to `Value::Null`.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    send_request(app, builder.body(body).unwrap()).await
}

/// Send a prepared request and decode the JSON response body.
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
