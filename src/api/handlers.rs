//! HTTP API handlers.

use std::fmt;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use strum::Display;
use time::OffsetDateTime;
use utoipa::ToSchema;

use super::error::{ApiError, ErrorResponse};
use crate::registry::{Item, ItemPayload, ItemRegistry};

/// OpenAPI tag for item endpoints.
pub const ITEMS_TAG: &str = "items";
/// OpenAPI tag for service endpoints.
pub const SYSTEM_TAG: &str = "system";

/// Application state shared with handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// The item registry.
    pub registry: ItemRegistry,
    /// Prometheus handle, present once a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state around an existing registry.
    pub fn new(registry: ItemRegistry) -> Self {
        Self {
            registry,
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("registry", &self.registry)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

/// Liveness status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HealthStatus {
    /// Process is up and serving.
    Healthy,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy".
    pub status: HealthStatus,
    /// Status message.
    pub message: &'static str,
    /// Current server time (UTC).
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: OffsetDateTime,
}

/// Welcome response.
#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    /// Greeting.
    pub message: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Plain confirmation message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Confirmation text.
    pub message: &'static str,
}

/// Welcome handler - static service banner.
#[utoipa::path(
    get,
    path = "/",
    tag = SYSTEM_TAG,
    responses((status = 200, description = "Service banner", body = WelcomeResponse))
)]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Item Registry",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health check handler - always returns 200.
///
/// No dependencies are checked; a response means the process is serving.
#[utoipa::path(
    get,
    path = "/health",
    tag = SYSTEM_TAG,
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn health() -> impl IntoResponse {
    let body = HealthResponse {
        status: HealthStatus::Healthy,
        message: "Service is running",
        timestamp: OffsetDateTime::now_utc(),
    };

    ([(header::CACHE_CONTROL, "no-store")], Json(body))
}

/// List all items in creation order.
#[utoipa::path(
    get,
    path = "/items",
    tag = ITEMS_TAG,
    responses((status = 200, description = "All items", body = [Item]))
)]
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.registry.list_items().await)
}

/// Fetch one item.
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = ITEMS_TAG,
    params(("id" = u64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "No such item", body = ErrorResponse),
        (status = 422, description = "Malformed id", body = ErrorResponse)
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = id?;
    let item = state.registry.get_item(id).await?;
    Ok(Json(item))
}

/// Create an item.
#[utoipa::path(
    post,
    path = "/items",
    tag = ITEMS_TAG,
    request_body = ItemPayload,
    responses(
        (status = 200, description = "The created item", body = Item),
        (status = 422, description = "Invalid body", body = ErrorResponse)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(payload) = payload?;
    let item = state.registry.create_item(payload).await?;
    Ok(Json(item))
}

/// Replace name, description and price of an item.
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = ITEMS_TAG,
    params(("id" = u64, Path, description = "Item identifier")),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "The updated item", body = Item),
        (status = 404, description = "No such item", body = ErrorResponse),
        (status = 422, description = "Invalid body or id", body = ErrorResponse)
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let item = state.registry.update_item(id, payload).await?;
    Ok(Json(item))
}

/// Delete an item.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = ITEMS_TAG,
    params(("id" = u64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Item removed", body = MessageResponse),
        (status = 404, description = "No such item", body = ErrorResponse),
        (status = 422, description = "Malformed id", body = ErrorResponse)
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    state.registry.delete_item(id).await?;
    Ok(Json(MessageResponse {
        message: "Item deleted successfully",
    }))
}

/// Prometheus text exposition.
pub async fn metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                detail: "metrics recorder not installed".to_string(),
            }),
        )
            .into_response(),
    }
}
