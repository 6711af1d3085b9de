//! OpenAPI document.

use utoipa::OpenApi;

use super::error::ErrorResponse;
use super::handlers::{
    self, HealthResponse, HealthStatus, MessageResponse, WelcomeResponse,
};
use crate::registry::{Item, ItemPayload};

/// Generated API description served at `/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item Registry",
        description = "In-memory item registry with health checks"
    ),
    paths(
        handlers::welcome,
        handlers::health,
        handlers::list_items,
        handlers::get_item,
        handlers::create_item,
        handlers::update_item,
        handlers::delete_item
    ),
    components(schemas(
        Item,
        ItemPayload,
        ErrorResponse,
        HealthResponse,
        HealthStatus,
        MessageResponse,
        WelcomeResponse
    )),
    tags(
        (name = "items", description = "Item CRUD operations"),
        (name = "system", description = "Service information and liveness")
    )
)]
pub struct ApiDoc;
