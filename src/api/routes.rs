//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::cors::{self, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::ApiDoc;
use super::handlers::{
    create_item, delete_item, get_item, health, list_items, metrics, update_item, welcome,
    AppState,
};
use super::middleware::track_http_metrics;
use crate::config::{Config, CorsOrigins};

/// Optional parts of the HTTP surface.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Mount Swagger UI at `/docs` and the document at `/openapi.json`.
    pub docs: bool,
    /// Origins accepted by the CORS layer.
    pub cors: CorsOrigins,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            docs: true,
            cors: CorsOrigins::Any,
        }
    }
}

impl RouterOptions {
    /// Derive router options from configuration.
    pub fn from_config(config: &Config) -> Result<Self, String> {
        Ok(Self {
            docs: config.enable_docs,
            cors: config.cors_origins()?,
        })
    }
}

/// Create the API router with default options.
pub fn create_router(state: AppState) -> Router {
    create_router_with(state, RouterOptions::default())
}

/// Create the API router.
pub fn create_router_with(state: AppState, options: RouterOptions) -> Router {
    let mut router = Router::new()
        // Service endpoints
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        // Item endpoints
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        );

    if options.docs {
        router = router.merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(middleware::from_fn(track_http_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.cors))
        .with_state(state)
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    match origins {
        CorsOrigins::Any => layer.allow_origin(cors::Any),
        CorsOrigins::List(list) => layer.allow_origin(AllowOrigin::list(list.clone())),
    }
}
