//! HTTP API module for item, health, docs and metrics endpoints.

pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use error::{ApiError, ErrorResponse};
pub use handlers::AppState;
pub use routes::{create_router, create_router_with, RouterOptions};
