//! Request metrics middleware.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};

use crate::metrics;

/// Label used for requests that matched no route.
const UNMATCHED_ENDPOINT: &str = "unmatched";

/// Record latency and count for every request, labelled by route template.
///
/// The route template (`/items/:id`) is used instead of the raw path so the
/// label set stays bounded.
pub async fn track_http_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ENDPOINT.to_owned());

    let response = next.run(request).await;

    metrics::record_http_request(start, method.as_str(), &endpoint, response.status().as_u16());
    response
}
