//! HTTP error responses.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::error::{RegistryError, ValidationError};

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable reason.
    #[schema(example = "Item not found")]
    pub detail: String,
}

/// Error type returned by handlers.
#[derive(Debug)]
pub struct ApiError(pub RegistryError);

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        ApiError(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError(RegistryError::Validation(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::InvalidBody(rejection.body_text()).into()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::InvalidId(rejection.body_text()).into()
    }
}

impl ApiError {
    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            RegistryError::NotFound { .. } => StatusCode::NOT_FOUND,
            RegistryError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Client-facing message.
    pub fn detail(&self) -> String {
        match &self.0 {
            RegistryError::NotFound { .. } => "Item not found".to_string(),
            RegistryError::Validation(err) => err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(status = status.as_u16(), error = %self.0, "Request rejected");

        let body = ErrorResponse {
            detail: self.detail(),
        };
        (status, Json(body)).into_response()
    }
}
