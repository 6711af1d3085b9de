//! Unified error types for the item registry service.

use thiserror::Error;

/// Process-level error type.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Metrics recorder could not be installed.
    #[error("metrics error: {0}")]
    Metrics(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors returned by item registry operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// No item with the given id exists.
    #[error("item {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// Input was rejected before touching the registry.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl RegistryError {
    /// Whether this error is a missing-item error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Malformed or out-of-range input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Name is the empty string.
    #[error("name must not be empty")]
    EmptyName,

    /// Price is NaN or infinite.
    #[error("price must be a finite number, got {0}")]
    NonFinitePrice(f64),

    /// Price is below zero.
    #[error("price must be non-negative, got {0}")]
    NegativePrice(f64),

    /// Request body could not be decoded.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Path id could not be parsed.
    #[error("invalid item id: {0}")]
    InvalidId(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
