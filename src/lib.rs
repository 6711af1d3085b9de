//! In-memory item registry HTTP service.
//!
//! A small CRUD API over a single resource, meant to run as one or more
//! replicas behind a load balancer. Each replica keeps its own items in
//! process memory; nothing is persisted or shared between replicas.
//!
//! ```text
//! GET    /             welcome banner
//! GET    /health       liveness probe
//! GET    /items        list items
//! POST   /items        create item
//! GET    /items/:id    fetch item
//! PUT    /items/:id    replace item fields
//! DELETE /items/:id    delete item
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`registry`]: Item types, validation and the in-memory store
//! - [`api`]: HTTP routes, handlers and OpenAPI document
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod registry;
pub mod utils;

pub use config::Config;
pub use error::{RegistryError, Result, ServiceError, ValidationError};
pub use registry::{Item, ItemPayload, ItemRegistry};
