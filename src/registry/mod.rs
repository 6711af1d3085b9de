//! Item registry: the process-local store behind the HTTP API.
//!
//! This module handles:
//! - Item and request payload types
//! - Input validation
//! - Id assignment and in-memory storage

pub mod item;
pub mod store;

pub use item::{Item, ItemPayload};
pub use store::ItemRegistry;
