//! Item types and input validation.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::error::ValidationError;

/// Stored item.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Item {
    /// Service-assigned identifier, never reused.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Non-negative price.
    pub price: f64,
    /// Creation time (UTC), fixed for the item's lifetime.
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

impl Item {
    /// Replace the mutable fields with those of `payload`.
    ///
    /// `id` and `created_at` are left as they are.
    pub(crate) fn apply(&mut self, payload: ItemPayload) {
        self.name = payload.name;
        self.description = payload.description;
        self.price = payload.price;
    }
}

/// Request body for creating or replacing an item.
///
/// Unknown fields, including a client-supplied `id`, are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemPayload {
    /// Display name.
    #[schema(example = "Laptop")]
    pub name: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Non-negative price.
    #[schema(example = 1299.99)]
    pub price: f64,
}

impl ItemPayload {
    /// Build a payload without a description.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check name and price constraints.
    ///
    /// JSON cannot carry NaN or infinity, so the finiteness check only
    /// matters for payloads built in code.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if !self.price.is_finite() {
            return Err(ValidationError::NonFinitePrice(self.price));
        }

        if self.price < 0.0 {
            return Err(ValidationError::NegativePrice(self.price));
        }

        Ok(())
    }
}
