//! In-memory item store.

use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::RegistryError;
use crate::metrics;

use super::item::{Item, ItemPayload};

/// Registry contents guarded by one lock.
#[derive(Debug)]
struct RegistryState {
    /// Items in creation order.
    items: Vec<Item>,
    /// Next id to hand out. Only ever increases.
    next_id: u64,
}

impl Default for RegistryState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl RegistryState {
    fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

/// Process-local item registry.
///
/// Cloning is cheap and every clone shares the same items. All writes are
/// serialized through a single lock that also owns the id counter, so ids are
/// strictly increasing and never reused, even after a delete.
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    state: Arc<RwLock<RegistryState>>,
}

impl ItemRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// All items in creation order.
    pub async fn list_items(&self) -> Vec<Item> {
        self.state.read().await.items.clone()
    }

    /// Look up a single item.
    pub async fn get_item(&self, id: u64) -> Result<Item, RegistryError> {
        let state = self.state.read().await;
        state
            .position(id)
            .map(|idx| state.items[idx].clone())
            .ok_or(RegistryError::NotFound { id })
    }

    /// Validate and store a new item.
    pub async fn create_item(&self, payload: ItemPayload) -> Result<Item, RegistryError> {
        payload.validate()?;

        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let item = Item {
            id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            created_at: OffsetDateTime::now_utc(),
        };
        state.items.push(item.clone());
        let stored = state.items.len();
        drop(state);

        metrics::inc_items_created();
        metrics::set_items_stored(stored);
        info!(id, name = %item.name, price = %item.price, "Item created");

        Ok(item)
    }

    /// Replace name, description and price of an existing item.
    ///
    /// A missing id is reported before the payload is validated.
    pub async fn update_item(&self, id: u64, payload: ItemPayload) -> Result<Item, RegistryError> {
        let mut state = self.state.write().await;
        let idx = state.position(id).ok_or(RegistryError::NotFound { id })?;
        payload.validate()?;

        let item = &mut state.items[idx];
        item.apply(payload);
        let updated = item.clone();
        drop(state);

        metrics::inc_items_updated();
        info!(id, name = %updated.name, price = %updated.price, "Item updated");

        Ok(updated)
    }

    /// Remove an item. Its id is retired for good.
    pub async fn delete_item(&self, id: u64) -> Result<(), RegistryError> {
        let mut state = self.state.write().await;
        let idx = state.position(id).ok_or(RegistryError::NotFound { id })?;
        let removed = state.items.remove(idx);
        let stored = state.items.len();
        drop(state);

        metrics::inc_items_deleted();
        metrics::set_items_stored(stored);
        info!(id, name = %removed.name, "Item deleted");

        Ok(())
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.state.read().await.items.len()
    }

    /// Whether the registry holds no items.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.items.is_empty()
    }
}
