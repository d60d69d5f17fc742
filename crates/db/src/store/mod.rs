//! The persistence contract for items.
//!
//! Not-found is signalled as `Ok(None)`; callers decide how to report it.
//! Inputs arrive already validated ([`NewItem`], [`ItemChanges`]), so every
//! implementation persists trimmed, non-blank values only.

use std::sync::Arc;

use async_trait::async_trait;
use itemboard_core::item::{Item, ItemChanges, NewItem};
use itemboard_core::types::ItemId;

mod memory;
mod postgres;

pub use memory::MemoryItemStore;
pub use postgres::PgItemStore;

/// Errors raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The backend cannot serve requests right now.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Storage operations for items.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persist a new item, assigning its `id` and `created_at`.
    async fn create(&self, input: &NewItem) -> Result<Item, StoreError>;

    /// Look up a single item.
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError>;

    /// All items, newest first.
    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    /// Apply `changes` to an existing item. `id` and `created_at` never change.
    async fn update(&self, id: ItemId, changes: &ItemChanges)
        -> Result<Option<Item>, StoreError>;

    /// Hard-delete an item, returning it if it existed.
    async fn delete(&self, id: ItemId) -> Result<Option<Item>, StoreError>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// Shared handle to whichever store the server was started with.
pub type DynItemStore = Arc<dyn ItemStore>;
