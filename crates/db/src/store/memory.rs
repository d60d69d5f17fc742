use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use itemboard_core::item::{Item, ItemChanges, NewItem};
use itemboard_core::types::ItemId;
use tokio::sync::RwLock;

use super::{ItemStore, StoreError};

/// In-process [`ItemStore`] with the same semantics as the PostgreSQL one.
///
/// Items are kept in insertion order; listing sorts newest first and breaks
/// `created_at` ties by insertion order (later first).
#[derive(Debug)]
pub struct MemoryItemStore {
    items: RwLock<Vec<Item>>,
    available: AtomicBool,
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Simulate the backend going away (or coming back).
    ///
    /// While unavailable every operation fails with [`StoreError::Unavailable`].
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("in-memory store is offline".to_string()))
        }
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, input: &NewItem) -> Result<Item, StoreError> {
        self.ensure_available()?;
        let item = Item::new(ItemId::now_v7(), input.clone(), chrono::Utc::now());
        self.items.write().await.push(item.clone());
        tracing::debug!(item_id = %item.id, "Inserted item");
        Ok(item)
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        self.ensure_available()?;
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        self.ensure_available()?;
        let mut items: Vec<Item> = self.items.read().await.iter().rev().cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn update(
        &self,
        id: ItemId,
        changes: &ItemChanges,
    ) -> Result<Option<Item>, StoreError> {
        self.ensure_available()?;
        let mut items = self.items.write().await;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        item.apply(changes);
        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        self.ensure_available()?;
        let mut items = self.items.write().await;
        let removed = items
            .iter()
            .position(|item| item.id == id)
            .map(|index| items.remove(index));
        if removed.is_some() {
            tracing::debug!(item_id = %id, "Deleted item");
        }
        Ok(removed)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.ensure_available()
    }
}
