use async_trait::async_trait;
use itemboard_core::item::{Item, ItemChanges, NewItem};
use itemboard_core::types::ItemId;

use super::{ItemStore, StoreError};
use crate::repositories::ItemRepo;
use crate::DbPool;

/// [`ItemStore`] backed by the PostgreSQL `items` table.
#[derive(Clone)]
pub struct PgItemStore {
    pool: DbPool,
}

impl PgItemStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn create(&self, input: &NewItem) -> Result<Item, StoreError> {
        let row = ItemRepo::create(&self.pool, ItemId::now_v7(), input).await?;
        tracing::debug!(item_id = %row.id, "Inserted item");
        Ok(row.into())
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let row = ItemRepo::find_by_id(&self.pool, id).await?;
        Ok(row.map(Item::from))
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let rows = ItemRepo::list(&self.pool).await?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn update(
        &self,
        id: ItemId,
        changes: &ItemChanges,
    ) -> Result<Option<Item>, StoreError> {
        let row = ItemRepo::update(&self.pool, id, changes).await?;
        Ok(row.map(Item::from))
    }

    async fn delete(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let row = ItemRepo::delete(&self.pool, id).await?;
        if row.is_some() {
            tracing::debug!(item_id = %id, "Deleted item");
        }
        Ok(row.map(Item::from))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
