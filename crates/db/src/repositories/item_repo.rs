//! Repository for the `items` table.

use itemboard_core::item::{ItemChanges, NewItem};
use itemboard_core::types::ItemId;
use sqlx::PgPool;

use crate::models::item::ItemRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, image_url, drive_url, created_at";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item under `id`, returning the created row.
    ///
    /// `created_at` is filled in by the column default.
    pub async fn create(pool: &PgPool, id: ItemId, input: &NewItem) -> Result<ItemRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (id, name, image_url, drive_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .bind(input.name())
            .bind(input.image_url())
            .bind(input.drive_url())
            .fetch_one(pool)
            .await
    }

    /// Find an item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: ItemId) -> Result<Option<ItemRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all items, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ItemRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ItemRow>(&query).fetch_all(pool).await
    }

    /// Update an item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: ItemId,
        input: &ItemChanges,
    ) -> Result<Option<ItemRow>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                name = COALESCE($2, name),
                image_url = COALESCE($3, image_url),
                drive_url = COALESCE($4, drive_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .bind(input.name())
            .bind(input.image_url())
            .bind(input.drive_url())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an item, returning the removed row if it existed.
    pub async fn delete(pool: &PgPool, id: ItemId) -> Result<Option<ItemRow>, sqlx::Error> {
        let query = format!("DELETE FROM items WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
