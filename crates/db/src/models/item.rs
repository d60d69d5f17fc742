//! Row type for the `items` table.

use itemboard_core::item::Item;
use itemboard_core::types::{ItemId, Timestamp};
use sqlx::FromRow;

/// An item row as stored in PostgreSQL.
#[derive(Debug, Clone, FromRow)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub image_url: String,
    pub drive_url: String,
    pub created_at: Timestamp,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image_url: row.image_url,
            drive_url: row.drive_url,
            created_at: row.created_at,
        }
    }
}
