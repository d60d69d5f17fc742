/// Item identifiers are UUIDv7, generated by the persistence layer.
pub type ItemId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
