//! The `Item` entity and its write-side validation.
//!
//! An item pairs a display name with an image URL and a storage-link URL.
//! Raw request bodies arrive as [`ItemInput`] (every field optional) and are
//! turned into [`NewItem`] for inserts or [`ItemChanges`] for updates. Both
//! conversions trim whitespace and reject blank values, so a value of either
//! type is always safe to persist.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::{ItemId, Timestamp};

/// Entity name used in not-found errors.
pub const ITEM_ENTITY: &str = "Item";

/// Message returned when a create request is missing a field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";

/// A persisted item as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub image_url: String,
    pub drive_url: String,
    pub created_at: Timestamp,
}

impl Item {
    /// Build a freshly inserted item. `id` and `created_at` are never touched again.
    pub fn new(id: ItemId, fields: NewItem, created_at: Timestamp) -> Self {
        Self {
            id,
            name: fields.name,
            image_url: fields.image_url,
            drive_url: fields.drive_url,
            created_at,
        }
    }

    /// Replace the mutable fields that are present in `changes`.
    pub fn apply(&mut self, changes: &ItemChanges) {
        if let Some(name) = &changes.name {
            self.name.clone_from(name);
        }
        if let Some(image_url) = &changes.image_url {
            self.image_url.clone_from(image_url);
        }
        if let Some(drive_url) = &changes.drive_url {
            self.drive_url.clone_from(drive_url);
        }
    }
}

/// Request body for both create and update.
///
/// Fields are optional at this level so that a missing field can be reported
/// as a validation failure instead of a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_url: Option<String>,
}

impl ItemInput {
    /// Input with all three fields set.
    pub fn new(
        name: impl Into<String>,
        image_url: impl Into<String>,
        drive_url: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            image_url: Some(image_url.into()),
            drive_url: Some(drive_url.into()),
        }
    }
}

/// Validated, trimmed fields for a new item.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewItem {
    #[validate(length(min = 1))]
    name: String,
    #[validate(length(min = 1))]
    image_url: String,
    #[validate(length(min = 1))]
    drive_url: String,
}

impl NewItem {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn drive_url(&self) -> &str {
        &self.drive_url
    }
}

impl TryFrom<ItemInput> for NewItem {
    type Error = CoreError;

    fn try_from(input: ItemInput) -> Result<Self, Self::Error> {
        let (Some(name), Some(image_url), Some(drive_url)) =
            (input.name, input.image_url, input.drive_url)
        else {
            return Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        };

        let fields = Self {
            name: name.trim().to_string(),
            image_url: image_url.trim().to_string(),
            drive_url: drive_url.trim().to_string(),
        };
        fields
            .validate()
            .map_err(|_| CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))?;
        Ok(fields)
    }
}

/// Validated, trimmed replacement values for an existing item.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ItemChanges {
    #[validate(length(min = 1))]
    name: Option<String>,
    #[validate(length(min = 1))]
    image_url: Option<String>,
    #[validate(length(min = 1))]
    drive_url: Option<String>,
}

impl ItemChanges {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn drive_url(&self) -> Option<&str> {
        self.drive_url.as_deref()
    }
}

impl TryFrom<ItemInput> for ItemChanges {
    type Error = CoreError;

    fn try_from(input: ItemInput) -> Result<Self, Self::Error> {
        let trim = |value: Option<String>| value.map(|v| v.trim().to_string());
        let changes = Self {
            name: trim(input.name),
            image_url: trim(input.image_url),
            drive_url: trim(input.drive_url),
        };
        changes
            .validate()
            .map_err(|errors| CoreError::Validation(describe_blank_fields(&errors)))?;
        Ok(changes)
    }
}

/// Parse a path segment into an [`ItemId`].
///
/// A malformed id cannot name a stored item, so it is reported as not found.
pub fn parse_item_id(raw: &str) -> Result<ItemId, CoreError> {
    raw.parse::<ItemId>().map_err(|_| CoreError::NotFound {
        entity: ITEM_ENTITY,
        id: raw.to_string(),
    })
}

/// Not-found error for a well-formed id with no stored item.
pub fn item_not_found(id: ItemId) -> CoreError {
    CoreError::NotFound {
        entity: ITEM_ENTITY,
        id: id.to_string(),
    }
}

fn describe_blank_fields(errors: &ValidationErrors) -> String {
    let mut fields: Vec<&'static str> = errors
        .field_errors()
        .keys()
        .map(|field| match &**field {
            "image_url" => "imageUrl",
            "drive_url" => "driveUrl",
            _ => "name",
        })
        .collect();
    fields.sort_unstable();
    format!("Fields must not be empty: {}", fields.join(", "))
}
