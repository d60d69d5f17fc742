//! Client-side state: the item mirror plus form and modal state.
//!
//! The mirror is a non-authoritative copy of the server's list. It is reset
//! wholesale on load and patched in place after each successful mutation.

use itemboard_core::item::{Item, ItemInput};
use itemboard_core::types::ItemId;

use crate::notice::Notice;

/// Values currently typed into the create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub image_url: String,
    pub drive_url: String,
}

impl FormState {
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            image_url: item.image_url.clone(),
            drive_url: item.drive_url.clone(),
        }
    }

    /// Trimmed request body for create or update.
    pub fn to_input(&self) -> ItemInput {
        ItemInput::new(
            self.name.trim(),
            self.image_url.trim(),
            self.drive_url.trim(),
        )
    }

    /// True when any field is blank after trimming.
    pub fn has_blank_field(&self) -> bool {
        [&self.name, &self.image_url, &self.drive_url]
            .iter()
            .any(|value| value.trim().is_empty())
    }
}

/// Everything the UI renders from.
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    /// Local mirror of the server's items, newest first.
    pub items: Vec<Item>,
    /// `Some` while the form edits an existing item, `None` in create mode.
    pub editing_id: Option<ItemId>,
    pub form: FormState,
    /// Item awaiting delete confirmation.
    pub pending_delete: Option<ItemId>,
    pub loading: bool,
    pub notice: Option<Notice>,
}

impl ClientState {
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Replace the whole mirror with a fresh server listing.
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Add a newly created item at the front.
    pub fn prepend(&mut self, item: Item) {
        self.items.insert(0, item);
    }

    /// Swap in an updated copy of an item, keeping its position.
    ///
    /// Returns `false` if the mirror no longer holds that id.
    pub fn replace(&mut self, item: Item) -> bool {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Drop an item from the mirror. Returns `true` if it was present.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Back to create mode with an empty form.
    pub fn reset_form(&mut self) {
        self.form = FormState::default();
        self.editing_id = None;
    }
}
