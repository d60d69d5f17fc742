//! Sync controller: turns user actions into API calls and patches the mirror.
//!
//! Every operation follows the same rule: the mirror is only touched after
//! the server confirms the change. On failure the user gets an error notice
//! and the mirror and form stay exactly as they were.

use std::time::Instant;

use itemboard_core::item::{Item, REQUIRED_FIELDS_MESSAGE};
use itemboard_core::types::ItemId;

use crate::client::{ClientError, ItemsApi};
use crate::notice::Notice;
use crate::state::{ClientState, FormState};
use crate::view::{render, View};

/// Outcome of [`Controller::submit`] when the request never left the client.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    Incomplete(&'static str),

    #[error(transparent)]
    Api(#[from] ClientError),
}

/// Drives a [`ClientState`] against an [`ItemsApi`].
pub struct Controller<A> {
    api: A,
    state: ClientState,
}

impl<A: ItemsApi> Controller<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ClientState::default(),
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// Form fields, for wiring up user input.
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.state.form
    }

    pub fn view(&self) -> View {
        render(&self.state)
    }

    /// The API this controller talks to.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the full list and replace the mirror.
    ///
    /// Callers that need to render while the request is in flight use
    /// [`begin_load`](Self::begin_load) and [`finish_load`](Self::finish_load)
    /// around their own call to [`ItemsApi::list`] instead.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        self.begin_load();
        let result = self.api.list().await;
        self.finish_load(result)
    }

    /// Mark a list fetch as in flight. The view shows the loading state until
    /// [`finish_load`](Self::finish_load) is called.
    pub fn begin_load(&mut self) {
        self.state.loading = true;
    }

    /// Apply the outcome of a list fetch started with [`begin_load`](Self::begin_load).
    pub fn finish_load(&mut self, result: Result<Vec<Item>, ClientError>) -> Result<(), ClientError> {
        self.state.loading = false;

        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Loaded items");
                self.state.replace_all(items);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load items");
                self.notify_error("Error loading items");
                Err(err)
            }
        }
    }

    /// Create or update from the current form, depending on the editing id.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        if self.state.form.has_blank_field() {
            self.notify_error(REQUIRED_FIELDS_MESSAGE);
            return Err(SubmitError::Incomplete(REQUIRED_FIELDS_MESSAGE));
        }
        let input = self.state.form.to_input();

        match self.state.editing_id {
            Some(id) => match self.api.update(id, &input).await {
                Ok(item) => {
                    if !self.state.replace(item) {
                        tracing::debug!(item_id = %id, "Updated item is no longer mirrored");
                    }
                    self.state.reset_form();
                    self.notify_success("Item updated successfully");
                    Ok(())
                }
                Err(err) => {
                    tracing::warn!(item_id = %id, error = %err, "Failed to update item");
                    self.notify_error(format!("Error updating item: {}", err.user_message()));
                    Err(err.into())
                }
            },
            None => match self.api.create(&input).await {
                Ok(item) => {
                    self.state.prepend(item);
                    self.state.reset_form();
                    self.notify_success("Item created successfully");
                    Ok(())
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to create item");
                    self.notify_error(format!("Error creating item: {}", err.user_message()));
                    Err(err.into())
                }
            },
        }
    }

    /// Delete an item and drop it from the mirror.
    pub async fn remove(&mut self, id: ItemId) -> Result<(), ClientError> {
        match self.api.delete(id).await {
            Ok(_) => {
                self.state.remove(id);
                if self.state.editing_id == Some(id) {
                    self.state.reset_form();
                }
                self.notify_success("Item deleted successfully");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(item_id = %id, error = %err, "Failed to delete item");
                self.notify_error(format!("Error deleting item: {}", err.user_message()));
                Err(err)
            }
        }
    }

    /// Switch the form into edit mode for `id`. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: ItemId) {
        let Some(item) = self.state.find(id) else {
            return;
        };
        let form = FormState::from_item(item);
        self.state.form = form;
        self.state.editing_id = Some(id);
    }

    /// Leave edit mode and clear the form.
    pub fn cancel_edit(&mut self) {
        self.state.reset_form();
    }

    /// Open the delete confirmation for `id`.
    pub fn request_delete(&mut self, id: ItemId) {
        self.state.pending_delete = Some(id);
    }

    /// Close the confirmation without side effects.
    pub fn cancel_delete(&mut self) {
        self.state.pending_delete = None;
    }

    /// Close the confirmation and delete the pending target, if any.
    pub async fn confirm_delete(&mut self) -> Result<(), ClientError> {
        match self.state.pending_delete.take() {
            Some(id) => self.remove(id).await,
            None => Ok(()),
        }
    }

    /// Clear the notice once its display time has passed.
    pub fn dismiss_expired(&mut self, now: Instant) {
        if self
            .state
            .notice
            .as_ref()
            .is_some_and(|notice| notice.is_expired(now))
        {
            self.state.notice = None;
        }
    }

    fn notify_success(&mut self, message: impl Into<String>) {
        self.state.notice = Some(Notice::success(message, Instant::now()));
    }

    fn notify_error(&mut self, message: impl Into<String>) {
        self.state.notice = Some(Notice::error(message, Instant::now()));
    }
}
