//! Pure rendering: [`ClientState`] in, [`View`] out.
//!
//! The view is a plain description of what the page shows. Its [`Display`]
//! impl (and [`View::to_html`]) serialises it to markup with every
//! user-supplied value escaped.
//!
//! [`Display`]: std::fmt::Display

use std::fmt;

use itemboard_core::markup::escape_html;
use itemboard_core::types::ItemId;

use crate::notice::NoticeKind;
use crate::state::ClientState;

/// Shown in place of images that fail to load.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/400x200?text=Image+unavailable";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub item_count: usize,
    pub form: FormView,
    pub list: ListView,
    pub delete_modal_open: bool,
    pub toast: Option<ToastView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub submit_label: &'static str,
    pub show_cancel: bool,
    pub editing_id: Option<ItemId>,
    pub name: String,
    pub image_url: String,
    pub drive_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    Cards(Vec<CardView>),
}

/// One item card: image, name, two outbound links, edit/delete actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: ItemId,
    pub name: String,
    pub image_url: String,
    pub drive_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub kind: NoticeKind,
    pub message: String,
}

/// Describe the page for the given state.
pub fn render(state: &ClientState) -> View {
    let form = if state.is_editing() {
        FormView {
            title: "Edit item",
            submit_label: "Update item",
            show_cancel: true,
            editing_id: state.editing_id,
            name: state.form.name.clone(),
            image_url: state.form.image_url.clone(),
            drive_url: state.form.drive_url.clone(),
        }
    } else {
        FormView {
            title: "Create new item",
            submit_label: "Save item",
            show_cancel: false,
            editing_id: None,
            name: state.form.name.clone(),
            image_url: state.form.image_url.clone(),
            drive_url: state.form.drive_url.clone(),
        }
    };

    let list = if state.loading {
        ListView::Loading
    } else if state.items.is_empty() {
        ListView::Empty
    } else {
        ListView::Cards(
            state
                .items
                .iter()
                .map(|item| CardView {
                    id: item.id,
                    name: item.name.clone(),
                    image_url: item.image_url.clone(),
                    drive_url: item.drive_url.clone(),
                })
                .collect(),
        )
    };

    View {
        item_count: state.items.len(),
        form,
        list,
        delete_modal_open: state.pending_delete.is_some(),
        toast: state.notice.as_ref().map(|notice| ToastView {
            kind: notice.kind,
            message: notice.message.clone(),
        }),
    }
}

impl View {
    /// Serialise to HTML. All user-supplied text goes through [`escape_html`].
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for View {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(out, "{}", self.form)?;

        writeln!(out, r#"<section class="items">"#)?;
        writeln!(
            out,
            r#"<h2>Items <span id="item-count">{}</span></h2>"#,
            self.item_count
        )?;
        match &self.list {
            ListView::Loading => writeln!(out, r#"<div class="loading">Loading...</div>"#)?,
            ListView::Empty => writeln!(out, r#"<div class="empty-state">No items yet</div>"#)?,
            ListView::Cards(cards) => {
                writeln!(out, r#"<div class="items-grid">"#)?;
                for card in cards {
                    write!(out, "{card}")?;
                }
                writeln!(out, "</div>")?;
            }
        }
        writeln!(out, "</section>")?;

        if self.delete_modal_open {
            writeln!(
                out,
                concat!(
                    r#"<div class="modal show" id="delete-modal">"#,
                    r#"<p>Delete this item? This cannot be undone.</p>"#,
                    r#"<button data-action="confirm-delete">Delete</button>"#,
                    r#"<button data-action="cancel-delete">Cancel</button>"#,
                    "</div>"
                )
            )?;
        }

        if let Some(toast) = &self.toast {
            writeln!(
                out,
                r#"<div class="toast {} show">{}</div>"#,
                toast.kind.as_str(),
                escape_html(&toast.message)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(out, r#"<form id="item-form">"#)?;
        writeln!(out, r#"<h2 id="form-title">{}</h2>"#, self.title)?;
        if let Some(id) = self.editing_id {
            writeln!(out, r#"<input type="hidden" id="item-id" value="{id}">"#)?;
        }
        for (field, value) in [
            ("name", &self.name),
            ("imageUrl", &self.image_url),
            ("driveUrl", &self.drive_url),
        ] {
            writeln!(
                out,
                r#"<input id="{field}" name="{field}" required value="{}">"#,
                escape_html(value)
            )?;
        }
        writeln!(
            out,
            r#"<button type="submit" id="submit-btn">{}</button>"#,
            self.submit_label
        )?;
        if self.show_cancel {
            writeln!(
                out,
                r#"<button type="button" id="cancel-btn" data-action="cancel-edit">Cancel</button>"#
            )?;
        }
        writeln!(out, "</form>")
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = escape_html(&self.name);
        let image_url = escape_html(&self.image_url);
        let drive_url = escape_html(&self.drive_url);
        let id = self.id;

        writeln!(out, r#"<div class="item-card" data-id="{id}">"#)?;
        writeln!(
            out,
            r#"<img src="{image_url}" alt="{name}" class="item-image" data-fallback="{PLACEHOLDER_IMAGE_URL}">"#
        )?;
        writeln!(out, r#"<h3 class="item-name">{name}</h3>"#)?;
        writeln!(
            out,
            r#"<a href="{image_url}" target="_blank" rel="noopener" class="item-link">View image</a>"#
        )?;
        writeln!(
            out,
            r#"<a href="{drive_url}" target="_blank" rel="noopener" class="item-link">Open in Drive</a>"#
        )?;
        writeln!(
            out,
            r#"<button data-action="edit" data-id="{id}">Edit</button>"#
        )?;
        writeln!(
            out,
            r#"<button data-action="delete" data-id="{id}">Delete</button>"#
        )?;
        writeln!(out, "</div>")
    }
}
