//! Browser-side logic for itemboard, kept free of any DOM.
//!
//! [`controller::Controller`] owns an explicit [`state::ClientState`] (the
//! item mirror, the editing id, the form and the pending delete) and keeps it
//! in sync with the REST API through an [`client::ItemsApi`].
//! [`view::render`] turns that state into a [`view::View`] description that
//! can be diffed, asserted on, or serialised to escaped HTML.

pub mod client;
pub mod controller;
pub mod notice;
pub mod state;
pub mod view;
