//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the item store and map errors via
//! [`AppError`](crate::error::AppError).

pub mod item;
