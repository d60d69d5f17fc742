//! Domain types shared by the server and the client.
//!
//! Holds the `Item` entity, write-side validation and the error taxonomy.
//! Nothing in here performs I/O.

pub mod error;
pub mod item;
pub mod markup;
pub mod types;
