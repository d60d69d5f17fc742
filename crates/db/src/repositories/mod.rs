//! SQL repositories, one per table.

mod item_repo;

pub use item_repo::ItemRepo;
