//! SQLite persistence for the grocery inventory.
//!
//! A thin layer over `sqlx`: a single `items` table, opened from a file
//! path (created on demand) or in memory for tests. All queries go through
//! [`ItemStore`]; callers never see SQL or rows.

pub mod error;
pub mod item_store;

pub use error::{StoreError, StoreResult};
pub use item_store::ItemStore;
