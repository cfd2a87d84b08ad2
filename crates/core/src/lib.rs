//! Domain layer for the grocery inventory.
//!
//! This crate contains **pure domain** types and validation rules
//! (no storage or HTTP concerns).

pub mod error;
pub mod item;

pub use error::{DomainError, DomainResult};
pub use item::{DEFAULT_CATEGORY, Item, ItemDraft};
