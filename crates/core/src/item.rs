//! The inventory item entity and its validation rules.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// Category substituted when the submitted category is blank.
pub const DEFAULT_CATEGORY: &str = "Other";

/// A stored inventory item.
///
/// `id` is assigned by the store on insert and is immutable afterwards;
/// the four data fields are rewritable in place via the update operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: String,
}

/// A validated set of item fields, not yet persisted.
///
/// Produced by [`ItemDraft::parse`], which is the single home of the
/// trim/validate/default sequence so that create and update cannot diverge.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: String,
}

impl ItemDraft {
    /// Validate raw form fields into a draft.
    ///
    /// Rules, in order:
    /// 1. `name` is trimmed and must be non-empty.
    /// 2. `quantity` is trimmed; blank means `0`, anything else must parse
    ///    as a float. Negative and exotic literals are accepted as-is; the
    ///    store applies no range checks.
    /// 3. `unit` is trimmed, no validation.
    /// 4. `category` is trimmed; blank falls back to [`DEFAULT_CATEGORY`].
    ///
    /// The name check runs before the quantity check, so a missing name is
    /// always the reported reason even when the quantity is also invalid.
    pub fn parse(name: &str, quantity: &str, unit: &str, category: &str) -> DomainResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Name is required."));
        }

        let quantity = quantity.trim();
        let quantity = if quantity.is_empty() {
            0.0
        } else {
            quantity
                .parse::<f64>()
                .map_err(|_| DomainError::validation("Quantity must be a number."))?
        };

        let category = category.trim();
        let category = if category.is_empty() {
            DEFAULT_CATEGORY
        } else {
            category
        };

        Ok(Self {
            name: name.to_string(),
            quantity,
            unit: unit.trim().to_string(),
            category: category.to_string(),
        })
    }
}
