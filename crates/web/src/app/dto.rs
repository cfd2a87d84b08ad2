use serde::Deserialize;

use pantry_core::{DomainResult, ItemDraft};

/// Form fields shared by the add and edit pages.
///
/// Every field arrives as a string and defaults to empty when absent,
/// the way browsers submit partially filled forms; `ItemDraft::parse`
/// owns all validation.
#[derive(Debug, Deserialize)]
pub struct ItemForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: String,
}

impl ItemForm {
    pub fn to_draft(&self) -> DomainResult<ItemDraft> {
        ItemDraft::parse(&self.name, &self.quantity, &self.unit, &self.category)
    }
}
