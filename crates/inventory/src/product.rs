use serde::{Deserialize, Serialize};

use wingscafe_core::ProductId;

/// Inventory record: the sole entity held by the store.
///
/// `id` is store-assigned and immutable after creation. `quantity` is kept
/// non-negative by construction; the sell path removes the record instead of
/// letting stock go below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    /// Apply a partial update field-by-field.
    ///
    /// `None` fields leave the existing value untouched. The id is not part
    /// of the patch surface and never changes.
    pub fn apply_patch(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
    }
}

/// Fields supplied by the caller when creating a product; the store assigns
/// the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

impl ProductDraft {
    pub(crate) fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Partial field set for `update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
}

impl ProductPatch {
    /// Patch that only changes the stock count (the sell path).
    pub fn quantity(quantity: u32) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }
}
