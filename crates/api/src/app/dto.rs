use serde::Deserialize;

use wingscafe_inventory::{ProductDraft, ProductPatch};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

impl CreateProductRequest {
    pub fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Partial update body; absent fields leave the record untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
}

impl UpdateProductRequest {
    pub fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Sell body: the caller-observed current stock count.
#[derive(Debug, Deserialize)]
pub struct SellProductRequest {
    pub quantity: u32,
}
