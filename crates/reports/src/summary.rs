use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wingscafe_inventory::Product;

/// Stock count at or below which a product is flagged for reorder.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Aggregate view over one product snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryReport {
    pub total_products: usize,
    pub total_units: u64,
    pub inventory_value: f64,
    pub low_stock: Vec<Product>,
    pub categories: Vec<CategoryBreakdown>,
    pub generated_at: DateTime<Utc>,
}

/// Per-category rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub products: usize,
    pub units: u64,
    pub value: f64,
}

/// Fold a product snapshot into an [`InventoryReport`].
///
/// Categories are emitted in name order so the output is stable regardless
/// of the snapshot's insertion order.
pub fn summarize(products: &[Product]) -> InventoryReport {
    let total_units = products.iter().map(|p| u64::from(p.quantity)).sum();
    let inventory_value = products
        .iter()
        .map(|p| p.price * f64::from(p.quantity))
        .sum();

    let low_stock = products
        .iter()
        .filter(|p| p.quantity <= LOW_STOCK_THRESHOLD)
        .cloned()
        .collect();

    let mut by_category: BTreeMap<&str, CategoryBreakdown> = BTreeMap::new();
    for product in products {
        let entry = by_category
            .entry(product.category.as_str())
            .or_insert_with(|| CategoryBreakdown {
                category: product.category.clone(),
                products: 0,
                units: 0,
                value: 0.0,
            });
        entry.products += 1;
        entry.units += u64::from(product.quantity);
        entry.value += product.price * f64::from(product.quantity);
    }

    InventoryReport {
        total_products: products.len(),
        total_units,
        inventory_value,
        low_stock,
        categories: by_category.into_values().collect(),
        generated_at: Utc::now(),
    }
}
