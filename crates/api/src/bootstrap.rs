//! Optional startup fetch of an initial product list.
//!
//! Fire-and-forget: one `GET`, no retry, no cancellation. Success replaces
//! the store's contents wholesale; any failure keeps whatever the store
//! already holds (the built-in seed) and logs a warning.

use std::sync::Arc;

use wingscafe_inventory::{Product, SharedInventory};

/// Spawn the initial-data fetch against `url`.
pub fn spawn_initial_fetch(inventory: Arc<SharedInventory>, url: String) {
    tokio::spawn(async move {
        match fetch_products(&url).await {
            Ok(products) => {
                tracing::info!(count = products.len(), url, "initial data fetched; replacing seed list");
                inventory.replace_all(products);
            }
            Err(e) => {
                tracing::warn!(error = %e, url, "could not fetch initial data; keeping seed list");
            }
        }
    });
}

async fn fetch_products(url: &str) -> Result<Vec<Product>, reqwest::Error> {
    reqwest::get(url)
        .await?
        .error_for_status()?
        .json::<Vec<Product>>()
        .await
}
