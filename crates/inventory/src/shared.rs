//! Lock-guarded store handle for callers that hold the inventory behind
//! `Arc` (the HTTP layer).

use std::sync::RwLock;

use wingscafe_core::ProductId;

use crate::product::{Product, ProductDraft, ProductPatch};
use crate::store::Inventory;

/// Thread-safe wrapper around [`Inventory`].
///
/// Reads degrade to empty and writes to no-ops if the lock is poisoned; the
/// store itself never panics, so in practice the lock stays healthy.
#[derive(Debug)]
pub struct SharedInventory {
    inner: RwLock<Inventory>,
}

impl SharedInventory {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inner: RwLock::new(inventory),
        }
    }

    /// Handle over the built-in two-item seed.
    pub fn seeded() -> Self {
        Self::new(Inventory::seeded())
    }

    pub fn snapshot(&self) -> Vec<Product> {
        match self.inner.read() {
            Ok(inv) => inv.products().to_vec(),
            Err(_) => Vec::new(),
        }
    }

    pub fn get(&self, id: ProductId) -> Option<Product> {
        let inv = self.inner.read().ok()?;
        inv.get(id).cloned()
    }

    pub fn add(&self, draft: ProductDraft) -> Option<ProductId> {
        let mut inv = self.inner.write().ok()?;
        Some(inv.add(draft))
    }

    pub fn update(&self, id: ProductId, patch: &ProductPatch) -> bool {
        match self.inner.write() {
            Ok(mut inv) => inv.update(id, patch),
            Err(_) => false,
        }
    }

    pub fn delete(&self, id: ProductId) -> bool {
        match self.inner.write() {
            Ok(mut inv) => inv.delete(id),
            Err(_) => false,
        }
    }

    pub fn sell(&self, id: ProductId, current_quantity: u32) -> bool {
        match self.inner.write() {
            Ok(mut inv) => inv.sell(id, current_quantity),
            Err(_) => false,
        }
    }

    pub fn replace_all(&self, products: Vec<Product>) {
        if let Ok(mut inv) = self.inner.write() {
            inv.replace_all(products);
        }
    }
}

impl Default for SharedInventory {
    fn default() -> Self {
        Self::new(Inventory::new())
    }
}
