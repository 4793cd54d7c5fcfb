//! The in-memory inventory store and its four mutation operations.

use wingscafe_core::ProductId;

use crate::product::{Product, ProductDraft, ProductPatch};
use crate::seed::seed_products;

/// Authoritative in-process product collection.
///
/// All four mutations are total over the current collection: an operation
/// referencing a non-existent id leaves the collection unchanged and raises
/// no error. Insertion order carries no meaning; consumers may re-sort
/// freely for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store initialized with the built-in two-item seed.
    pub fn seeded() -> Self {
        Self::from_products(seed_products())
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Append a new product under a freshly assigned id.
    ///
    /// Ids are `max(existing) + 1`, or 1 on an empty collection, which keeps
    /// them pairwise distinct even after deletions.
    pub fn add(&mut self, draft: ProductDraft) -> ProductId {
        let id = self.next_id();
        self.products.push(draft.into_product(id));
        id
    }

    /// Merge a partial field set into the record at `id`.
    ///
    /// Returns whether a record matched; no match is a silent no-op.
    pub fn update(&mut self, id: ProductId, patch: &ProductPatch) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.apply_patch(patch);
                true
            }
            None => false,
        }
    }

    /// Remove the record at `id`.
    ///
    /// Returns whether a record matched; no match is a silent no-op.
    pub fn delete(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    /// Record the sale of one unit.
    ///
    /// A composition of the two primitives above: with more than one unit on
    /// hand the stock is decremented, otherwise the product is removed
    /// entirely. `current_quantity` is supplied by the caller rather than
    /// read from the store, so a stale value produces a stale result.
    pub fn sell(&mut self, id: ProductId, current_quantity: u32) -> bool {
        if current_quantity > 1 {
            self.update(id, &ProductPatch::quantity(current_quantity - 1))
        } else {
            self.delete(id)
        }
    }

    /// Replace the whole collection (initial-fetch path).
    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn next_id(&self) -> ProductId {
        self.products
            .iter()
            .map(|p| p.id)
            .max()
            .map(|max| max.next())
            .unwrap_or(ProductId::FIRST)
    }
}
