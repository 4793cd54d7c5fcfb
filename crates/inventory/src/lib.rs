//! Inventory domain module.
//!
//! This crate contains the product entity and the in-memory inventory store,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). The [`shared`] module adds a lock-guarded handle for callers
//! that need the store behind `Arc`.

pub mod product;
pub mod seed;
pub mod shared;
pub mod store;

pub use product::{Product, ProductDraft, ProductPatch};
pub use seed::seed_products;
pub use shared::SharedInventory;
pub use store::Inventory;
