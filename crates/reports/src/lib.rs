//! Read-only aggregate reporting over a product snapshot.
//!
//! Reports never mutate the inventory; they fold over whatever snapshot the
//! caller hands them.

pub mod summary;

pub use summary::{summarize, CategoryBreakdown, InventoryReport, LOW_STOCK_THRESHOLD};
