//! Customer directory module.
//!
//! A read-only mock data set: there is no customer mutation surface, the
//! directory exists so the customer view has something to show.

pub mod customer;

pub use customer::{directory, find, Customer, CustomerId};
