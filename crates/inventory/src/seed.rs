//! Built-in seed data.
//!
//! The store always starts from this fixed two-item list; an optional
//! initial-data fetch may later replace it wholesale, and a failed fetch
//! leaves it in place.

use wingscafe_core::ProductId;

use crate::product::Product;

/// The fixed two-item seed list.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Coffee".to_string(),
            category: "Beverage".to_string(),
            price: 20.0,
            quantity: 10,
        },
        Product {
            id: ProductId::new(2),
            name: "Sandwich".to_string(),
            category: "Food".to_string(),
            price: 35.0,
            quantity: 5,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_distinct_and_sequential() {
        let seed = seed_products();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].id, ProductId::new(1));
        assert_eq!(seed[1].id, ProductId::new(2));
    }
}
