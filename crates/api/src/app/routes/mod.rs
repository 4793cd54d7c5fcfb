use axum::{routing::get, Router};

pub mod customers;
pub mod products;
pub mod reports;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/products", products::router())
        .nest("/customers", customers::router())
        .nest("/reports", reports::router())
}
