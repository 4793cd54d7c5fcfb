//! Router assembly.

use std::sync::Arc;

use axum::{extract::Extension, middleware as axum_middleware, Router};
use tower::ServiceBuilder;

use wingscafe_inventory::SharedInventory;

use crate::middleware::request_log;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full application router over a shared inventory handle.
pub fn build_app(inventory: Arc<SharedInventory>) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(axum_middleware::from_fn(request_log))
            .layer(Extension(inventory)),
    )
}
