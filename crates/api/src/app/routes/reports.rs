use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use wingscafe_inventory::SharedInventory;
use wingscafe_reports::summarize;

pub fn router() -> Router {
    Router::new().route("/summary", get(summary))
}

pub async fn summary(
    Extension(inventory): Extension<Arc<SharedInventory>>,
) -> axum::response::Response {
    let report = summarize(&inventory.snapshot());
    (StatusCode::OK, Json(report)).into_response()
}
