use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use wingscafe_core::ProductId;
use wingscafe_inventory::SharedInventory;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route(
            "/:id",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .route("/:id/sell", post(sell_product))
}

pub async fn create_product(
    Extension(inventory): Extension<Arc<SharedInventory>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    match inventory.add(body.into_draft()) {
        Some(id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": id })),
        )
            .into_response(),
        None => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_unavailable",
            "inventory store unavailable",
        ),
    }
}

pub async fn list_products(
    Extension(inventory): Extension<Arc<SharedInventory>>,
) -> axum::response::Response {
    let items = inventory.snapshot();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_product(
    Extension(inventory): Extension<Arc<SharedInventory>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match inventory.get(id) {
        Some(product) => (StatusCode::OK, Json(product)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}

pub async fn update_product(
    Extension(inventory): Extension<Arc<SharedInventory>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateProductRequest>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    // Missing ids are a silent no-op at the store level; the response just
    // echoes whether anything matched.
    let matched = inventory.update(id, &body.into_patch());
    if !matched {
        tracing::debug!(%id, "update matched no record");
    }
    (
        StatusCode::OK,
        Json(serde_json::json!({ "id": id, "matched": matched })),
    )
        .into_response()
}

pub async fn delete_product(
    Extension(inventory): Extension<Arc<SharedInventory>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let matched = inventory.delete(id);
    if !matched {
        tracing::debug!(%id, "delete matched no record");
    }
    (
        StatusCode::OK,
        Json(serde_json::json!({ "id": id, "matched": matched })),
    )
        .into_response()
}

pub async fn sell_product(
    Extension(inventory): Extension<Arc<SharedInventory>>,
    Path(id): Path<String>,
    Json(body): Json<dto::SellProductRequest>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let matched = inventory.sell(id, body.quantity);
    if !matched {
        tracing::debug!(%id, "sell matched no record");
    }
    (
        StatusCode::OK,
        Json(serde_json::json!({ "id": id, "matched": matched })),
    )
        .into_response()
}
