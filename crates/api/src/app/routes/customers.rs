use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use wingscafe_customers::{self as customers, CustomerId};

use crate::app::errors;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_customers))
        .route("/:id", get(get_customer))
}

pub async fn list_customers() -> axum::response::Response {
    let items = customers::directory();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_customer(Path(id): Path<String>) -> axum::response::Response {
    let id: CustomerId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match customers::find(id) {
        Some(customer) => (StatusCode::OK, Json(customer)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "customer not found"),
    }
}
