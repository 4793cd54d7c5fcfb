use std::sync::Arc;

use axum::{routing::get, Json, Router};
use reqwest::StatusCode;
use serde_json::json;

use wingscafe_api::{app, bootstrap};
use wingscafe_inventory::SharedInventory;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        Self::spawn_with(Arc::new(SharedInventory::seeded())).await
    }

    async fn spawn_with(inventory: Arc<SharedInventory>) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let router = app::build_app(inventory);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawn a stub initial-data source serving a fixed JSON array.
async fn spawn_seed_source(products: serde_json::Value) -> (String, tokio::task::JoinHandle<()>) {
    let router = Router::new().route(
        "/api/products",
        get(move || {
            let products = products.clone();
            async move { Json(products) }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind seed source");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{}/api/products", addr), handle)
}

async fn list_products(client: &reqwest::Client, base_url: &str) -> Vec<serde_json::Value> {
    let res = client
        .get(format!("{}/products", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    body["items"].as_array().unwrap().clone()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn seed_list_is_served_before_any_fetch() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let items = list_products(&client, &srv.base_url).await;
    assert_eq!(items.len(), 2);

    let names: Vec<&str> = items.iter().map(|i| i["name"].as_str().unwrap()).collect();
    assert!(names.contains(&"Coffee"));
    assert!(names.contains(&"Sandwich"));
}

#[tokio::test]
async fn product_lifecycle_create_sell_down_remove() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Create: the seed holds ids 1 and 2, so the new record gets 3.
    let res = client
        .post(format!("{}/products", srv.base_url))
        .json(&json!({"name": "Juice", "category": "Beverage", "price": 15, "quantity": 8}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["id"], 3);

    // First sale decrements from the caller-observed quantity.
    let res = client
        .post(format!("{}/products/3/sell", srv.base_url))
        .json(&json!({"quantity": 8}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/products/3", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let product: serde_json::Value = res.json().await.unwrap();
    assert_eq!(product["quantity"], 7);

    // Sell the rest down; the final sale (quantity 1) removes the record.
    for qty in (1..=7).rev() {
        let res = client
            .post(format!("{}/products/3/sell", srv.base_url))
            .json(&json!({"quantity": qty}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = client
        .get(format!("{}/products/3", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // The seed records are untouched.
    let items = list_products(&client, &srv.base_url).await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["quantity"], 10);
    assert_eq!(items[1]["quantity"], 5);
}

#[tokio::test]
async fn partial_update_merges_fields() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .patch(format!("{}/products/1", srv.base_url))
        .json(&json!({"price": 22.5}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["matched"], true);

    let res = client
        .get(format!("{}/products/1", srv.base_url))
        .send()
        .await
        .unwrap();
    let product: serde_json::Value = res.json().await.unwrap();
    assert_eq!(product["price"], 22.5);
    assert_eq!(product["name"], "Coffee");
    assert_eq!(product["quantity"], 10);
}

#[tokio::test]
async fn mutations_with_unknown_id_are_silent_no_ops() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .patch(format!("{}/products/99", srv.base_url))
        .json(&json!({"quantity": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["matched"], false);

    let res = client
        .delete(format!("{}/products/99", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["matched"], false);

    let res = client
        .post(format!("{}/products/99/sell", srv.base_url))
        .json(&json!({"quantity": 5}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Collection is untouched throughout.
    let items = list_products(&client, &srv.base_url).await;
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn unparseable_product_id_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/products/not-a-number", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn customer_directory_list_and_lookup() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/customers", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);

    let id = items[0]["id"].as_str().unwrap();
    let res = client
        .get(format!("{}/customers/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let customer: serde_json::Value = res.json().await.unwrap();
    assert_eq!(customer["name"], items[0]["name"]);

    let unknown = uuid::Uuid::from_u128(0xdead_beef);
    let res = client
        .get(format!("{}/customers/{}", srv.base_url, unknown))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/customers/garbage", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn report_summarizes_the_current_snapshot() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/reports/summary", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let report: serde_json::Value = res.json().await.unwrap();

    assert_eq!(report["total_products"], 2);
    assert_eq!(report["total_units"], 15);
    assert_eq!(report["inventory_value"], 375.0);
    assert_eq!(report["low_stock"].as_array().unwrap().len(), 1);

    let categories: Vec<&str> = report["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["category"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["Beverage", "Food"]);
}

#[tokio::test]
async fn initial_fetch_replaces_seed_wholesale() {
    let (seed_url, _source) = spawn_seed_source(json!([
        {"id": 7, "name": "Muffin", "category": "Food", "price": 12.0, "quantity": 3}
    ]))
    .await;

    let inventory = Arc::new(SharedInventory::seeded());
    let srv = TestServer::spawn_with(inventory.clone()).await;
    let client = reqwest::Client::new();

    bootstrap::spawn_initial_fetch(inventory, seed_url);

    // The fetch is fire-and-forget; poll briefly until it lands.
    for _ in 0..50 {
        let items = list_products(&client, &srv.base_url).await;
        if items.len() == 1 && items[0]["id"] == 7 {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    panic!("initial fetch did not replace the seed list within timeout");
}

#[tokio::test]
async fn failed_initial_fetch_keeps_the_seed() {
    // Grab a port that nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_url = format!("http://{}/api/products", listener.local_addr().unwrap());
    drop(listener);

    let inventory = Arc::new(SharedInventory::seeded());
    let srv = TestServer::spawn_with(inventory.clone()).await;
    let client = reqwest::Client::new();

    bootstrap::spawn_initial_fetch(inventory, dead_url);

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    let items = list_products(&client, &srv.base_url).await;
    assert_eq!(items.len(), 2);
}
