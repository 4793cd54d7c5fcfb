use std::sync::Arc;

use anyhow::Context;

use wingscafe_api::{app, bootstrap, config::Config};
use wingscafe_inventory::SharedInventory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wingscafe_observability::init();

    let config = Config::from_env();

    // Seed is always present before any external fetch resolves.
    let inventory = Arc::new(SharedInventory::seeded());

    match config.seed_url.clone() {
        Some(url) => bootstrap::spawn_initial_fetch(inventory.clone(), url),
        None => tracing::info!("WINGSCAFE_SEED_URL not set; serving built-in seed data"),
    }

    let router = app::build_app(inventory);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
