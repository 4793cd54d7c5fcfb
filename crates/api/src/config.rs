//! Environment configuration for the binary.

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address for the HTTP server.
    pub bind: String,
    /// Optional initial-data endpoint; `None` disables the startup fetch.
    pub seed_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let bind = std::env::var("WINGSCAFE_BIND").unwrap_or_else(|_| {
            tracing::info!("WINGSCAFE_BIND not set; using 0.0.0.0:8080");
            "0.0.0.0:8080".to_string()
        });

        let seed_url = std::env::var("WINGSCAFE_SEED_URL")
            .ok()
            .filter(|url| !url.is_empty());

        Self { bind, seed_url }
    }
}
