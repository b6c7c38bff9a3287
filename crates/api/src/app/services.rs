use std::sync::Arc;

use anyhow::Context;
use productstore_infra::{InMemoryProductStore, PostgresProductStore, ProductStore};

use crate::config::{Config, StoreKind};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn ProductStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn ProductStore {
        self.store.as_ref()
    }
}

/// Construct the configured store.
///
/// Postgres connects lazily: schema setup runs in the background and only
/// logs on failure, so the server still starts (and reports store errors per
/// request) while the database is unreachable.
pub async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn ProductStore>> {
    match config.store {
        StoreKind::InMemory => {
            tracing::info!(store = "in_memory", "using in-memory product store");
            Ok(Arc::new(InMemoryProductStore::new()))
        }
        StoreKind::Postgres => {
            let store = PostgresProductStore::connect_lazy(&config.database_url)
                .context("invalid DATABASE_URL")?;

            let schema_store = store.clone();
            tokio::spawn(async move {
                match schema_store.ensure_schema().await {
                    Ok(()) => tracing::info!(store = "postgres", "database connected"),
                    Err(e) => tracing::error!(error = %e, "database setup failed"),
                }
            });

            Ok(Arc::new(store))
        }
    }
}
