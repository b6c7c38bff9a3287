use anyhow::Context;

use productstore_api::{app, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    productstore_observability::init();

    let config = Config::from_env();
    let store = app::services::build_store(&config).await?;
    let app = app::build_app(store);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Server running on port {}", config.port);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
