use std::sync::Arc;

use aperture_api::api::{create_router, AppState};
use aperture_api::config::Config;
use aperture_api::store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aperture_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let store = MemoryStore::from_snapshot_file(&config.snapshot_path)?;
    let state = AppState::new(Arc::new(store));

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
