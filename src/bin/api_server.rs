// src/bin/api_server.rs

use shoe_store::infra::config::Config;
use shoe_store::storage;
use shoe_store::transport;
use shoe_store::ShoeService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // --- Store Initialization ---
    tracing::info!("Opening {:?} shoe store...", config.store_backend);
    let store = storage::open_store(&config).await?;
    // The driver connects lazily; report reachability up front but keep serving either way.
    match store.ping().await {
        Ok(()) => tracing::info!("Store ({}) is reachable.", store.backend()),
        Err(e) => tracing::warn!("Store ({}) ping failed at startup: {}", store.backend(), e),
    }

    let app_state = transport::http::AppState {
        shoes: ShoeService::new(store),
    };

    // --- API Server Initialization ---
    let app = transport::http::create_app(app_state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server is running on http://{}", config.bind_addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutdown signal received, draining connections...");
        })
        .await?;

    tracing::info!("Graceful shutdown complete.");
    Ok(())
}
