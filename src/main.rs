use companion::{AppState, build_router, load_config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    tracing::info!("Loaded configuration:\n{}", config);

    if !config.ai.has_api_key() {
        tracing::warn!("OPENAI_API_KEY is not set; chat requests will be refused until it is");
    }

    let address = config.server.bind_address();
    let app = build_router(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, "Companion backend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
