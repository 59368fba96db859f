use tracing_subscriber::EnvFilter;

use vc_finder::api;
use vc_finder::config::Config;
use vc_finder::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Data directory: {}", config.data_dir.display());
    tracing::info!(
        "Catalog: {} (timeout {}s)",
        config.catalog,
        config.fetch_timeout().as_secs()
    );

    let state = AppState::new(config.clone())?;
    state.warm_vocabulary().await;

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
