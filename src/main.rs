use tracing_subscriber::EnvFilter;

use lace_chat::api;
use lace_chat::config::Config;
use lace_chat::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Curated data file: {}", config.data_file.display());
    tracing::info!("Interaction log directory: {}", config.log_dir.display());

    let state = AppState::new(config.clone())?;
    tracing::info!("Loaded {} curated document(s)", state.documents.len());

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
