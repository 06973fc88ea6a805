use std::sync::Arc;

use tracing::{info, warn};

use copilot_backend::config::AppConfig;
use copilot_backend::routes::{cors_layer, create_router};
use copilot_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; /api/chat will fail until it is configured");
    }

    let state = Arc::new(AppState::new(&config)?);
    let cors = cors_layer(&config.allow_origins);

    let app = create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(addr = %config.bind_address, model = %config.model, "copilot backend listening");
    axum::serve(listener, app).await?;

    Ok(())
}
