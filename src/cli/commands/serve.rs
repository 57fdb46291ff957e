use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::config::{initialize_app_state, AppConfig};
use crate::router::create_router;

/// Loads the dataset and serves the dashboard API until shutdown.
pub async fn serve(config: AppConfig) -> Result<()> {
    debug!(?config, "Starting serve command");

    let state = initialize_app_state(&config)
        .await
        .context("Failed to initialize application state")?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind to address {}", config.bind_address))?;

    info!("Superstore API server running on http://{}", config.bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", config.bind_address);

    axum::serve(listener, app).await.context("Server error")?;

    info!("Server shutdown gracefully");
    Ok(())
}
