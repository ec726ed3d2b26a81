use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use maps_a2a::{
    config::ServerConfig,
    maps::MapsClient,
    protocol::AgentDescriptor,
    server::{self, AppState, AGENT_CARD_ROUTE, SEND_TASK_ROUTE},
    transport::http::HttpTransport,
};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine, the environment may already be set
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let agent = AgentDescriptor::load(&config.agent_card_path).await;
    match &agent {
        Ok(descriptor) => tracing::info!(
            name = descriptor.name().unwrap_or("<unnamed>"),
            path = %config.agent_card_path.display(),
            "agent card loaded"
        ),
        Err(e) => tracing::error!(error = %e, "agent card could not be loaded"),
    }

    let client = MapsClient::new(HttpTransport::new(config.base_url.clone()), &config.api_key);
    let app = server::router(AppState::new(client, agent));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Maps A2A agent listening on port {}", config.port);
    tracing::info!(
        "Agent card: http://localhost:{}{}",
        config.port,
        AGENT_CARD_ROUTE
    );
    tracing::info!(
        "Task endpoint: http://localhost:{}{}",
        config.port,
        SEND_TASK_ROUTE
    );

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
