//! Lana Gateway entry point.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use lana_gateway::adapters::ai::{GroqConfig, GroqProvider};
use lana_gateway::adapters::http::{router, GatewayState};
use lana_gateway::adapters::storage::FileHistoryStore;
use lana_gateway::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let groq = GroqConfig::new(config.upstream.api_keys_list())
        .with_model(config.upstream.groq_model.clone())
        .with_base_url(config.upstream.groq_base_url.clone())
        .with_timeout(config.upstream.timeout());

    let state = GatewayState::new(
        Arc::new(FileHistoryStore::new(&config.storage.history_path)),
        Arc::new(GroqProvider::new(groq)),
        reqwest::Client::new(),
        config.upstream.max_history_turns,
    );

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "gateway listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
