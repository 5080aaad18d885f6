use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use event_planner::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use event_planner::shared::infrastructure::security::password::PasswordHasher;
use event_planner::shared::infrastructure::security::token::TokenService;
use event_planner::shell::config::Config;
use event_planner::shell::http::router;
use event_planner::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("event_planner=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let store = match &config.data_file {
        Some(path) => InMemoryDocumentStore::open(path.clone()).await?,
        None => InMemoryDocumentStore::new(),
    };
    let state = AppState::new(
        Arc::new(store),
        TokenService::new(&config.jwt_secret),
        PasswordHasher::default(),
    );

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("event planner API listening on http://{}/api", addr);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "could not listen for the shutdown signal");
    }
    tracing::info!("shutting down");
}
