mod admin;
mod auth;
mod config;
mod documents;
mod errors;
mod locale;
mod models;
mod payments;
mod routes;
mod state;
mod storage;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::AuthClient;
use crate::config::Config;
use crate::payments::poller::PaymentPoller;
use crate::payments::verifier::HttpPaymentVerifier;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::mock::JsonFileStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CraftCV API v{}", env!("CARGO_PKG_VERSION"));

    // Identity provider client
    let auth = AuthClient::new(config.auth_base_url.clone(), config.auth_api_key.clone());
    info!("Auth client initialized");

    // Payment verification poller over the provider's verify endpoint
    let verifier = Arc::new(HttpPaymentVerifier::new(
        config.payment_base_url.clone(),
        config.payment_api_key.clone(),
    ));
    let poller = Arc::new(PaymentPoller::new(verifier));
    info!("Payment poller initialized");

    // Mock document store: JSON files plus an artificial delay
    let store = Arc::new(JsonFileStore::new(
        config.data_dir.clone(),
        Duration::from_millis(config.mock_delay_ms),
    ));
    info!(
        "Document store at {} (simulated latency {}ms)",
        config.data_dir, config.mock_delay_ms
    );

    let state = AppState {
        config: config.clone(),
        auth,
        store,
        poller,
        webhooks: Arc::new(RwLock::new(HashMap::new())),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
