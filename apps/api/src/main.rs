mod catalog;
mod config;
mod errors;
mod llm_client;
mod matching;
mod models;
mod profile;
mod resume;
mod routes;
mod session;
mod speech;
mod state;

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Beacon API v{}", env!("CARGO_PKG_VERSION"));

    // Load the job catalog once; it is read-only for the process lifetime
    let catalog = catalog::load_catalog(Path::new(&config.listings_path))?;

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Speech output is optional; disabled unless a command is configured
    let speech = speech::provider_from_config(config.speech_command.as_deref());
    match &config.speech_command {
        Some(command) => info!("Speech output enabled via '{command}'"),
        None => info!("Speech output disabled"),
    }

    // Session registry holds all per-user mutable state
    let sessions = SessionStore::new();

    let state = AppState {
        catalog,
        llm,
        sessions,
        speech,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
