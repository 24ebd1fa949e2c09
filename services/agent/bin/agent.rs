//! Main Entrypoint for the Proctor Agent Service
//!
//! This binary is responsible for:
//! 1. Loading configuration from the environment.
//! 2. Initializing logging.
//! 3. Constructing the reply-model client and the problem catalog.
//! 4. Constructing the Axum router and applying middleware.
//! 5. Starting the web server and handling graceful shutdown.

use anyhow::Context;
use async_openai::config::OpenAIConfig;
use proctor_agent::{
    config::{Config, ReplyProvider},
    router::create_router,
    state::AppState,
};
use proctor_core::{
    problem::ProblemCatalog,
    reply::{OpenAICompatibleModel, ReplyModel},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Listens for the `Ctrl+C` signal to gracefully shut down the server.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Received shutdown signal. Shutting down gracefully...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- 1. Load Configuration ---
    let config = Config::from_env().context("Failed to load configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .init();
    info!("Configuration loaded. Initializing application state...");

    // --- 3. Initialize Shared Services ---
    let reply_model: Arc<dyn ReplyModel> = match &config.provider {
        ReplyProvider::Groq => {
            info!("Using Groq reply provider.");
            let api_key = config.groq_api_key.as_ref().unwrap();
            let openai_config = OpenAIConfig::new()
                .with_api_key(api_key)
                .with_api_base(GROQ_API_BASE);
            Arc::new(OpenAICompatibleModel::new(
                openai_config,
                config.chat_model.clone(),
            ))
        }
        ReplyProvider::OpenAI => {
            info!("Using OpenAI reply provider.");
            let api_key = config.openai_api_key.as_ref().unwrap();
            let openai_config = OpenAIConfig::new()
                .with_api_key(api_key)
                .with_api_base(OPENAI_API_BASE);
            Arc::new(OpenAICompatibleModel::new(
                openai_config,
                config.chat_model.clone(),
            ))
        }
    };

    let app_state = Arc::new(AppState {
        catalog: Arc::new(ProblemCatalog::builtin()),
        reply_model,
        config: Arc::new(config.clone()),
    });

    // --- 4. Create Router and Apply Middleware ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(app_state).layer(cors);

    // --- 5. Start Server ---
    info!(
        provider = ?config.provider,
        model = %config.chat_model,
        bind_address = %config.bind_address,
        "Service configured. Starting server..."
    );
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server has shut down.");
    Ok(())
}
