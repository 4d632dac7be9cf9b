//! Smart Farm Advisory Platform - Backend Server
//!
//! Serves weather-aware field advisories, nutrient deficit predictions, and
//! population-level deficit analytics for farmers.

use anyhow::Context;
use axum::{routing::get, Router};
use shared::AdvisoryEngine;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::{AssistantClient, PredictorClient, WeatherClient};
use services::{new_conversation_store, ConversationStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub engine: Arc<AdvisoryEngine>,
    pub weather: WeatherClient,
    pub predictor: PredictorClient,
    pub assistant: AssistantClient,
    pub conversations: ConversationStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sfa_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Smart Farm Advisory Server");
    tracing::info!("Environment: {}", config.environment);

    // Threshold tables are validated up front; a malformed table is a startup
    // failure, not a per-request error.
    let engine = AdvisoryEngine::new().context("building advisory engine")?;

    let weather = WeatherClient::new(
        config.weather.api_endpoint.clone(),
        config.weather.api_key.clone(),
    );
    let predictor = PredictorClient::new(
        config.predictor.endpoint.clone(),
        config.predictor.api_key.clone(),
    );
    let assistant = AssistantClient::new(
        config.assistant.endpoint.clone(),
        config.assistant.api_key.clone(),
        config.assistant.model.clone(),
    );

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        engine: Arc::new(engine),
        weather,
        predictor,
        assistant,
        conversations: new_conversation_store(),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Smart Farm Advisory Platform API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
