//! Route definitions for the Smart Farm Advisory Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Weather advisory
        .route("/weather/:city", get(handlers::get_weather_advisory))
        // Nutrient predictions
        .nest("/predictions", prediction_routes())
        // Deficit analytics
        .route("/analytics/deficits", post(handlers::analyze_deficits))
        // Advisory chat
        .nest("/chat", chat_routes())
        // Marketplace catalog
        .route("/marketplace/products", get(handlers::list_products))
        // Simulated satellite telemetry
        .route("/satellite/telemetry", get(handlers::get_field_telemetry))
}

/// Nutrient prediction routes
fn prediction_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_prediction))
        .route("/batch", post(handlers::create_batch_prediction))
}

/// Advisory chat routes
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::chat))
        .route("/suggestions", get(handlers::chat_suggestions))
}
