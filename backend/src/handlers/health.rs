//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::services::AssistantService;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub assistant: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let service = AssistantService::new(state.assistant.clone(), state.conversations.clone());
    let assistant_status = if service.is_healthy().await {
        "connected".to_string()
    } else {
        "disconnected".to_string()
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        assistant: assistant_status,
    })
}
