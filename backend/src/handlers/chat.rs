//! HTTP handlers for the advisory chat endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::services::AssistantService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

fn default_user_id() -> String {
    "default".to_string()
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<&'static str>,
}

/// Answer a farmer's question through the advisory assistant
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let service = AssistantService::new(state.assistant.clone(), state.conversations.clone());
    let reply = service.chat(&request.user_id, &request.message).await?;
    Ok(Json(ChatResponse { reply }))
}

/// Suggested starter questions for the chat interface
pub async fn chat_suggestions(State(state): State<AppState>) -> Json<SuggestionsResponse> {
    let service = AssistantService::new(state.assistant.clone(), state.conversations.clone());
    Json(SuggestionsResponse {
        suggestions: service.suggestions(),
    })
}
