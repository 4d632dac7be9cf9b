//! Farming assistant text-generation client
//!
//! Thin client over a prompt-in/text-out generation service. Conversation
//! context is assembled by the caller; this client only carries a prompt
//! across the wire and reports failures as `AssistantUnavailable`.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Client for the text generation service
#[derive(Clone)]
pub struct AssistantClient {
    endpoint: String,
    api_key: String,
    model: String,
    http_client: Client,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    text: String,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

impl AssistantClient {
    /// Create a new AssistantClient
    pub fn new(endpoint: String, api_key: String, model: String) -> Self {
        Self {
            endpoint,
            api_key,
            model,
            http_client: Client::new(),
        }
    }

    /// Generate a reply for an assembled prompt
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/generate", self.endpoint);

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
            })
            .send()
            .await
            .map_err(|e| AppError::AssistantUnavailable(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::AssistantUnavailable(format!(
                "{} - {}",
                status, body
            )));
        }

        let data: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::AssistantUnavailable(format!("malformed response: {}", e)))?;

        Ok(data.text)
    }

    /// Probe the generation service
    pub async fn is_healthy(&self) -> bool {
        let url = format!("{}/health", self.endpoint);
        match self.http_client.get(&url).send().await {
            Ok(response) if response.status().is_success() => response
                .json::<HealthResponse>()
                .await
                .map(|h| h.status == "ok")
                .unwrap_or(false),
            _ => false,
        }
    }
}
