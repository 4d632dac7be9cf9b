//! Error handling for the Smart Farm Advisory Platform
//!
//! Maps the advisory error taxonomy onto consistent JSON error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::AdvisoryError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Advisory engine errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    // External service errors
    #[error("Weather service unavailable: {0}")]
    WeatherUnavailable(String),

    #[error("Prediction service unavailable: {0}")]
    PredictionUnavailable(String),

    #[error("Assistant service unavailable: {0}")]
    AssistantUnavailable(String),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<AdvisoryError> for AppError {
    fn from(err: AdvisoryError) -> Self {
        match err {
            AdvisoryError::Configuration(msg) => AppError::Configuration(msg),
            AdvisoryError::InsufficientData => {
                AppError::InsufficientData(err.to_string())
            }
            AdvisoryError::Unclassifiable(_) => AppError::ValidationError(err.to_string()),
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    field: None,
                },
            ),
            AppError::InsufficientData(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "INSUFFICIENT_DATA".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::WeatherUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "WEATHER_UNAVAILABLE".to_string(),
                    message: format!(
                        "Weather data is temporarily unavailable: {}",
                        msg
                    ),
                    field: None,
                },
            ),
            AppError::PredictionUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "PREDICTION_UNAVAILABLE".to_string(),
                    message: format!(
                        "Nutrient deficit prediction is temporarily unavailable: {}",
                        msg
                    ),
                    field: None,
                },
            ),
            AppError::AssistantUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "ASSISTANT_UNAVAILABLE".to_string(),
                    message: format!(
                        "The farming assistant is temporarily unavailable: {}",
                        msg
                    ),
                    field: None,
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
