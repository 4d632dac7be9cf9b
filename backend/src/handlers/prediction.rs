//! HTTP handlers for nutrient prediction endpoints

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::FieldSample;

use crate::error::AppResult;
use crate::services::prediction::{PredictionResult, PredictionService};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct BatchPredictionRequest {
    pub rows: Vec<FieldSample>,
}

/// Predict deficits and build a recommendation for a single field sample
pub async fn create_prediction(
    State(state): State<AppState>,
    Json(sample): Json<FieldSample>,
) -> AppResult<Json<PredictionResult>> {
    let service = PredictionService::new(state.predictor.clone(), state.engine.clone());
    let result = service.recommend(sample).await?;
    Ok(Json(result))
}

/// Predict deficits and build recommendations for a batch of field samples
pub async fn create_batch_prediction(
    State(state): State<AppState>,
    Json(request): Json<BatchPredictionRequest>,
) -> AppResult<Json<Vec<PredictionResult>>> {
    let service = PredictionService::new(state.predictor.clone(), state.engine.clone());
    let results = service.recommend_batch(request.rows).await?;
    Ok(Json(results))
}
