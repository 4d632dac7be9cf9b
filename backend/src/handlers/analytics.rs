//! HTTP handlers for deficit analytics endpoints

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::DeficitRecord;

use crate::error::AppResult;
use crate::services::analytics::{AnalyticsReport, AnalyticsService};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyticsRequest {
    pub records: Vec<DeficitRecord>,
}

/// Summarize a batch of historical deficit records
pub async fn analyze_deficits(
    State(state): State<AppState>,
    Json(request): Json<AnalyticsRequest>,
) -> AppResult<Json<AnalyticsReport>> {
    let service = AnalyticsService::new(state.engine.clone());
    let report = service.summarize(&request.records)?;
    Ok(Json(report))
}
