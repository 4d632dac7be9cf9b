//! HTTP handlers for weather advisory endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::services::weather::{WeatherReport, WeatherService};
use crate::AppState;

/// Get current weather and field advisory for a city
pub async fn get_weather_advisory(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> AppResult<Json<WeatherReport>> {
    let service = WeatherService::new(state.weather.clone(), state.engine.clone());
    let report = service.advisory_for_city(&city).await?;
    Ok(Json(report))
}
