//! HTTP handlers for simulated satellite telemetry

use axum::Json;

use crate::services::satellite::{FieldTelemetry, SatelliteService};

/// Get the latest simulated field telemetry
pub async fn get_field_telemetry() -> Json<FieldTelemetry> {
    let service = SatelliteService::new();
    Json(service.current())
}
