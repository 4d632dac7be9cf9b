//! Simulated field telemetry
//!
//! Stands in for a satellite imagery provider during demos. Values are drawn
//! fresh on every request.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

/// One synthetic field observation.
#[derive(Debug, Clone, Serialize)]
pub struct FieldTelemetry {
    pub vegetation_health: f64,
    pub soil_moisture: f64,
    pub temperature_celsius: f64,
    pub area_hectares: f64,
    pub ndvi_index: f64,
    pub crop_stress: &'static str,
    pub irrigation_needed: &'static str,
    pub weather_alert: &'static str,
    pub last_updated: String,
}

/// Satellite telemetry service
#[derive(Clone, Default)]
pub struct SatelliteService;

impl SatelliteService {
    /// Create a new SatelliteService instance
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh synthetic observation.
    pub fn current(&self) -> FieldTelemetry {
        let mut rng = rand::rng();

        let irrigation = ["Yes", "No", "Partial"];
        let alerts = ["None", "High Temperature", "Low Humidity", "Storm Warning"];

        FieldTelemetry {
            vegetation_health: round1(rng.random_range(75.0..=95.0)),
            soil_moisture: round1(rng.random_range(45.0..=85.0)),
            temperature_celsius: round1(rng.random_range(18.0..=35.0)),
            area_hectares: round2(rng.random_range(20.0..=50.0)),
            ndvi_index: round3(rng.random_range(0.3..=0.8)),
            crop_stress: if rng.random::<f64>() > 0.3 {
                "Low"
            } else {
                "Medium"
            },
            irrigation_needed: irrigation.choose(&mut rng).copied().unwrap_or("No"),
            weather_alert: alerts.choose(&mut rng).copied().unwrap_or("None"),
            last_updated: format!("{} hours ago", rng.random_range(1..=6)),
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telemetry_stays_within_ranges() {
        let service = SatelliteService::new();
        for _ in 0..50 {
            let t = service.current();
            assert!((75.0..=95.0).contains(&t.vegetation_health));
            assert!((45.0..=85.0).contains(&t.soil_moisture));
            assert!((18.0..=35.0).contains(&t.temperature_celsius));
            assert!((20.0..=50.0).contains(&t.area_hectares));
            assert!((0.3..=0.8).contains(&t.ndvi_index));
            assert!(matches!(t.crop_stress, "Low" | "Medium"));
        }
    }
}
