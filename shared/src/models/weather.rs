//! Weather data models

use serde::{Deserialize, Serialize};

/// A single weather observation for a location
///
/// Produced by the external weather source and consumed once per request.
/// Rainfall is reported for the last hour and defaults to 0 when the source
/// omits it entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    #[serde(default)]
    pub rainfall_1h_mm: f64,
    pub wind_speed_mps: f64,
    pub condition: String,
}

/// Qualitative temperature band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    VeryCold,
    Cool,
    Ideal,
    Hot,
    ExtremeHeat,
}

/// Qualitative humidity band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HumidityBand {
    VeryDry,
    Optimal,
    High,
    VeryHigh,
}

/// Qualitative rainfall band (last hour)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RainfallBand {
    NoRain,
    LightModerate,
    Heavy,
}

impl std::fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemperatureBand::VeryCold => write!(f, "Very Cold"),
            TemperatureBand::Cool => write!(f, "Cool"),
            TemperatureBand::Ideal => write!(f, "Ideal"),
            TemperatureBand::Hot => write!(f, "Hot"),
            TemperatureBand::ExtremeHeat => write!(f, "Extreme Heat"),
        }
    }
}

impl std::fmt::Display for HumidityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HumidityBand::VeryDry => write!(f, "Very Dry"),
            HumidityBand::Optimal => write!(f, "Optimal"),
            HumidityBand::High => write!(f, "High"),
            HumidityBand::VeryHigh => write!(f, "Very High"),
        }
    }
}

impl std::fmt::Display for RainfallBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RainfallBand::NoRain => write!(f, "None"),
            RainfallBand::LightModerate => write!(f, "Light to Moderate"),
            RainfallBand::Heavy => write!(f, "Heavy"),
        }
    }
}

/// Structured farming advice derived from one weather observation
///
/// Constructed fresh per weather query, never mutated, never persisted.
/// The three directives are functions of the corresponding bands:
/// `fertilizer_timing` of the temperature band, `irrigation_advice` of the
/// humidity band, `crop_care` of the rainfall band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAdvisory {
    pub general_condition: String,
    pub temperature_band: TemperatureBand,
    pub temperature_advice: String,
    pub humidity_band: HumidityBand,
    pub humidity_advice: String,
    pub rainfall_band: RainfallBand,
    pub rainfall_advice: String,
    pub fertilizer_timing: String,
    pub irrigation_advice: String,
    pub crop_care: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_serialize_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&TemperatureBand::ExtremeHeat).unwrap(),
            "\"extreme_heat\""
        );
        assert_eq!(
            serde_json::to_string(&RainfallBand::LightModerate).unwrap(),
            "\"light_moderate\""
        );
    }

    #[test]
    fn observation_without_rainfall_deserializes() {
        let observation: WeatherObservation = serde_json::from_str(
            r#"{
                "temperature_celsius": 21.0,
                "humidity_percent": 48.0,
                "wind_speed_mps": 1.2,
                "condition": "mist"
            }"#,
        )
        .unwrap();
        assert_eq!(observation.rainfall_1h_mm, 0.0);
    }
}
