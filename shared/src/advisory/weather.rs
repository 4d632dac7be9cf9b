//! Weather advisory builder
//!
//! Applies three independent band classifiers (temperature, humidity,
//! rainfall) to one observation and assembles the advice strings and derived
//! directives. Boundary behavior follows the reference tables exactly: the
//! stated upper boundary of each band is inclusive, the next band opens
//! exclusive, so 15 °C is still "cool" and 16 °C "ideal" while values in
//! between no longer fall through to the extreme tier.

use crate::models::{
    HumidityBand, RainfallBand, TemperatureBand, WeatherAdvisory, WeatherObservation,
};

use super::bands::{Band, BandTable, Edge};
use super::AdvisoryError;

pub(super) fn temperature_table() -> Result<BandTable<TemperatureBand>, AdvisoryError> {
    BandTable::new(vec![
        Band::new(Edge::Unbounded, Edge::Excluded(10.0), TemperatureBand::VeryCold),
        Band::new(Edge::Included(10.0), Edge::Included(15.0), TemperatureBand::Cool),
        Band::new(Edge::Excluded(15.0), Edge::Included(30.0), TemperatureBand::Ideal),
        Band::new(Edge::Excluded(30.0), Edge::Included(35.0), TemperatureBand::Hot),
        Band::new(Edge::Excluded(35.0), Edge::Unbounded, TemperatureBand::ExtremeHeat),
    ])
}

pub(super) fn humidity_table() -> Result<BandTable<HumidityBand>, AdvisoryError> {
    BandTable::new(vec![
        Band::new(Edge::Unbounded, Edge::Excluded(30.0), HumidityBand::VeryDry),
        Band::new(Edge::Included(30.0), Edge::Included(60.0), HumidityBand::Optimal),
        Band::new(Edge::Excluded(60.0), Edge::Included(80.0), HumidityBand::High),
        Band::new(Edge::Excluded(80.0), Edge::Unbounded, HumidityBand::VeryHigh),
    ])
}

pub(super) fn rainfall_table() -> Result<BandTable<RainfallBand>, AdvisoryError> {
    BandTable::new(vec![
        Band::new(Edge::Unbounded, Edge::Excluded(1.0), RainfallBand::NoRain),
        Band::new(Edge::Included(1.0), Edge::Included(10.0), RainfallBand::LightModerate),
        Band::new(Edge::Excluded(10.0), Edge::Unbounded, RainfallBand::Heavy),
    ])
}

fn temperature_texts(band: TemperatureBand) -> (&'static str, &'static str) {
    match band {
        TemperatureBand::VeryCold => (
            "Very cold conditions. Protect crops from frost. Avoid fertilizing.",
            "Not recommended - too cold",
        ),
        TemperatureBand::Cool => (
            "Cool weather. Monitor for cold stress in sensitive crops.",
            "Use with caution - apply during warmer hours",
        ),
        TemperatureBand::Ideal => (
            "Ideal temperature range for most crops and fertilizer application.",
            "Excellent conditions for fertilizing",
        ),
        TemperatureBand::Hot => (
            "Hot conditions. Ensure adequate irrigation.",
            "Apply early morning or evening only",
        ),
        TemperatureBand::ExtremeHeat => (
            "Extremely hot. Provide shade and extra water for crops.",
            "Avoid fertilizing - risk of plant burn",
        ),
    }
}

fn humidity_texts(band: HumidityBand) -> (&'static str, &'static str) {
    match band {
        HumidityBand::VeryDry => (
            "Very dry air. Increase irrigation frequency.",
            "Increase watering - low humidity detected",
        ),
        HumidityBand::Optimal => (
            "Optimal humidity levels for crop growth.",
            "Normal irrigation schedule",
        ),
        HumidityBand::High => (
            "High humidity. Monitor for fungal diseases.",
            "Reduce watering - high humidity",
        ),
        HumidityBand::VeryHigh => (
            "Very high humidity. Risk of fungal infections.",
            "Minimal watering - very high humidity",
        ),
    }
}

fn rainfall_texts(band: RainfallBand) -> (&'static str, &'static str) {
    match band {
        RainfallBand::Heavy => (
            "Heavy rain detected. Ensure good drainage.",
            "Check drainage systems, avoid field operations",
        ),
        RainfallBand::LightModerate => (
            "Light to moderate rain. Good for crops.",
            "Good natural irrigation, monitor soil moisture",
        ),
        RainfallBand::NoRain => (
            "No recent rainfall detected.",
            "Monitor irrigation needs closely",
        ),
    }
}

/// Title-case a weather condition description ("scattered clouds" ->
/// "Scattered Clouds")
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(super) fn build_advisory(
    temperature: &BandTable<TemperatureBand>,
    humidity: &BandTable<HumidityBand>,
    rainfall: &BandTable<RainfallBand>,
    observation: &WeatherObservation,
) -> Result<WeatherAdvisory, AdvisoryError> {
    let temperature_band = *temperature.classify(observation.temperature_celsius)?;
    let humidity_band = *humidity.classify(observation.humidity_percent)?;
    let rainfall_band = *rainfall.classify(observation.rainfall_1h_mm)?;

    let (temperature_advice, fertilizer_timing) = temperature_texts(temperature_band);
    let (humidity_advice, irrigation_advice) = humidity_texts(humidity_band);
    let (rainfall_advice, crop_care) = rainfall_texts(rainfall_band);

    Ok(WeatherAdvisory {
        general_condition: title_case(&observation.condition),
        temperature_band,
        temperature_advice: temperature_advice.to_string(),
        humidity_band,
        humidity_advice: humidity_advice.to_string(),
        rainfall_band,
        rainfall_advice: rainfall_advice.to_string(),
        fertilizer_timing: fertilizer_timing.to_string(),
        irrigation_advice: irrigation_advice.to_string(),
        crop_care: crop_care.to_string(),
    })
}
