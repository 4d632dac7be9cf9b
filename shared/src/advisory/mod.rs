//! Agronomic advisory engine
//!
//! The deterministic core of the platform: band-table classification of
//! weather observations, per-channel nutrient recommendations, and
//! population-level deficit summaries. Every component is a pure function
//! over immutable inputs; the engine holds only validated threshold tables
//! and is safe to share across concurrent requests.

use thiserror::Error;

use crate::models::{
    DeficitRecord, FieldRecommendation, FieldSample, HumidityBand, PopulationInsight,
    RainfallBand, Severity, TemperatureBand, WeatherAdvisory, WeatherObservation,
};

pub mod analytics;
pub mod bands;
pub mod nutrient;
pub mod weather;

use bands::BandTable;
use nutrient::{channel_specs, Channel};

pub use nutrient::SUFFICIENCY_CUT_KG_HA;

/// Engine error taxonomy
#[derive(Error, Debug)]
pub enum AdvisoryError {
    /// Broken threshold tables; fatal at startup, never recoverable at
    /// call time
    #[error("advisory configuration error: {0}")]
    Configuration(String),

    /// Empty batch handed to the population summarizer
    #[error("insufficient data: at least one deficit record is required")]
    InsufficientData,

    /// A value no band admits (NaN); inputs are validated at the edge, so
    /// seeing this means a caller skipped validation
    #[error("value {0} does not fall into any band")]
    Unclassifiable(f64),
}

/// Validated advisory engine
///
/// Construction validates every band table and channel ratio; a `Configuration`
/// error here must abort startup.
#[derive(Debug, Clone)]
pub struct AdvisoryEngine {
    temperature: BandTable<TemperatureBand>,
    humidity: BandTable<HumidityBand>,
    rainfall: BandTable<RainfallBand>,
    channels: [Channel; 3],
    severity: BandTable<Severity>,
    recommendations: [BandTable<&'static str>; 3],
}

impl AdvisoryEngine {
    pub fn new() -> Result<Self, AdvisoryError> {
        let [n, p, k] = channel_specs();
        Ok(Self {
            temperature: weather::temperature_table()?,
            humidity: weather::humidity_table()?,
            rainfall: weather::rainfall_table()?,
            channels: [Channel::new(n)?, Channel::new(p)?, Channel::new(k)?],
            severity: analytics::severity_table()?,
            recommendations: analytics::recommendation_tables()?,
        })
    }

    /// Build the full advisory for one weather observation
    pub fn weather_advisory(
        &self,
        observation: &WeatherObservation,
    ) -> Result<WeatherAdvisory, AdvisoryError> {
        weather::build_advisory(&self.temperature, &self.humidity, &self.rainfall, observation)
    }

    /// Per-channel recommendations plus the overall assessment for one
    /// field sample and its predicted deficits
    pub fn recommend(
        &self,
        sample: &FieldSample,
        deficits: &DeficitRecord,
    ) -> Result<FieldRecommendation, AdvisoryError> {
        nutrient::build_recommendation(&self.channels, sample, deficits)
    }

    /// Population insights over a batch of historical deficit rows
    ///
    /// One insight per nutrient, recomputed fully on every call. Fails with
    /// `InsufficientData` on an empty batch.
    pub fn summarize_deficits(
        &self,
        records: &[DeficitRecord],
    ) -> Result<Vec<PopulationInsight>, AdvisoryError> {
        analytics::summarize(&self.severity, &self.recommendations, records)
    }
}
