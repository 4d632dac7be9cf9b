//! Soil nutrient models

use serde::{Deserialize, Serialize};

/// The three nutrient channels tracked by the platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    /// Fixed channel order used everywhere a per-nutrient list is produced
    pub const ALL: [Nutrient; 3] = [
        Nutrient::Nitrogen,
        Nutrient::Phosphorus,
        Nutrient::Potassium,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "N",
            Nutrient::Phosphorus => "P",
            Nutrient::Potassium => "K",
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Nutrient::Nitrogen => write!(f, "Nitrogen"),
            Nutrient::Phosphorus => write!(f, "Phosphorus"),
            Nutrient::Potassium => write!(f, "Potassium"),
        }
    }
}

/// Per-record nutrient status tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NutrientStatus {
    Sufficient,
    Low,
    VeryLow,
}

impl std::fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NutrientStatus::Sufficient => write!(f, "Sufficient"),
            NutrientStatus::Low => write!(f, "Low"),
            NutrientStatus::VeryLow => write!(f, "Very Low"),
        }
    }
}

/// Aggregate field health grade, one step per deficient channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HealthGrade {
    /// No deficient channels
    Excellent,
    /// One deficient channel
    Good,
    /// Two deficient channels
    Fair,
    /// All three channels deficient
    Poor,
}

impl std::fmt::Display for HealthGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthGrade::Excellent => write!(f, "Excellent"),
            HealthGrade::Good => write!(f, "Good"),
            HealthGrade::Fair => write!(f, "Fair"),
            HealthGrade::Poor => write!(f, "Poor"),
        }
    }
}

/// One crop/soil measurement row, as collected in the field
///
/// This is the feature row the deficit predictor consumes as given; no
/// fields are derived from others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSample {
    pub crop: String,
    pub soil_type: String,
    pub variety: String,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub ph_value: f64,
    pub rainfall_mm: f64,
    pub nitrogen_kg_ha: f64,
    pub phosphorus_kg_ha: f64,
    pub potassium_kg_ha: f64,
}

impl FieldSample {
    /// Present amount for a channel, kg/ha
    pub fn present_amount(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.nitrogen_kg_ha,
            Nutrient::Phosphorus => self.phosphorus_kg_ha,
            Nutrient::Potassium => self.potassium_kg_ha,
        }
    }
}

/// Predicted nutrient deficits for one field sample, kg/ha
///
/// Values at or below zero mean the nutrient is in surplus. Also the row
/// shape of historical deficit datasets fed to the population summarizer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeficitRecord {
    pub n_deficit_kg_ha: f64,
    pub p_deficit_kg_ha: f64,
    pub k_deficit_kg_ha: f64,
}

impl DeficitRecord {
    pub fn deficit(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.n_deficit_kg_ha,
            Nutrient::Phosphorus => self.p_deficit_kg_ha,
            Nutrient::Potassium => self.k_deficit_kg_ha,
        }
    }
}

/// Per-channel fertilizer recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientRecommendation {
    pub nutrient: Nutrient,
    pub present_kg_ha: f64,
    pub deficit_kg_ha: f64,
    pub status: NutrientStatus,
    /// Mass of the reference fertilizer needed to cover the deficit, kg/ha
    pub fertilizer_needed_kg_ha: f64,
    pub fertilizer_type: String,
}

/// Aggregate verdict across the three channels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallAssessment {
    pub health_grade: HealthGrade,
    /// One fixed directive per deficient channel, always in N, P, K order
    pub priority_actions: Vec<String>,
}

/// Full recommendation for one field sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRecommendation {
    pub nitrogen: NutrientRecommendation,
    pub phosphorus: NutrientRecommendation,
    pub potassium: NutrientRecommendation,
    pub overall: OverallAssessment,
}

impl FieldRecommendation {
    pub fn channel(&self, nutrient: Nutrient) -> &NutrientRecommendation {
        match nutrient {
            Nutrient::Nitrogen => &self.nitrogen,
            Nutrient::Phosphorus => &self.phosphorus,
            Nutrient::Potassium => &self.potassium,
        }
    }
}
