//! Population-level deficit analytics models

use serde::{Deserialize, Serialize};

use super::nutrient::Nutrient;

/// Summary statistics over one nutrient's deficits in a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeficitStatistics {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (n - 1 denominator); 0 for a single row
    pub std_dev: f64,
    pub count: usize,
}

/// Population severity tier, classified by the batch mean
///
/// Thresholds are deliberately distinct from the per-record status tiers:
/// the same cuts (50 / 20) apply to every nutrient.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "High"),
            Severity::Medium => write!(f, "Medium"),
            Severity::Low => write!(f, "Low"),
        }
    }
}

/// Population-level insight for one nutrient over one batch
///
/// Recomputed fully on every batch, never updated incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationInsight {
    pub nutrient: Nutrient,
    pub statistics: DeficitStatistics,
    pub severity: Severity,
    pub message: String,
    pub recommendation: String,
}
