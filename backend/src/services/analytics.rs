//! Deficit analytics service
//!
//! Accepts in-memory batches of historical deficit rows (file parsing is the
//! caller's responsibility) and produces population-level insights.

use std::sync::Arc;

use serde::Serialize;
use shared::{validate_deficit_record, AdvisoryEngine, DeficitRecord, PopulationInsight};

use crate::error::{AppError, AppResult};

/// Analytics service
#[derive(Clone)]
pub struct AnalyticsService {
    engine: Arc<AdvisoryEngine>,
}

/// Population analysis of one uploaded batch
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    pub total_samples: usize,
    pub insights: Vec<PopulationInsight>,
}

impl AnalyticsService {
    /// Create a new AnalyticsService instance
    pub fn new(engine: Arc<AdvisoryEngine>) -> Self {
        Self { engine }
    }

    /// Summarize a batch of historical deficit rows
    pub fn summarize(&self, records: &[DeficitRecord]) -> AppResult<AnalyticsReport> {
        for (index, record) in records.iter().enumerate() {
            validate_deficit_record(record).map_err(|msg| AppError::Validation {
                field: format!("records[{}]", index),
                message: msg.to_string(),
            })?;
        }

        let insights = self.engine.summarize_deficits(records)?;

        Ok(AnalyticsReport {
            total_samples: records.len(),
            insights,
        })
    }
}
