//! Fertilizer prediction service
//!
//! Validates feature rows, obtains deficit predictions from the external
//! regression service, and turns them into structured recommendations.

use std::sync::Arc;

use serde::Serialize;
use shared::{
    validate_field_sample, AdvisoryEngine, DeficitRecord, FieldRecommendation, FieldSample,
};

use crate::error::{AppError, AppResult};
use crate::external::predictor::PredictorClient;

/// Prediction service
#[derive(Clone)]
pub struct PredictionService {
    predictor: PredictorClient,
    engine: Arc<AdvisoryEngine>,
}

/// One row's prediction result: echoed input, raw deficits, recommendation
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    pub input: FieldSample,
    pub deficits: DeficitRecord,
    pub recommendation: FieldRecommendation,
}

impl PredictionService {
    /// Create a new PredictionService instance
    pub fn new(predictor: PredictorClient, engine: Arc<AdvisoryEngine>) -> Self {
        Self { predictor, engine }
    }

    /// Recommend fertilizer for a single field sample
    pub async fn recommend(&self, sample: FieldSample) -> AppResult<PredictionResult> {
        validate_field_sample(&sample).map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        let deficits = self.predictor.predict(&sample).await?;
        let recommendation = self.engine.recommend(&sample, &deficits)?;

        Ok(PredictionResult {
            input: sample,
            deficits,
            recommendation,
        })
    }

    /// Recommend fertilizer for a batch of field samples
    ///
    /// The whole batch is validated before the predictor is called; one bad
    /// row rejects the request rather than producing partial results.
    pub async fn recommend_batch(
        &self,
        samples: Vec<FieldSample>,
    ) -> AppResult<Vec<PredictionResult>> {
        if samples.is_empty() {
            return Err(AppError::ValidationError(
                "At least one sample row is required".to_string(),
            ));
        }
        for (index, sample) in samples.iter().enumerate() {
            validate_field_sample(sample).map_err(|msg| AppError::Validation {
                field: format!("rows[{}]", index),
                message: msg.to_string(),
            })?;
        }

        let deficits = self.predictor.predict_batch(&samples).await?;

        samples
            .into_iter()
            .zip(deficits)
            .map(|(sample, record)| {
                let recommendation = self.engine.recommend(&sample, &record)?;
                Ok(PredictionResult {
                    input: sample,
                    deficits: record,
                    recommendation,
                })
            })
            .collect()
    }
}
