//! Nutrient deficit predictor client
//!
//! Client for the hosted regression microservice that maps a crop/soil
//! feature row to predicted N, P, K deficits. The model is opaque to this
//! platform; any failure surfaces as `PredictionUnavailable` and is never
//! retried here.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{DeficitRecord, FieldSample};

use crate::error::{AppError, AppResult};

/// Client for the deficit prediction microservice
#[derive(Clone)]
pub struct PredictorClient {
    endpoint: String,
    api_key: String,
    http_client: Client,
}

/// Request to predict deficits for a batch of feature rows
#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    rows: &'a [FieldSample],
}

/// Response from the prediction API
#[derive(Debug, Deserialize)]
struct PredictResponse {
    predictions: Vec<PredictionRow>,
}

#[derive(Debug, Deserialize)]
struct PredictionRow {
    n_deficit_kg_ha: f64,
    p_deficit_kg_ha: f64,
    k_deficit_kg_ha: f64,
}

impl PredictorClient {
    /// Create a new PredictorClient
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            endpoint,
            api_key,
            http_client: Client::new(),
        }
    }

    /// Predict deficits for one feature row
    pub async fn predict(&self, sample: &FieldSample) -> AppResult<DeficitRecord> {
        let mut records = self.predict_batch(std::slice::from_ref(sample)).await?;
        records
            .pop()
            .ok_or_else(|| AppError::PredictionUnavailable("empty prediction response".to_string()))
    }

    /// Predict deficits for a batch of feature rows, one record per row
    pub async fn predict_batch(&self, samples: &[FieldSample]) -> AppResult<Vec<DeficitRecord>> {
        let url = format!("{}/predict", self.endpoint);

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&PredictRequest { rows: samples })
            .send()
            .await
            .map_err(|e| AppError::PredictionUnavailable(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::PredictionUnavailable(format!(
                "{} - {}",
                status, body
            )));
        }

        let data: PredictResponse = response
            .json()
            .await
            .map_err(|e| AppError::PredictionUnavailable(format!("malformed response: {}", e)))?;

        if data.predictions.len() != samples.len() {
            return Err(AppError::PredictionUnavailable(format!(
                "expected {} predictions, got {}",
                samples.len(),
                data.predictions.len()
            )));
        }

        Ok(data
            .predictions
            .into_iter()
            .map(|row| DeficitRecord {
                n_deficit_kg_ha: row.n_deficit_kg_ha,
                p_deficit_kg_ha: row.p_deficit_kg_ha,
                k_deficit_kg_ha: row.k_deficit_kg_ha,
            })
            .collect())
    }
}
