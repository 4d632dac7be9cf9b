//! Weather advisory service

use std::sync::Arc;

use serde::Serialize;
use shared::{validate_observation, AdvisoryEngine, WeatherAdvisory, WeatherObservation};

use crate::error::{AppError, AppResult};
use crate::external::weather::WeatherClient;

/// Weather service tying the external source to the advisory engine
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
    engine: Arc<AdvisoryEngine>,
}

/// Advisory report for one city query
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub observation: WeatherObservation,
    pub advisory: WeatherAdvisory,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(client: WeatherClient, engine: Arc<AdvisoryEngine>) -> Self {
        Self { client, engine }
    }

    /// Fetch the current observation for a city and build its advisory
    ///
    /// An unknown city surfaces as not-found; a collaborator failure as
    /// weather-unavailable. Neither is retried here.
    pub async fn advisory_for_city(&self, city: &str) -> AppResult<WeatherReport> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::Validation {
                field: "city".to_string(),
                message: "City name is required".to_string(),
            });
        }

        let observation = self.client.current_by_city(city).await?;

        // The source occasionally reports out-of-range readings; those are a
        // collaborator problem, not a caller problem.
        validate_observation(&observation)
            .map_err(|msg| AppError::WeatherUnavailable(format!("invalid observation: {}", msg)))?;

        let advisory = self.engine.weather_advisory(&observation)?;

        Ok(WeatherReport {
            city: title_case_city(city),
            observation,
            advisory,
        })
    }
}

fn title_case_city(city: &str) -> String {
    city.split_whitespace()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_names_are_title_cased() {
        assert_eq!(title_case_city("new delhi"), "New Delhi");
        assert_eq!(title_case_city("pune"), "Pune");
    }
}
