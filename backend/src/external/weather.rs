//! Weather API client for fetching current conditions
//!
//! Integrates with OpenWeatherMap, queried by city name. An unknown city is
//! a terminal not-found signal surfaced to the caller, never retried.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use shared::WeatherObservation;

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    weather: Vec<OWMWeather>,
    main: OWMMain,
    wind: Option<OWMWind>,
    rain: Option<OWMRain>,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OWMRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch the current weather observation for a city
    ///
    /// Missing rainfall in the response means no rain in the last hour and
    /// maps to 0 rather than an error.
    pub async fn current_by_city(&self, city: &str) -> AppResult<WeatherObservation> {
        let url = format!(
            "{}/weather?q={}&appid={}&units=metric",
            self.base_url, city, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::WeatherUnavailable(format!("request failed: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("City '{}'", city)));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherUnavailable(format!(
                "{} - {}",
                status, body
            )));
        }

        let data: OWMCurrentResponse = response
            .json()
            .await
            .map_err(|e| AppError::WeatherUnavailable(format!("malformed response: {}", e)))?;

        Ok(convert_current_response(data))
    }
}

/// Convert an OpenWeatherMap current response to our observation format
fn convert_current_response(data: OWMCurrentResponse) -> WeatherObservation {
    WeatherObservation {
        temperature_celsius: data.main.temp,
        humidity_percent: data.main.humidity,
        rainfall_1h_mm: data.rain.and_then(|r| r.one_hour).unwrap_or(0.0),
        wind_speed_mps: data.wind.and_then(|w| w.speed).unwrap_or(0.0),
        condition: data
            .weather
            .first()
            .map(|w| w.description.clone())
            .unwrap_or_default(),
    }
}
