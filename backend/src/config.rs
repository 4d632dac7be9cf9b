//! Configuration management for the Smart Farm Advisory Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with SFA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Nutrient deficit predictor configuration
    pub predictor: PredictorConfig,

    /// Farming assistant configuration
    pub assistant: AssistantConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictorConfig {
    /// Deficit prediction microservice endpoint
    pub endpoint: String,

    /// Deficit prediction API key
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    /// Text generation service endpoint
    pub endpoint: String,

    /// Text generation API key
    pub api_key: String,

    /// Model identifier requested from the service
    pub model: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("SFA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default(
                "weather.api_endpoint",
                "https://api.openweathermap.org/data/2.5",
            )?
            .set_default("assistant.model", "farm-advisor-1")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (SFA_ prefix)
            .add_source(
                Environment::with_prefix("SFA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
