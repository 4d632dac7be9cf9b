//! External API integrations

pub mod assistant;
pub mod predictor;
pub mod weather;

pub use assistant::AssistantClient;
pub use predictor::PredictorClient;
pub use weather::WeatherClient;
