//! Business logic services for the Smart Farm Advisory Platform

pub mod analytics;
pub mod assistant;
pub mod catalog;
pub mod prediction;
pub mod satellite;
pub mod weather;

pub use analytics::AnalyticsService;
pub use assistant::{new_conversation_store, AssistantService, ConversationStore};
pub use catalog::CatalogService;
pub use prediction::PredictionService;
pub use satellite::SatelliteService;
pub use weather::WeatherService;
