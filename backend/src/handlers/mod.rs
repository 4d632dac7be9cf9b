//! HTTP request handlers for the Smart Farm Advisory Platform

pub mod analytics;
pub mod chat;
pub mod health;
pub mod marketplace;
pub mod prediction;
pub mod satellite;
pub mod weather;

pub use analytics::analyze_deficits;
pub use chat::{chat, chat_suggestions};
pub use health::health_check;
pub use marketplace::list_products;
pub use prediction::{create_batch_prediction, create_prediction};
pub use satellite::get_field_telemetry;
pub use weather::get_weather_advisory;
