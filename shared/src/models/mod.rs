//! Domain models for the Smart Farm Advisory Platform

pub mod analytics;
pub mod nutrient;
pub mod weather;

pub use analytics::*;
pub use nutrient::*;
pub use weather::*;
