//! Shared types and the advisory engine for the Smart Farm Advisory Platform
//!
//! This crate contains the pure domain logic: data models, edge validation,
//! and the deterministic agronomic advisory engine consumed by the backend.

pub mod advisory;
pub mod models;
pub mod validation;

pub use advisory::{AdvisoryEngine, AdvisoryError, SUFFICIENCY_CUT_KG_HA};
pub use models::*;
pub use validation::*;
