//! Input validation for measurements arriving at the platform edge
//!
//! Observations and field samples come from external collaborators or user
//! input; every numeric field is range-checked here before the advisory
//! engine classifies anything.

use crate::models::{DeficitRecord, FieldSample, WeatherObservation};

/// Validate a weather observation from the weather source
pub fn validate_observation(observation: &WeatherObservation) -> Result<(), &'static str> {
    if !observation.temperature_celsius.is_finite() {
        return Err("Temperature must be a finite number");
    }
    if !observation.humidity_percent.is_finite()
        || observation.humidity_percent < 0.0
        || observation.humidity_percent > 100.0
    {
        return Err("Humidity must be between 0 and 100%");
    }
    if !observation.rainfall_1h_mm.is_finite() || observation.rainfall_1h_mm < 0.0 {
        return Err("Rainfall cannot be negative");
    }
    if !observation.wind_speed_mps.is_finite() || observation.wind_speed_mps < 0.0 {
        return Err("Wind speed cannot be negative");
    }
    Ok(())
}

/// Validate a field sample before handing it to the deficit predictor
pub fn validate_field_sample(sample: &FieldSample) -> Result<(), &'static str> {
    if sample.crop.trim().is_empty() {
        return Err("Crop is required");
    }
    if sample.soil_type.trim().is_empty() {
        return Err("Soil type is required");
    }
    if sample.variety.trim().is_empty() {
        return Err("Variety is required");
    }
    if !sample.temperature_celsius.is_finite() {
        return Err("Temperature must be a finite number");
    }
    if !sample.humidity_percent.is_finite()
        || sample.humidity_percent < 0.0
        || sample.humidity_percent > 100.0
    {
        return Err("Humidity must be between 0 and 100%");
    }
    if !sample.ph_value.is_finite() || sample.ph_value < 0.0 || sample.ph_value > 14.0 {
        return Err("pH must be between 0 and 14");
    }
    if !sample.rainfall_mm.is_finite() || sample.rainfall_mm < 0.0 {
        return Err("Rainfall cannot be negative");
    }
    for present in [
        sample.nitrogen_kg_ha,
        sample.phosphorus_kg_ha,
        sample.potassium_kg_ha,
    ] {
        if !present.is_finite() || present < 0.0 {
            return Err("Present nutrient amounts cannot be negative");
        }
    }
    Ok(())
}

/// Validate one historical deficit row
///
/// Deficits may be negative (surplus); only non-numeric values are rejected.
pub fn validate_deficit_record(record: &DeficitRecord) -> Result<(), &'static str> {
    if !record.n_deficit_kg_ha.is_finite()
        || !record.p_deficit_kg_ha.is_finite()
        || !record.k_deficit_kg_ha.is_finite()
    {
        return Err("Deficit values must be finite numbers");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation() -> WeatherObservation {
        WeatherObservation {
            temperature_celsius: 24.0,
            humidity_percent: 55.0,
            rainfall_1h_mm: 0.0,
            wind_speed_mps: 3.2,
            condition: "clear sky".to_string(),
        }
    }

    fn sample() -> FieldSample {
        FieldSample {
            crop: "Rice".to_string(),
            soil_type: "Loam".to_string(),
            variety: "Hybrid".to_string(),
            temperature_celsius: 26.0,
            humidity_percent: 70.0,
            ph_value: 6.5,
            rainfall_mm: 120.0,
            nitrogen_kg_ha: 40.0,
            phosphorus_kg_ha: 30.0,
            potassium_kg_ha: 35.0,
        }
    }

    #[test]
    fn valid_observation_passes() {
        assert!(validate_observation(&observation()).is_ok());
    }

    #[test]
    fn humidity_out_of_range_fails() {
        let mut obs = observation();
        obs.humidity_percent = 130.0;
        assert!(validate_observation(&obs).is_err());
    }

    #[test]
    fn nan_temperature_fails() {
        let mut obs = observation();
        obs.temperature_celsius = f64::NAN;
        assert!(validate_observation(&obs).is_err());
    }

    #[test]
    fn negative_rainfall_fails() {
        let mut obs = observation();
        obs.rainfall_1h_mm = -1.0;
        assert!(validate_observation(&obs).is_err());
    }

    #[test]
    fn valid_sample_passes() {
        assert!(validate_field_sample(&sample()).is_ok());
    }

    #[test]
    fn empty_crop_fails() {
        let mut s = sample();
        s.crop = "  ".to_string();
        assert!(validate_field_sample(&s).is_err());
    }

    #[test]
    fn ph_out_of_range_fails() {
        let mut s = sample();
        s.ph_value = 15.0;
        assert!(validate_field_sample(&s).is_err());
    }

    #[test]
    fn negative_present_amount_fails() {
        let mut s = sample();
        s.potassium_kg_ha = -5.0;
        assert!(validate_field_sample(&s).is_err());
    }

    #[test]
    fn negative_deficit_is_a_valid_surplus() {
        let record = DeficitRecord {
            n_deficit_kg_ha: -12.0,
            p_deficit_kg_ha: 0.0,
            k_deficit_kg_ha: 3.5,
        };
        assert!(validate_deficit_record(&record).is_ok());
    }

    #[test]
    fn nan_deficit_fails() {
        let record = DeficitRecord {
            n_deficit_kg_ha: f64::NAN,
            p_deficit_kg_ha: 0.0,
            k_deficit_kg_ha: 0.0,
        };
        assert!(validate_deficit_record(&record).is_err());
    }
}
