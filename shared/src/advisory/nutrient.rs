//! Nutrient advisory builder
//!
//! Per-channel deficit classification, fertilizer mass calculation, and the
//! aggregate health verdict. Thresholds differ per channel; the sufficiency
//! cut (0.01 kg/ha) is shared.

use crate::models::{
    DeficitRecord, FieldRecommendation, FieldSample, HealthGrade, Nutrient,
    NutrientRecommendation, NutrientStatus, OverallAssessment,
};

use super::bands::{Band, BandTable, Edge};
use super::AdvisoryError;

/// Deficits at or below this value count as covered
pub const SUFFICIENCY_CUT_KG_HA: f64 = 0.01;

/// Fixed per-channel configuration: reference fertilizer, its nutrient
/// content ratio, and the very-low threshold
#[derive(Debug, Clone)]
pub(super) struct ChannelSpec {
    pub nutrient: Nutrient,
    pub very_low_kg_ha: f64,
    pub content_ratio: f64,
    pub fertilizer_type: &'static str,
    pub priority_action: &'static str,
}

pub(super) fn channel_specs() -> [ChannelSpec; 3] {
    [
        ChannelSpec {
            nutrient: Nutrient::Nitrogen,
            very_low_kg_ha: 50.0,
            content_ratio: 0.46,
            fertilizer_type: "Urea (46-0-0)",
            priority_action: "Apply Nitrogen fertilizer urgently",
        },
        ChannelSpec {
            nutrient: Nutrient::Phosphorus,
            very_low_kg_ha: 30.0,
            content_ratio: 0.46,
            fertilizer_type: "DAP (18-46-0)",
            priority_action: "Supplement with Phosphorus",
        },
        ChannelSpec {
            nutrient: Nutrient::Potassium,
            very_low_kg_ha: 40.0,
            content_ratio: 0.60,
            fertilizer_type: "MOP (0-0-60)",
            priority_action: "Add Potassium fertilizer",
        },
    ]
}

/// One validated channel: its spec plus its status band table
#[derive(Debug, Clone)]
pub(super) struct Channel {
    pub spec: ChannelSpec,
    pub status: BandTable<NutrientStatus>,
}

impl Channel {
    pub fn new(spec: ChannelSpec) -> Result<Self, AdvisoryError> {
        // Ratios are fixed constants; a non-positive one is a broken table,
        // not a runtime input error.
        if spec.content_ratio <= 0.0 || !spec.content_ratio.is_finite() {
            return Err(AdvisoryError::Configuration(format!(
                "{} content ratio must be positive, got {}",
                spec.nutrient, spec.content_ratio
            )));
        }
        let status = BandTable::new(vec![
            Band::new(
                Edge::Unbounded,
                Edge::Included(SUFFICIENCY_CUT_KG_HA),
                NutrientStatus::Sufficient,
            ),
            Band::new(
                Edge::Excluded(SUFFICIENCY_CUT_KG_HA),
                Edge::Excluded(spec.very_low_kg_ha),
                NutrientStatus::Low,
            ),
            Band::new(
                Edge::Included(spec.very_low_kg_ha),
                Edge::Unbounded,
                NutrientStatus::VeryLow,
            ),
        ])?;
        Ok(Self { spec, status })
    }

    fn recommend(
        &self,
        present_kg_ha: f64,
        deficit_kg_ha: f64,
    ) -> Result<NutrientRecommendation, AdvisoryError> {
        let status = *self.status.classify(deficit_kg_ha)?;
        let fertilizer_needed_kg_ha = if deficit_kg_ha > SUFFICIENCY_CUT_KG_HA {
            deficit_kg_ha / self.spec.content_ratio
        } else {
            0.0
        };
        Ok(NutrientRecommendation {
            nutrient: self.spec.nutrient,
            present_kg_ha,
            deficit_kg_ha,
            status,
            fertilizer_needed_kg_ha,
            fertilizer_type: self.spec.fertilizer_type.to_string(),
        })
    }
}

/// Health grade from the number of deficient channels
fn health_grade(deficient_count: usize) -> HealthGrade {
    match deficient_count {
        0 => HealthGrade::Excellent,
        1 => HealthGrade::Good,
        2 => HealthGrade::Fair,
        _ => HealthGrade::Poor,
    }
}

pub(super) fn build_recommendation(
    channels: &[Channel; 3],
    sample: &FieldSample,
    deficits: &DeficitRecord,
) -> Result<FieldRecommendation, AdvisoryError> {
    let mut per_channel = Vec::with_capacity(3);
    let mut priority_actions = Vec::new();
    let mut deficient_count = 0;

    // Channels are walked in fixed N, P, K order so the priority-action list
    // is stable regardless of relative severity.
    for channel in channels {
        let nutrient = channel.spec.nutrient;
        let deficit = deficits.deficit(nutrient);
        per_channel.push(channel.recommend(sample.present_amount(nutrient), deficit)?);
        if deficit > SUFFICIENCY_CUT_KG_HA {
            deficient_count += 1;
            priority_actions.push(channel.spec.priority_action.to_string());
        }
    }

    let mut iter = per_channel.into_iter();
    let (nitrogen, phosphorus, potassium) = match (iter.next(), iter.next(), iter.next()) {
        (Some(n), Some(p), Some(k)) => (n, p, k),
        _ => {
            return Err(AdvisoryError::Configuration(
                "expected exactly three nutrient channels".to_string(),
            ));
        }
    };

    Ok(FieldRecommendation {
        nitrogen,
        phosphorus,
        potassium,
        overall: OverallAssessment {
            health_grade: health_grade(deficient_count),
            priority_actions,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_specs_are_valid() {
        for spec in channel_specs() {
            assert!(Channel::new(spec).is_ok());
        }
    }

    #[test]
    fn zero_ratio_is_a_configuration_error() {
        let mut specs = channel_specs();
        specs[0].content_ratio = 0.0;
        let [n, _, _] = specs;
        assert!(matches!(
            Channel::new(n),
            Err(AdvisoryError::Configuration(_))
        ));
    }

    #[test]
    fn grade_steps_with_deficient_count() {
        assert_eq!(health_grade(0), HealthGrade::Excellent);
        assert_eq!(health_grade(1), HealthGrade::Good);
        assert_eq!(health_grade(2), HealthGrade::Fair);
        assert_eq!(health_grade(3), HealthGrade::Poor);
    }
}
