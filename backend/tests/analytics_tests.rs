//! Tests for the population deficit summarizer
//!
//! Verifies the statistics block (sample standard deviation, 3-decimal
//! rounding), the shared severity cuts on the batch mean, and the
//! per-nutrient recommendation tiers.

use shared::{AdvisoryEngine, AdvisoryError, DeficitRecord, Nutrient, Severity};

fn engine() -> AdvisoryEngine {
    AdvisoryEngine::new().unwrap()
}

fn record(n: f64, p: f64, k: f64) -> DeficitRecord {
    DeficitRecord {
        n_deficit_kg_ha: n,
        p_deficit_kg_ha: p,
        k_deficit_kg_ha: k,
    }
}

/// Records where every nutrient carries the same deficit values
fn uniform_records(values: &[f64]) -> Vec<DeficitRecord> {
    values.iter().map(|&v| record(v, v, v)).collect()
}

// =============================================================================
// Batch statistics
// =============================================================================

mod statistics {
    use super::*;

    #[test]
    fn empty_batch_is_insufficient_data() {
        let result = engine().summarize_deficits(&[]);
        assert!(matches!(result, Err(AdvisoryError::InsufficientData)));
    }

    #[test]
    fn single_row_has_zero_std_dev() {
        let insights = engine()
            .summarize_deficits(&uniform_records(&[42.5]))
            .unwrap();

        for insight in &insights {
            assert_eq!(insight.statistics.mean, 42.5);
            assert_eq!(insight.statistics.min, 42.5);
            assert_eq!(insight.statistics.max, 42.5);
            assert_eq!(insight.statistics.std_dev, 0.0);
            assert_eq!(insight.statistics.count, 1);
        }
    }

    #[test]
    fn known_series_statistics() {
        // Mean 4, squared deviations sum 10, sample std sqrt(10/3) = 1.826
        let insights = engine()
            .summarize_deficits(&uniform_records(&[2.0, 4.0, 4.0, 6.0]))
            .unwrap();

        let stats = &insights[0].statistics;
        assert_eq!(stats.mean, 4.0);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 6.0);
        assert_eq!(stats.std_dev, 1.826);
        assert_eq!(stats.count, 4);
    }

    #[test]
    fn one_insight_per_nutrient_in_fixed_order() {
        let insights = engine()
            .summarize_deficits(&uniform_records(&[10.0, 20.0]))
            .unwrap();

        let order: Vec<Nutrient> = insights.iter().map(|i| i.nutrient).collect();
        assert_eq!(order, Nutrient::ALL.to_vec());
    }

    #[test]
    fn nutrients_are_summarized_independently() {
        let records = vec![record(60.0, 5.0, 25.0), record(60.0, 5.0, 25.0)];
        let insights = engine().summarize_deficits(&records).unwrap();

        assert_eq!(insights[0].severity, Severity::High);
        assert_eq!(insights[1].severity, Severity::Low);
        assert_eq!(insights[2].severity, Severity::Medium);
    }
}

// =============================================================================
// Severity cuts on the batch mean
// =============================================================================

mod severity_cuts {
    use super::*;

    fn severity_of_mean(mean: f64) -> Severity {
        let insights = engine()
            .summarize_deficits(&uniform_records(&[mean]))
            .unwrap();
        insights[0].severity
    }

    #[test]
    fn twenty_and_below_is_low() {
        assert_eq!(severity_of_mean(0.0), Severity::Low);
        assert_eq!(severity_of_mean(20.0), Severity::Low);
    }

    #[test]
    fn above_twenty_to_fifty_is_medium() {
        assert_eq!(severity_of_mean(20.1), Severity::Medium);
        assert_eq!(severity_of_mean(50.0), Severity::Medium);
    }

    #[test]
    fn above_fifty_is_high() {
        assert_eq!(severity_of_mean(50.1), Severity::High);
        assert_eq!(severity_of_mean(120.0), Severity::High);
    }

    #[test]
    fn message_reports_rounded_mean_and_severity() {
        let insights = engine()
            .summarize_deficits(&uniform_records(&[55.0, 56.0]))
            .unwrap();

        assert_eq!(
            insights[0].message,
            "Average nitrogen deficit is 55.5 kg/ha (high level)"
        );
    }
}

// =============================================================================
// Per-nutrient recommendation tiers
// =============================================================================

mod recommendation_tiers {
    use super::*;

    fn recommendations_of_mean(mean: f64) -> Vec<String> {
        engine()
            .summarize_deficits(&uniform_records(&[mean]))
            .unwrap()
            .into_iter()
            .map(|i| i.recommendation)
            .collect()
    }

    #[test]
    fn adequate_tier_texts() {
        let recs = recommendations_of_mean(5.0);
        assert!(recs[0].contains("adequate"));
        assert!(recs[1].contains("sufficient"));
        assert!(recs[2].contains("good"));
    }

    #[test]
    fn tier_cuts_differ_per_nutrient() {
        // At a mean of 18, nitrogen (cut 20) is still adequate while
        // phosphorus (cut 10) and potassium (cut 15) already need action.
        let recs = recommendations_of_mean(18.0);
        assert!(recs[0].contains("adequate"));
        assert!(recs[1].contains("Light phosphorus application"));
        assert!(recs[2].contains("Moderate potassium application"));
    }

    #[test]
    fn urgent_tier_texts() {
        let recs = recommendations_of_mean(60.0);
        assert_eq!(
            recs[0],
            "Apply Urea fertilizer immediately. Consider split application for better uptake."
        );
        assert_eq!(
            recs[1],
            "Apply DAP or single superphosphate. Phosphorus is crucial for root development."
        );
        assert_eq!(
            recs[2],
            "Apply MOP (Potash) fertilizer. Essential for fruit quality and disease resistance."
        );
    }

    #[test]
    fn boundary_values_stay_in_lower_tier() {
        // Each stated upper boundary is inclusive.
        let n = recommendations_of_mean(20.0);
        assert!(n[0].contains("adequate"));

        let n = recommendations_of_mean(50.0);
        assert!(n[0].contains("Moderate nitrogen application"));
    }
}
