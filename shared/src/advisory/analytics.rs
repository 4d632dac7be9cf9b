//! Deficit severity summarizer
//!
//! Population-level statistics over a batch of historical deficit rows.
//! Severity is classified on the batch mean with a single threshold pair
//! (50 / 20) common to all nutrients, while the textual recommendation uses
//! per-nutrient cuts (N 50/20, P 30/10, K 40/15). Both sets are kept
//! distinct from the per-record status tiers on purpose: population means
//! are smoother than individual rows.

use crate::models::{DeficitRecord, DeficitStatistics, Nutrient, PopulationInsight, Severity};

use super::bands::{Band, BandTable, Edge};
use super::AdvisoryError;

pub(super) fn severity_table() -> Result<BandTable<Severity>, AdvisoryError> {
    BandTable::new(vec![
        Band::new(Edge::Unbounded, Edge::Included(20.0), Severity::Low),
        Band::new(Edge::Excluded(20.0), Edge::Included(50.0), Severity::Medium),
        Band::new(Edge::Excluded(50.0), Edge::Unbounded, Severity::High),
    ])
}

/// Three-tier recommendation texts for one nutrient, split at (low, high)
fn recommendation_table(
    nutrient: Nutrient,
) -> Result<BandTable<&'static str>, AdvisoryError> {
    let (low, high, texts) = match nutrient {
        Nutrient::Nitrogen => (
            20.0,
            50.0,
            [
                "Nitrogen levels are adequate. Monitor regularly.",
                "Moderate nitrogen application needed. Apply Urea as per soil test recommendations.",
                "Apply Urea fertilizer immediately. Consider split application for better uptake.",
            ],
        ),
        Nutrient::Phosphorus => (
            10.0,
            30.0,
            [
                "Phosphorus levels are sufficient. No immediate action needed.",
                "Light phosphorus application recommended. Use DAP for quick results.",
                "Apply DAP or single superphosphate. Phosphorus is crucial for root development.",
            ],
        ),
        Nutrient::Potassium => (
            15.0,
            40.0,
            [
                "Potassium levels are good. Continue current management practices.",
                "Moderate potassium application needed. Use MOP as recommended.",
                "Apply MOP (Potash) fertilizer. Essential for fruit quality and disease resistance.",
            ],
        ),
    };
    let [adequate, moderate, urgent] = texts;
    BandTable::new(vec![
        Band::new(Edge::Unbounded, Edge::Included(low), adequate),
        Band::new(Edge::Excluded(low), Edge::Included(high), moderate),
        Band::new(Edge::Excluded(high), Edge::Unbounded, urgent),
    ])
}

pub(super) fn recommendation_tables() -> Result<[BandTable<&'static str>; 3], AdvisoryError> {
    Ok([
        recommendation_table(Nutrient::Nitrogen)?,
        recommendation_table(Nutrient::Phosphorus)?,
        recommendation_table(Nutrient::Potassium)?,
    ])
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Mean, min, max, sample standard deviation and count for one value series
///
/// The series is never empty here; the caller rejects empty batches before
/// statistics are attempted. A single row has a standard deviation of 0 by
/// definition.
fn statistics(values: &[f64]) -> DeficitStatistics {
    let count = values.len();
    let sum: f64 = values.iter().sum();
    let mean = sum / count as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let std_dev = if count < 2 {
        0.0
    } else {
        let squared: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (squared / (count - 1) as f64).sqrt()
    };
    DeficitStatistics {
        mean: round3(mean),
        min: round3(min),
        max: round3(max),
        std_dev: round3(std_dev),
        count,
    }
}

pub(super) fn summarize(
    severity: &BandTable<Severity>,
    recommendations: &[BandTable<&'static str>; 3],
    records: &[DeficitRecord],
) -> Result<Vec<PopulationInsight>, AdvisoryError> {
    if records.is_empty() {
        return Err(AdvisoryError::InsufficientData);
    }

    let mut insights = Vec::with_capacity(3);
    for (nutrient, recommendation_table) in Nutrient::ALL.iter().zip(recommendations.iter()) {
        let values: Vec<f64> = records.iter().map(|r| r.deficit(*nutrient)).collect();
        let stats = statistics(&values);

        // Classification happens on the rounded mean, matching what the
        // statistics report shows the user.
        let tier = *severity.classify(stats.mean)?;
        let recommendation = *recommendation_table.classify(stats.mean)?;
        let message = format!(
            "Average {} deficit is {} kg/ha ({} level)",
            nutrient.to_string().to_lowercase(),
            stats.mean,
            tier.to_string().to_lowercase()
        );

        insights.push(PopulationInsight {
            nutrient: *nutrient,
            statistics: stats,
            severity: tier,
            message,
            recommendation: recommendation.to_string(),
        });
    }

    Ok(insights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_of_single_value() {
        let stats = statistics(&[42.5]);
        assert_eq!(stats.mean, 42.5);
        assert_eq!(stats.min, 42.5);
        assert_eq!(stats.max, 42.5);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn sample_std_dev_uses_n_minus_one() {
        // Known series: mean 4, squared deviations sum 10, std sqrt(10/3)
        let stats = statistics(&[2.0, 4.0, 4.0, 6.0]);
        assert_eq!(stats.mean, 4.0);
        assert_eq!(stats.std_dev, round3((10.0f64 / 3.0).sqrt()));
    }

    #[test]
    fn rounding_is_three_decimals() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(-0.0004), -0.0);
    }
}
