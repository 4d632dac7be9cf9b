//! Ordered numeric band tables
//!
//! Every qualitative tier in the engine is assigned by matching a scalar
//! against one of these tables. A table is validated once, when the engine
//! is built: the bands must cover the whole real line with no gaps and no
//! overlaps, so a bad threshold edit fails at startup instead of silently
//! shifting classifications at request time.

use super::AdvisoryError;

/// One edge of a band
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Unbounded,
    Included(f64),
    Excluded(f64),
}

impl Edge {
    fn cut(&self) -> Option<f64> {
        match self {
            Edge::Unbounded => None,
            Edge::Included(v) | Edge::Excluded(v) => Some(*v),
        }
    }

    fn admits_from_below(&self, value: f64) -> bool {
        match self {
            Edge::Unbounded => true,
            Edge::Included(v) => value >= *v,
            Edge::Excluded(v) => value > *v,
        }
    }

    fn admits_from_above(&self, value: f64) -> bool {
        match self {
            Edge::Unbounded => true,
            Edge::Included(v) => value <= *v,
            Edge::Excluded(v) => value < *v,
        }
    }
}

/// One band: `lower` to `upper`, tagged with a tier
#[derive(Debug, Clone)]
pub struct Band<T> {
    pub lower: Edge,
    pub upper: Edge,
    pub tag: T,
}

impl<T> Band<T> {
    pub fn new(lower: Edge, upper: Edge, tag: T) -> Self {
        Self { lower, upper, tag }
    }

    fn contains(&self, value: f64) -> bool {
        self.lower.admits_from_below(value) && self.upper.admits_from_above(value)
    }
}

/// Validated, exhaustive, non-overlapping band table
#[derive(Debug, Clone)]
pub struct BandTable<T> {
    bands: Vec<Band<T>>,
}

impl<T> BandTable<T> {
    /// Build a table, verifying coverage of the real line
    ///
    /// Requirements, checked here and nowhere else:
    /// - the first band opens and the last band closes unbounded;
    /// - adjacent bands meet at the same finite cut, one side inclusive
    ///   and the other exclusive;
    /// - cut values are finite and strictly increasing.
    pub fn new(bands: Vec<Band<T>>) -> Result<Self, AdvisoryError> {
        if bands.is_empty() {
            return Err(AdvisoryError::Configuration(
                "band table must contain at least one band".to_string(),
            ));
        }

        let first = &bands[0];
        if first.lower != Edge::Unbounded {
            return Err(AdvisoryError::Configuration(
                "first band must be unbounded below".to_string(),
            ));
        }
        let last = &bands[bands.len() - 1];
        if last.upper != Edge::Unbounded {
            return Err(AdvisoryError::Configuration(
                "last band must be unbounded above".to_string(),
            ));
        }

        let mut previous_cut: Option<f64> = None;
        for pair in bands.windows(2) {
            let (upper, lower) = (&pair[0].upper, &pair[1].lower);
            let seam = match (upper, lower) {
                (Edge::Included(a), Edge::Excluded(b)) if a == b => *a,
                (Edge::Excluded(a), Edge::Included(b)) if a == b => *a,
                _ => {
                    return Err(AdvisoryError::Configuration(format!(
                        "bands must meet exactly once at each cut, found {:?} then {:?}",
                        upper, lower
                    )));
                }
            };
            if !seam.is_finite() {
                return Err(AdvisoryError::Configuration(
                    "band cuts must be finite".to_string(),
                ));
            }
            if let Some(prev) = previous_cut {
                if seam <= prev {
                    return Err(AdvisoryError::Configuration(format!(
                        "band cuts must be strictly increasing, {} follows {}",
                        seam, prev
                    )));
                }
            }
            previous_cut = Some(seam);
        }

        // Interior edges of a single band must not be inverted
        for band in &bands {
            if let (Some(lo), Some(hi)) = (band.lower.cut(), band.upper.cut()) {
                if lo > hi {
                    return Err(AdvisoryError::Configuration(format!(
                        "band lower cut {} exceeds upper cut {}",
                        lo, hi
                    )));
                }
            }
        }

        Ok(Self { bands })
    }

    /// Tag of the unique band containing `value`
    ///
    /// Total for every real number once the table is validated; NaN matches
    /// no band and is reported as an explicit error rather than defaulting
    /// into any tier.
    pub fn classify(&self, value: f64) -> Result<&T, AdvisoryError> {
        self.bands
            .iter()
            .find(|band| band.contains(value))
            .map(|band| &band.tag)
            .ok_or(AdvisoryError::Unclassifiable(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_tier() -> BandTable<&'static str> {
        BandTable::new(vec![
            Band::new(Edge::Unbounded, Edge::Excluded(0.0), "negative"),
            Band::new(Edge::Included(0.0), Edge::Included(10.0), "small"),
            Band::new(Edge::Excluded(10.0), Edge::Unbounded, "large"),
        ])
        .unwrap()
    }

    #[test]
    fn classifies_interior_and_boundary_values() {
        let table = three_tier();
        assert_eq!(*table.classify(-5.0).unwrap(), "negative");
        assert_eq!(*table.classify(0.0).unwrap(), "small");
        assert_eq!(*table.classify(10.0).unwrap(), "small");
        assert_eq!(*table.classify(10.5).unwrap(), "large");
    }

    #[test]
    fn rejects_gap_between_bands() {
        let result = BandTable::new(vec![
            Band::new(Edge::Unbounded, Edge::Excluded(0.0), "a"),
            Band::new(Edge::Included(1.0), Edge::Unbounded, "b"),
        ]);
        assert!(matches!(result, Err(AdvisoryError::Configuration(_))));
    }

    #[test]
    fn rejects_overlap_at_seam() {
        let result = BandTable::new(vec![
            Band::new(Edge::Unbounded, Edge::Included(0.0), "a"),
            Band::new(Edge::Included(0.0), Edge::Unbounded, "b"),
        ]);
        assert!(matches!(result, Err(AdvisoryError::Configuration(_))));
    }

    #[test]
    fn rejects_unordered_cuts() {
        let result = BandTable::new(vec![
            Band::new(Edge::Unbounded, Edge::Included(10.0), "a"),
            Band::new(Edge::Excluded(10.0), Edge::Included(5.0), "b"),
            Band::new(Edge::Excluded(5.0), Edge::Unbounded, "c"),
        ]);
        assert!(matches!(result, Err(AdvisoryError::Configuration(_))));
    }

    #[test]
    fn rejects_bounded_outer_edges() {
        let result = BandTable::new(vec![
            Band::new(Edge::Included(0.0), Edge::Included(10.0), "a"),
            Band::new(Edge::Excluded(10.0), Edge::Unbounded, "b"),
        ]);
        assert!(matches!(result, Err(AdvisoryError::Configuration(_))));
    }

    #[test]
    fn nan_is_an_explicit_error() {
        let table = three_tier();
        assert!(matches!(
            table.classify(f64::NAN),
            Err(AdvisoryError::Unclassifiable(_))
        ));
    }

    proptest::proptest! {
        #[test]
        fn every_finite_value_lands_in_exactly_one_band(value in -1e6f64..1e6) {
            let table = three_tier();
            let matching = table
                .bands
                .iter()
                .filter(|band| band.contains(value))
                .count();
            proptest::prop_assert_eq!(matching, 1);
        }
    }
}
