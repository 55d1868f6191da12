// Weight vector for the suspicion score.
//
// Weights are configuration: a mapping from feature name to a non-negative
// weight. They need not sum to 1.0, the engine divides by the sum at
// aggregation time. A vector is only checked when it is used (or when
// `validate` is called explicitly), so a bad vector fails the same way on
// every call.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::error::{ScoringError, ScoringResult};
use crate::signals::Feature;

/// Mapping from feature name to contribution weight.
///
/// Known feature names are stored under their canonical snake_case spelling.
/// Unrecognized names are kept so that they are still validated, but they
/// never contribute to the score or the sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightVector {
    entries: BTreeMap<String, f64>,
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::from_pairs([
            ("follower_ratio", 0.25),
            ("engagement_rate", 0.25),
            ("posting_frequency", 0.20),
            ("username_pattern", 0.20),
            ("profile_completeness", 0.10),
        ])
    }
}

impl WeightVector {
    /// An empty vector. Scoring with it fails with `DegenerateWeight`.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Build from (name, weight) pairs. Later duplicates overwrite earlier ones.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut weights = Self::empty();
        for (name, weight) in pairs {
            weights.set_named(name, weight);
        }
        weights
    }

    /// Parse the `name=value,name=value` form used by `CHAFF_WEIGHTS`.
    pub fn parse(spec: &str) -> ScoringResult<Self> {
        let mut weights = Self::empty();
        for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, value) = entry
                .split_once('=')
                .ok_or_else(|| ScoringError::MalformedWeights(entry.to_string()))?;
            let value: f64 = value
                .trim()
                .parse()
                .map_err(|_| ScoringError::MalformedWeights(entry.to_string()))?;
            weights.set_named(name.trim(), value);
        }
        Ok(weights)
    }

    pub fn set(&mut self, feature: Feature, weight: f64) {
        self.entries.insert(feature.name().to_string(), weight);
    }

    fn set_named(&mut self, name: &str, weight: f64) {
        let key = match Feature::from_name(name) {
            Some(feature) => feature.name().to_string(),
            None => name.to_string(),
        };
        self.entries.insert(key, weight);
    }

    /// Raw configured weight for a feature (0.0 when absent).
    pub fn get(&self, feature: Feature) -> f64 {
        self.entries.get(feature.name()).copied().unwrap_or(0.0)
    }

    /// Check every entry, then the sum over the documented features.
    ///
    /// Negative or non-finite weights fail with `InvalidWeight`, including
    /// weights under unrecognized names. A zero sum fails with
    /// `DegenerateWeight`.
    pub fn validate(&self) -> ScoringResult<()> {
        for (name, &value) in &self.entries {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringError::InvalidWeight {
                    name: name.clone(),
                    value,
                });
            }
        }
        for name in self.entries.keys() {
            if Feature::from_name(name).is_none() {
                debug!(name = %name, "Ignoring weight for unknown feature");
            }
        }
        if self.largest() <= 0.0 {
            return Err(ScoringError::DegenerateWeight);
        }
        Ok(())
    }

    /// Sum of the weights of the documented features.
    ///
    /// Overflows to infinity for weights near `f64::MAX`; `normalized` does
    /// not depend on it.
    pub fn total(&self) -> f64 {
        Feature::ALL.iter().map(|f| self.get(*f)).sum()
    }

    fn largest(&self) -> f64 {
        Feature::ALL
            .iter()
            .map(|f| self.get(*f))
            .fold(0.0, f64::max)
    }

    /// Weights renormalized to sum to 1.0, one entry per documented feature.
    ///
    /// Weights are divided by the largest one before summing, so the sum stays
    /// finite for any valid vector.
    pub fn normalized(&self) -> ScoringResult<[(Feature, f64); 5]> {
        self.validate()?;
        let largest = self.largest();
        let relative = Feature::ALL.map(|f| (f, self.get(f) / largest));
        let total: f64 = relative.iter().map(|(_, w)| w).sum();
        Ok(relative.map(|(f, w)| (f, w / total)))
    }

    /// Return a copy with every weight multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(name, w)| (name.clone(), w * factor))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sums_to_one() {
        let w = WeightVector::default();
        assert!((w.total() - 1.0).abs() < 1e-9);
        assert!(w.validate().is_ok());
    }

    #[test]
    fn test_camel_case_names_are_canonicalized() {
        let w = WeightVector::from_pairs([("followerRatio", 0.5), ("follower_ratio", 0.7)]);
        assert_eq!(w.get(Feature::FollowerRatio), 0.7);
    }

    #[test]
    fn test_negative_unknown_name_is_invalid() {
        let w = WeightVector::from_pairs([("a", -1.0), ("follower_ratio", 1.0)]);
        assert!(matches!(
            w.validate(),
            Err(ScoringError::InvalidWeight { ref name, .. }) if name == "a"
        ));
    }

    #[test]
    fn test_unknown_names_do_not_count_toward_sum() {
        let w = WeightVector::from_pairs([("a", 3.0)]);
        assert_eq!(w.validate(), Err(ScoringError::DegenerateWeight));
    }

    #[test]
    fn test_nan_weight_is_invalid() {
        let w = WeightVector::from_pairs([("engagement_rate", f64::NAN)]);
        assert!(matches!(
            w.validate(),
            Err(ScoringError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_huge_weights_keep_their_shares() {
        let w = WeightVector::from_pairs(Feature::ALL.map(|f| (f.name(), 1e308)));
        assert!(w.total().is_infinite());
        let shares = w.normalized().unwrap();
        assert!(shares.iter().all(|(_, share)| (share - 0.2).abs() < 1e-12));
    }

    #[test]
    fn test_parse() {
        let w = WeightVector::parse("follower_ratio=2, engagementRate = 2 ,").unwrap();
        assert_eq!(w.get(Feature::FollowerRatio), 2.0);
        assert_eq!(w.get(Feature::EngagementRate), 2.0);
        let shares = w.normalized().unwrap();
        assert_eq!(shares[0], (Feature::FollowerRatio, 0.5));
    }

    #[test]
    fn test_parse_rejects_malformed_entries() {
        assert!(matches!(
            WeightVector::parse("follower_ratio"),
            Err(ScoringError::MalformedWeights(_))
        ));
        assert!(matches!(
            WeightVector::parse("follower_ratio=abc"),
            Err(ScoringError::MalformedWeights(_))
        ));
    }
}
