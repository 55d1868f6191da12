// Per-account score explanation.
//
// Breaks a score down into what each feature contributed, for the account
// detail view. The points always add up to the score returned by `score`.

use serde::Serialize;

use crate::error::ScoringResult;
use crate::models::Category;
use crate::signals::{Feature, SignalFeatures};

use super::engine;
use super::weights::WeightVector;

/// A feature value at or above this level is reported as a high-risk characteristic.
pub const HIGH_RISK_FEATURE: f64 = 60.0;

/// One feature's share of a suspicion score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub feature: Feature,
    /// Clamped feature value (0-100)
    pub value: f64,
    /// Normalized weight (the weights of one explanation sum to 1.0)
    pub weight: f64,
    /// value × weight
    pub points: f64,
}

/// Full breakdown of a single score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub score: f64,
    pub category: Category,
    /// Sorted by points, largest first; ties keep feature order
    pub contributions: Vec<Contribution>,
}

impl Explanation {
    /// Features whose value alone marks them as high-risk, in contribution order.
    pub fn high_risk_features(&self) -> Vec<Feature> {
        self.contributions
            .iter()
            .filter(|c| c.value >= HIGH_RISK_FEATURE)
            .map(|c| c.feature)
            .collect()
    }

    /// The feature that moved the score most, if any feature contributed at all.
    pub fn top_driver(&self) -> Option<&Contribution> {
        self.contributions.first().filter(|c| c.points > 0.0)
    }
}

/// Explain how `features` and `weights` produce their score.
pub fn explain(features: &SignalFeatures, weights: &WeightVector) -> ScoringResult<Explanation> {
    let shares = weights.normalized()?;
    let score = engine::score(features, weights)?;

    let mut contributions: Vec<Contribution> = shares
        .iter()
        .map(|&(feature, weight)| {
            let value = features.get(feature);
            Contribution {
                feature,
                value,
                weight,
                points: value * weight,
            }
        })
        .collect();
    contributions.sort_by(|a, b| b.points.total_cmp(&a.points));

    Ok(Explanation {
        score,
        category: engine::classify(score),
        contributions,
    })
}
