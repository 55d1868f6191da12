// Suspicion score formula and category thresholds.
//
// score = Σ (weight_i / Σ weights) × feature_i over the documented features,
// clamped to 0-100. The category thresholds live in Category::from_score and
// nowhere else.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::{ScoringError, ScoringResult};
use crate::models::{Category, ScoredAccount};
use crate::signals::SignalFeatures;

use super::weights::WeightVector;

/// Compute the suspicion score (0-100) for one feature vector.
///
/// Fails fast on a misconfigured weight vector rather than producing a score
/// that would silently corrupt every downstream classification.
pub fn score(features: &SignalFeatures, weights: &WeightVector) -> ScoringResult<f64> {
    let shares = weights.normalized()?;
    let features = features.clamped();

    let total: f64 = shares
        .iter()
        .map(|(feature, share)| share * features.get(*feature))
        .sum();

    Ok(total.clamp(0.0, 100.0))
}

/// Map a score to its category.
pub fn classify(score: f64) -> Category {
    Category::from_score(score)
}

/// Score and classify a single named account.
pub fn score_account(
    username: &str,
    features: &SignalFeatures,
    weights: &WeightVector,
) -> ScoringResult<ScoredAccount> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ScoringError::EmptyUsername);
    }
    let value = score(features, weights)?;
    let account = ScoredAccount::new(username, value);

    debug!(
        username = account.username(),
        score = format!("{:.2}", account.score()),
        category = account.category().as_str(),
        "Scored account"
    );

    Ok(account)
}

/// Run a scoring pass over a batch of accounts, preserving input order.
///
/// Usernames must be unique within the pass. Accounts do not depend on each
/// other, so a host is free to split the batch and score the parts in any order.
pub fn score_all<'a, I>(accounts: I, weights: &WeightVector) -> ScoringResult<Vec<ScoredAccount>>
where
    I: IntoIterator<Item = (&'a str, &'a SignalFeatures)>,
{
    weights.validate()?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut scored = Vec::new();

    for (username, features) in accounts {
        let account = score_account(username, features, weights)?;
        if !seen.insert(account.username().to_string()) {
            return Err(ScoringError::DuplicateUsername(account.username().to_string()));
        }
        scored.push(account);
    }

    let flagged = scored.iter().filter(|a| a.is_flagged()).count();
    info!(
        accounts = scored.len(),
        flagged = flagged,
        "Scoring pass complete"
    );

    Ok(scored)
}
