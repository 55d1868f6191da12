// Raw per-account measurements, as handed over by whatever ingests account data.
//
// Every field is optional. Partial signal availability is normal, and a
// missing measurement simply contributes no evidence.

use serde::{Deserialize, Serialize};

/// Raw signal measurements of arbitrary scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSignals {
    /// Number of accounts following this one
    pub followers: Option<u64>,
    /// Number of accounts this one follows
    pub following: Option<u64>,
    /// Mean interactions per post divided by follower count (0.0-1.0, can exceed 1)
    pub engagement_rate: Option<f64>,
    /// Average posts per day
    pub posts_per_day: Option<f64>,
    /// Account handle, scored by the username pattern heuristic
    pub username: Option<String>,
    /// Precomputed username pattern score (0-100); wins over `username`
    pub username_pattern_score: Option<f64>,
    pub has_avatar: Option<bool>,
    pub has_bio: Option<bool>,
    pub has_display_name: Option<bool>,
    pub has_link: Option<bool>,
}

impl RawSignals {
    /// Following-to-follower ratio. A zero follower count is treated as one.
    pub fn follow_ratio(&self) -> Option<f64> {
        match (self.followers, self.following) {
            (Some(followers), Some(following)) => {
                Some(following as f64 / followers.max(1) as f64)
            }
            _ => None,
        }
    }

    /// Percentage (0-100) of the known profile fields that are missing.
    /// Returns None when no profile field is known.
    pub fn profile_gap(&self) -> Option<f64> {
        let known: Vec<bool> = [
            self.has_avatar,
            self.has_bio,
            self.has_display_name,
            self.has_link,
        ]
        .into_iter()
        .flatten()
        .collect();

        if known.is_empty() {
            return None;
        }
        let missing = known.iter().filter(|present| !**present).count();
        Some(missing as f64 / known.len() as f64 * 100.0)
    }
}
