// Normalized signal features — the scoring engine's input.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the documented signal features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    FollowerRatio,
    EngagementRate,
    PostingFrequency,
    UsernamePattern,
    ProfileCompleteness,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::FollowerRatio,
        Feature::EngagementRate,
        Feature::PostingFrequency,
        Feature::UsernamePattern,
        Feature::ProfileCompleteness,
    ];

    /// Stable snake_case name, used in config and JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Feature::FollowerRatio => "follower_ratio",
            Feature::EngagementRate => "engagement_rate",
            Feature::PostingFrequency => "posting_frequency",
            Feature::UsernamePattern => "username_pattern",
            Feature::ProfileCompleteness => "profile_completeness",
        }
    }

    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::FollowerRatio => "Follower Ratio",
            Feature::EngagementRate => "Engagement Rate",
            Feature::PostingFrequency => "Posting Frequency",
            Feature::UsernamePattern => "Username Pattern",
            Feature::ProfileCompleteness => "Profile Completeness",
        }
    }

    /// Look up a feature by name. Accepts snake_case and camelCase spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "followerratio" => Some(Feature::FollowerRatio),
            "engagementrate" => Some(Feature::EngagementRate),
            "postingfrequency" => Some(Feature::PostingFrequency),
            "usernamepattern" | "usernamepatternscore" => Some(Feature::UsernamePattern),
            "profilecompleteness" => Some(Feature::ProfileCompleteness),
            _ => None,
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::from_name(s).ok_or_else(|| format!("unknown feature `{s}`"))
    }
}

/// Clamp a feature value into 0-100. NaN is treated as "no evidence".
pub fn clamp_feature(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Per-account signal features, each on a 0-100 risk scale.
///
/// 100 means the strongest evidence of an inauthentic account, 0 means no
/// evidence. Values are clamped whenever they are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalFeatures {
    pub follower_ratio: f64,
    pub engagement_rate: f64,
    pub posting_frequency: f64,
    pub username_pattern: f64,
    #[serde(default)]
    pub profile_completeness: f64,
}

impl SignalFeatures {
    pub fn new(
        follower_ratio: f64,
        engagement_rate: f64,
        posting_frequency: f64,
        username_pattern: f64,
        profile_completeness: f64,
    ) -> Self {
        Self {
            follower_ratio,
            engagement_rate,
            posting_frequency,
            username_pattern,
            profile_completeness,
        }
    }

    /// Clamped value of a single feature.
    pub fn get(&self, feature: Feature) -> f64 {
        let raw = match feature {
            Feature::FollowerRatio => self.follower_ratio,
            Feature::EngagementRate => self.engagement_rate,
            Feature::PostingFrequency => self.posting_frequency,
            Feature::UsernamePattern => self.username_pattern,
            Feature::ProfileCompleteness => self.profile_completeness,
        };
        clamp_feature(raw)
    }

    /// A copy with every value clamped into 0-100.
    pub fn clamped(&self) -> Self {
        Self {
            follower_ratio: clamp_feature(self.follower_ratio),
            engagement_rate: clamp_feature(self.engagement_rate),
            posting_frequency: clamp_feature(self.posting_frequency),
            username_pattern: clamp_feature(self.username_pattern),
            profile_completeness: clamp_feature(self.profile_completeness),
        }
    }
}
