// Feature normalization — raw measurements to 0-100 risk features.
//
// The curve that maps a raw measurement onto the 0-100 scale is a policy,
// swappable through the NormalizationPolicy trait the same way the scoring
// backends are. Whatever the policy returns, the result is clamped again
// before it leaves this module.

use std::str::FromStr;

use super::features::{clamp_feature, Feature, SignalFeatures};
use super::raw::RawSignals;
use super::username;

/// Maps one raw measurement of a feature onto the 0-100 risk scale.
pub trait NormalizationPolicy {
    /// Scale a finite, non-negative raw value. Callers filter out missing,
    /// negative and non-finite inputs before calling this.
    fn scale(&self, feature: Feature, raw: f64) -> f64;
}

/// A ramp between `floor` (0 risk) and `cap` (100 risk).
///
/// When `inverted`, low raw values are the risky ones: `floor` maps to 100
/// and `cap` to 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    pub floor: f64,
    pub cap: f64,
    pub inverted: bool,
}

impl Curve {
    pub const fn rising(floor: f64, cap: f64) -> Self {
        Self {
            floor,
            cap,
            inverted: false,
        }
    }

    pub const fn falling(floor: f64, cap: f64) -> Self {
        Self {
            floor,
            cap,
            inverted: true,
        }
    }

    fn orient(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let t = if self.inverted { 1.0 - t } else { t };
        t * 100.0
    }

    /// Capped linear transform.
    pub fn linear(&self, raw: f64) -> f64 {
        let span = self.cap - self.floor;
        if span <= 0.0 {
            return 0.0;
        }
        self.orient((raw - self.floor) / span)
    }

    /// Log-scaled transform: early increments above the floor count more.
    pub fn log(&self, raw: f64) -> f64 {
        let span = self.cap - self.floor;
        if span <= 0.0 {
            return 0.0;
        }
        let excess = (raw - self.floor).max(0.0);
        self.orient(excess.ln_1p() / span.ln_1p())
    }
}

/// Capped linear ramps for every feature. The default policy.
#[derive(Debug, Clone)]
pub struct LinearPolicy {
    /// following / followers; 1:1 is neutral, 20:1 is maximal
    pub follower_ratio: Curve,
    /// engagement fraction; 0 is maximal risk, 5% and above is healthy
    pub engagement_rate: Curve,
    /// posts per day; up to 5 is neutral, 50 is maximal
    pub posting_frequency: Curve,
    pub username_pattern: Curve,
    pub profile_completeness: Curve,
}

impl Default for LinearPolicy {
    fn default() -> Self {
        Self {
            follower_ratio: Curve::rising(1.0, 20.0),
            engagement_rate: Curve::falling(0.0, 0.05),
            posting_frequency: Curve::rising(5.0, 50.0),
            username_pattern: Curve::rising(0.0, 100.0),
            profile_completeness: Curve::rising(0.0, 100.0),
        }
    }
}

impl LinearPolicy {
    pub fn curve(&self, feature: Feature) -> Curve {
        match feature {
            Feature::FollowerRatio => self.follower_ratio,
            Feature::EngagementRate => self.engagement_rate,
            Feature::PostingFrequency => self.posting_frequency,
            Feature::UsernamePattern => self.username_pattern,
            Feature::ProfileCompleteness => self.profile_completeness,
        }
    }
}

impl NormalizationPolicy for LinearPolicy {
    fn scale(&self, feature: Feature, raw: f64) -> f64 {
        self.curve(feature).linear(raw)
    }
}

/// Log-scaled ramps for the unbounded count features (follower ratio and
/// posting frequency); the already bounded features stay linear.
#[derive(Debug, Clone, Default)]
pub struct LogPolicy {
    pub curves: LinearPolicy,
}

impl NormalizationPolicy for LogPolicy {
    fn scale(&self, feature: Feature, raw: f64) -> f64 {
        let curve = self.curves.curve(feature);
        match feature {
            Feature::FollowerRatio | Feature::PostingFrequency => curve.log(raw),
            _ => curve.linear(raw),
        }
    }
}

/// Which normalization policy to use. Selected by `CHAFF_NORMALIZER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyKind {
    #[default]
    Linear,
    Log,
}

impl PolicyKind {
    pub fn build(&self) -> Box<dyn NormalizationPolicy> {
        match self {
            PolicyKind::Linear => Box::new(LinearPolicy::default()),
            PolicyKind::Log => Box::new(LogPolicy::default()),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(PolicyKind::Linear),
            "log" => Ok(PolicyKind::Log),
            other => Err(format!("unknown normalizer `{other}` (expected linear or log)")),
        }
    }
}

/// Normalize raw signals with the default linear policy.
pub fn normalize(raw: &RawSignals) -> SignalFeatures {
    normalize_with(raw, &LinearPolicy::default())
}

/// Normalize raw signals with an explicit policy.
///
/// Total: a missing, negative or non-finite measurement becomes 0.
pub fn normalize_with(raw: &RawSignals, policy: &dyn NormalizationPolicy) -> SignalFeatures {
    let scaled = |feature: Feature, value: Option<f64>| -> f64 {
        match value {
            Some(v) if v.is_finite() && v >= 0.0 => clamp_feature(policy.scale(feature, v)),
            _ => 0.0,
        }
    };

    let username_raw = raw
        .username_pattern_score
        .or_else(|| raw.username.as_deref().map(username::pattern_score));

    SignalFeatures {
        follower_ratio: scaled(Feature::FollowerRatio, raw.follow_ratio()),
        engagement_rate: scaled(Feature::EngagementRate, raw.engagement_rate),
        posting_frequency: scaled(Feature::PostingFrequency, raw.posts_per_day),
        username_pattern: scaled(Feature::UsernamePattern, username_raw),
        profile_completeness: scaled(Feature::ProfileCompleteness, raw.profile_gap()),
    }
}
