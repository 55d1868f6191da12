// Unit tests for the feature normalizer.
//
// The normalizer is total: every input, however broken, yields features
// inside 0-100, and missing measurements count as no evidence.

use chaff::signals::normalize::{Curve, LinearPolicy, LogPolicy};
use chaff::signals::{normalize, normalize_with, Feature, RawSignals, SignalFeatures};

fn suspicious_raw() -> RawSignals {
    RawSignals {
        followers: Some(12),
        following: Some(4800),
        engagement_rate: Some(0.0),
        posts_per_day: Some(140.0),
        username: Some("crypto_giveaway_now".to_string()),
        username_pattern_score: None,
        has_avatar: Some(false),
        has_bio: Some(false),
        has_display_name: Some(true),
        has_link: Some(false),
    }
}

fn healthy_raw() -> RawSignals {
    RawSignals {
        followers: Some(1500),
        following: Some(300),
        engagement_rate: Some(0.08),
        posts_per_day: Some(1.5),
        username: Some("city_food_trails".to_string()),
        username_pattern_score: None,
        has_avatar: Some(true),
        has_bio: Some(true),
        has_display_name: Some(true),
        has_link: Some(true),
    }
}

fn in_range(features: &SignalFeatures) -> bool {
    Feature::ALL
        .iter()
        .all(|f| (0.0..=100.0).contains(&features.get(*f)))
}

// ============================================================
// Default linear policy
// ============================================================

#[test]
fn missing_everything_is_zero() {
    assert_eq!(normalize(&RawSignals::default()), SignalFeatures::default());
}

#[test]
fn suspicious_profile_normalizes_high() {
    let f = normalize(&suspicious_raw());
    assert_eq!(f.follower_ratio, 100.0);
    assert_eq!(f.engagement_rate, 100.0);
    assert_eq!(f.posting_frequency, 100.0);
    assert_eq!(f.username_pattern, 30.0);
    assert_eq!(f.profile_completeness, 75.0);
}

#[test]
fn healthy_profile_normalizes_low() {
    let f = normalize(&healthy_raw());
    assert_eq!(f, SignalFeatures::default());
}

#[test]
fn precomputed_username_score_wins() {
    let raw = RawSignals {
        username: Some("crypto_giveaway_now".to_string()),
        username_pattern_score: Some(12.0),
        ..Default::default()
    };
    assert_eq!(normalize(&raw).username_pattern, 12.0);
}

#[test]
fn out_of_range_precomputed_score_is_clamped() {
    let raw = RawSignals {
        username_pattern_score: Some(400.0),
        ..Default::default()
    };
    assert_eq!(normalize(&raw).username_pattern, 100.0);
}

#[test]
fn follower_ratio_ramp() {
    let raw = RawSignals {
        followers: Some(100),
        following: Some(1050),
        ..Default::default()
    };
    // ratio 10.5 on a 1..20 ramp = 50%
    assert!((normalize(&raw).follower_ratio - 50.0).abs() < 1e-9);
}

// ============================================================
// Policies
// ============================================================

#[test]
fn every_policy_stays_in_range() {
    let inputs = [
        suspicious_raw(),
        healthy_raw(),
        RawSignals {
            engagement_rate: Some(-1.0),
            posts_per_day: Some(f64::INFINITY),
            ..Default::default()
        },
        RawSignals {
            followers: Some(0),
            following: Some(u64::MAX),
            posts_per_day: Some(1e300),
            ..Default::default()
        },
    ];
    for raw in &inputs {
        assert!(in_range(&normalize_with(raw, &LinearPolicy::default())));
        assert!(in_range(&normalize_with(raw, &LogPolicy::default())));
    }
}

#[test]
fn log_policy_is_more_sensitive_to_small_excess() {
    let raw = RawSignals {
        posts_per_day: Some(10.0),
        ..Default::default()
    };
    let linear = normalize_with(&raw, &LinearPolicy::default()).posting_frequency;
    let log = normalize_with(&raw, &LogPolicy::default()).posting_frequency;
    assert!(log > linear, "log {log} should exceed linear {linear}");
}

#[test]
fn custom_curve_policy() {
    let policy = LinearPolicy {
        posting_frequency: Curve::rising(0.0, 10.0),
        ..Default::default()
    };
    let raw = RawSignals {
        posts_per_day: Some(5.0),
        ..Default::default()
    };
    assert!((normalize_with(&raw, &policy).posting_frequency - 50.0).abs() < 1e-9);
}
