// Demo dataset loading — a JSON array of raw account records.
//
// This is not an ingestion pipeline. It exists so the CLI can score
// something other than the built-in sample.
//
// Format:
//   [{ "username": "someone", "followers": 12, "following": 900, ... }]

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::signals::{normalize_with, NormalizationPolicy, RawSignals, SignalFeatures};

/// One raw account record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    pub username: String,
    #[serde(flatten)]
    pub signals: RawSignals,
}

/// Parse records from a JSON string.
pub fn parse_records(json: &str) -> Result<Vec<AccountRecord>> {
    serde_json::from_str(json).context("Dataset must be a JSON array of account records")
}

/// Read and parse a dataset file.
pub fn load_records(path: &Path) -> Result<Vec<AccountRecord>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;
    let records = parse_records(&json)?;
    info!(
        path = %path.display(),
        records = records.len(),
        "Loaded dataset"
    );
    Ok(records)
}

/// Normalize every record. The record's username feeds the username
/// heuristic unless the signals carry their own.
pub fn normalize_records(
    records: &[AccountRecord],
    policy: &dyn NormalizationPolicy,
) -> Vec<(String, SignalFeatures)> {
    records
        .iter()
        .map(|record| {
            let mut raw = record.signals.clone();
            if raw.username.is_none() {
                raw.username = Some(record.username.clone());
            }
            (record.username.clone(), normalize_with(&raw, policy))
        })
        .collect()
}

/// Find an account's features by exact username. Usernames are unique
/// case-sensitively within a scoring pass, so lookup matches the same way.
pub fn find_features<'a>(
    features: &'a [(String, SignalFeatures)],
    username: &str,
) -> Option<&'a SignalFeatures> {
    let username = username.trim();
    features
        .iter()
        .find(|(name, _)| name == username)
        .map(|(_, f)| f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::normalize::LinearPolicy;

    #[test]
    fn test_parse_and_normalize() {
        let json = r#"[
            {"username": "free_crypto_bot", "followers": 1, "following": 20},
            {"username": "plain"}
        ]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 2);

        let normalized = normalize_records(&records, &LinearPolicy::default());
        assert_eq!(normalized[0].0, "free_crypto_bot");
        assert_eq!(normalized[0].1.follower_ratio, 100.0);
        // keyword hit from the record username
        assert_eq!(normalized[0].1.username_pattern, 30.0);
        assert_eq!(normalized[1].1, SignalFeatures::default());
    }

    #[test]
    fn test_flat_record_signals_are_read() {
        let json = r#"[{"username": "x", "followers": 1, "following": 5000,
                        "engagement_rate": 0.0, "posts_per_day": 200}]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(records[0].signals.followers, Some(1));
        assert_eq!(records[0].signals.posts_per_day, Some(200.0));

        let normalized = normalize_records(&records, &LinearPolicy::default());
        let features = &normalized[0].1;
        assert_eq!(features.follower_ratio, 100.0);
        assert_eq!(features.engagement_rate, 100.0);
        assert_eq!(features.posting_frequency, 100.0);
    }

    #[test]
    fn test_find_features_is_exact() {
        let features = vec![
            ("Alice".to_string(), SignalFeatures::new(90.0, 0.0, 0.0, 0.0, 0.0)),
            ("alice".to_string(), SignalFeatures::new(10.0, 0.0, 0.0, 0.0, 0.0)),
        ];
        let found = find_features(&features, " alice ").unwrap();
        assert_eq!(found.follower_ratio, 10.0);
        assert_eq!(find_features(&features, "Alice").unwrap().follower_ratio, 90.0);
        assert!(find_features(&features, "ALICE").is_none());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_records(r#"{"username": "x"}"#).is_err());
    }
}
