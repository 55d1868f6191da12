use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::query::DEFAULT_PAGE_SIZE;
use crate::scoring::WeightVector;
use crate::signals::PolicyKind;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so an empty environment is a valid configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Weight vector (CHAFF_WEIGHTS, e.g. "follower_ratio=0.25,engagement_rate=0.25")
    pub weights: WeightVector,
    /// Results per page (CHAFF_PAGE_SIZE, default 4)
    pub page_size: usize,
    /// Raw-to-feature curve (CHAFF_NORMALIZER: linear | log)
    pub normalizer: PolicyKind,
    /// Default dataset file when --input is not given (CHAFF_DATASET)
    pub dataset: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: WeightVector::default(),
            page_size: DEFAULT_PAGE_SIZE,
            normalizer: PolicyKind::default(),
            dataset: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Malformed values are errors rather than silent fallbacks; a bad
    /// weight string in particular would skew every classification.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup (the environment in `load`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let weights = match lookup("CHAFF_WEIGHTS") {
            Some(spec) if !spec.trim().is_empty() => {
                WeightVector::parse(&spec).context("CHAFF_WEIGHTS is malformed")?
            }
            _ => WeightVector::default(),
        };

        let page_size = match lookup("CHAFF_PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| {
                    format!("CHAFF_PAGE_SIZE must be a positive integer, got `{raw}`")
                })?,
            None => DEFAULT_PAGE_SIZE,
        };

        let normalizer = match lookup("CHAFF_NORMALIZER") {
            Some(raw) => raw
                .parse::<PolicyKind>()
                .map_err(anyhow::Error::msg)
                .context("CHAFF_NORMALIZER is invalid")?,
            None => PolicyKind::default(),
        };

        let dataset = lookup("CHAFF_DATASET")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        info!(
            page_size,
            normalizer = ?normalizer,
            dataset = ?dataset,
            "Configuration loaded"
        );

        Ok(Self {
            weights,
            page_size,
            normalizer,
            dataset,
        })
    }

    /// Check that the weight vector can actually be used for scoring.
    /// Call this before any operation that scores accounts.
    pub fn require_valid_weights(&self) -> Result<()> {
        self.weights.validate().context(
            "CHAFF_WEIGHTS is not usable for scoring.\n\
             Weights must be non-negative and at least one documented feature must be weighted.",
        )
    }
}
