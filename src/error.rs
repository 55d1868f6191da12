// Error types for the scoring and query layers.
//
// Normalization is total and has no error type. Everything that can fail is
// a configuration problem the caller must see immediately.

use thiserror::Error;

/// Errors raised while validating weights or scoring accounts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    #[error("invalid weight for `{name}`: {value} (weights must be finite and non-negative)")]
    InvalidWeight { name: String, value: f64 },

    #[error("weights sum to zero, cannot normalize")]
    DegenerateWeight,

    #[error("malformed weight entry `{0}` (expected name=value)")]
    MalformedWeights(String),

    #[error("account username must not be empty")]
    EmptyUsername,

    #[error("duplicate username `{0}` in scoring pass")]
    DuplicateUsername(String),
}

/// Errors raised when a query state cannot be served.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid query state: {0}")]
    InvalidQueryState(String),
}

pub type ScoringResult<T> = Result<T, ScoringError>;
