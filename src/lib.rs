// Chaff: suspicious follower scoring and classification
//
// This is the library root. Data flows raw signals -> signals (normalize)
// -> scoring (score, classify, explain) -> query / summary -> output.

pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod output;
pub mod query;
pub mod sample;
pub mod scoring;
pub mod signals;
pub mod summary;

pub use error::{QueryError, ScoringError};
pub use models::{Category, ScoredAccount};
