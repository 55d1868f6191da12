// Suspicion scoring: weights, the score formula and category thresholds,
// and per-account explanations.

pub mod engine;
pub mod explain;
pub mod weights;

pub use engine::{classify, score, score_account, score_all};
pub use explain::{explain, Contribution, Explanation};
pub use weights::WeightVector;
