// Data models — the records that flow between scoring, query and output.
//
// A ScoredAccount can only be produced by the scoring engine, so its
// category always agrees with its score.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the Suspicious band.
pub const SUSPICIOUS_THRESHOLD: f64 = 30.0;
/// Lower bound (inclusive) of the Fake band.
pub const FAKE_THRESHOLD: f64 = 60.0;

/// Risk category derived from a suspicion score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Genuine,
    Suspicious,
    Fake,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Genuine, Category::Suspicious, Category::Fake];

    /// Determine the category from a suspicion score (0-100).
    ///
    /// Thresholds are inclusive on the lower edge: 30.0 is Suspicious and
    /// 60.0 is Fake. NaN falls through to Genuine.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= FAKE_THRESHOLD => Category::Fake,
            s if s >= SUSPICIOUS_THRESHOLD => Category::Suspicious,
            _ => Category::Genuine,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Genuine => "Genuine",
            Category::Suspicious => "Suspicious",
            Category::Fake => "Fake",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "genuine" => Ok(Category::Genuine),
            "suspicious" => Ok(Category::Suspicious),
            "fake" => Ok(Category::Fake),
            other => Err(format!(
                "unknown category `{other}` (expected genuine, suspicious or fake)"
            )),
        }
    }
}

/// A scored account in the results list.
///
/// Not deserializable: the category is never read from outside, it is always
/// derived from the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredAccount {
    username: String,
    score: f64,
    category: Category,
}

impl ScoredAccount {
    /// Build a record from a score, clamping it to 0-100 and deriving the
    /// category. Username validation happens in the scoring pass.
    pub fn new(username: impl Into<String>, score: f64) -> Self {
        let score = if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, 100.0)
        };
        Self {
            username: username.into(),
            score,
            category: Category::from_score(score),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_flagged(&self) -> bool {
        self.category != Category::Genuine
    }
}
