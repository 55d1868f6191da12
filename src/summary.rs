// Dashboard summary — category counts, flagged accounts and score histogram.

use serde::Serialize;

use crate::models::{Category, ScoredAccount};

/// Account counts per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub total: usize,
    pub genuine: usize,
    pub suspicious: usize,
    pub fake: usize,
}

impl CategoryCounts {
    pub fn from_accounts(accounts: &[ScoredAccount]) -> Self {
        accounts
            .iter()
            .fold(CategoryCounts::default(), |mut counts, account| {
                counts.total += 1;
                match account.category() {
                    Category::Genuine => counts.genuine += 1,
                    Category::Suspicious => counts.suspicious += 1,
                    Category::Fake => counts.fake += 1,
                }
                counts
            })
    }

    /// Suspicious plus fake.
    pub fn flagged(&self) -> usize {
        self.suspicious + self.fake
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Genuine => self.genuine,
            Category::Suspicious => self.suspicious,
            Category::Fake => self.fake,
        }
    }
}

/// One bar of the score distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBin {
    pub label: &'static str,
    pub count: usize,
}

const BIN_LABELS: [&str; 5] = ["0-20", "21-40", "41-60", "61-80", "81-100"];
const BIN_WIDTH: f64 = 20.0;

/// Histogram bin index for a score. Bins are closed on the upper edge:
/// [0,20], (20,40], (40,60], (60,80], (80,100].
fn bin_index(score: f64) -> usize {
    if score <= BIN_WIDTH {
        return 0;
    }
    let index = (score / BIN_WIDTH).ceil() as usize - 1;
    index.min(BIN_LABELS.len() - 1)
}

/// Score distribution in five 20-point bins.
pub fn score_histogram(accounts: &[ScoredAccount]) -> Vec<ScoreBin> {
    let mut counts = [0usize; 5];
    for account in accounts {
        counts[bin_index(account.score())] += 1;
    }
    BIN_LABELS
        .iter()
        .zip(counts)
        .map(|(&label, count)| ScoreBin { label, count })
        .collect()
}

/// Every non-genuine account, in the original order.
pub fn flagged_accounts(accounts: &[ScoredAccount]) -> Vec<&ScoredAccount> {
    accounts.iter().filter(|a| a.is_flagged()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accounts() -> Vec<ScoredAccount> {
        vec![
            ScoredAccount::new("a", 92.3),
            ScoredAccount::new("b", 58.2),
            ScoredAccount::new("c", 8.5),
            ScoredAccount::new("d", 42.9),
            ScoredAccount::new("e", 16.4),
            ScoredAccount::new("f", 86.1),
        ]
    }

    #[test]
    fn test_counts() {
        let counts = CategoryCounts::from_accounts(&accounts());
        assert_eq!(
            counts,
            CategoryCounts {
                total: 6,
                genuine: 2,
                suspicious: 2,
                fake: 2,
            }
        );
        assert_eq!(counts.flagged(), 4);
    }

    #[test]
    fn test_bin_edges() {
        assert_eq!(bin_index(0.0), 0);
        assert_eq!(bin_index(20.0), 0);
        assert_eq!(bin_index(20.01), 1);
        assert_eq!(bin_index(40.0), 1);
        assert_eq!(bin_index(60.0), 2);
        assert_eq!(bin_index(80.5), 4);
        assert_eq!(bin_index(100.0), 4);
    }

    #[test]
    fn test_histogram() {
        let bins = score_histogram(&accounts());
        let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![2, 0, 2, 0, 2]);
        assert_eq!(bins[4].label, "81-100");
    }

    #[test]
    fn test_flagged_keeps_order() {
        let all = accounts();
        let names: Vec<&str> = flagged_accounts(&all)
            .iter()
            .map(|a| a.username())
            .collect();
        assert_eq!(names, vec!["a", "b", "d", "f"]);
    }

    #[test]
    fn test_empty() {
        let counts = CategoryCounts::from_accounts(&[]);
        assert_eq!(counts.total, 0);
        assert!(score_histogram(&[]).iter().all(|b| b.count == 0));
    }
}
