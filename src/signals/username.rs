// Username pattern heuristic.
//
// Bulk-created accounts tend to share handle shapes: a word pair plus a
// number suffix, a year, piles of separators, or promo vocabulary. Each rule
// adds a fixed number of points; the total is capped at 100.

use std::sync::LazyLock;

use regex_lite::Regex;

static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3,}$").expect("trailing digit pattern is valid"));
static YEAR_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(19|20)\d{2}$").expect("year suffix pattern is valid"));
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_.\-]{2,}").expect("separator run pattern is valid"));

const SPAM_KEYWORDS: &[&str] = &[
    "giveaway", "free", "crypto", "promo", "follow", "bot", "earn", "cash", "deal",
];

const TRAILING_DIGITS_POINTS: f64 = 25.0;
const YEAR_SUFFIX_POINTS: f64 = 15.0;
const DIGIT_SHARE_POINTS: f64 = 15.0;
const SEPARATOR_POINTS: f64 = 10.0;
const KEYWORD_POINTS: f64 = 30.0;
const LENGTH_POINTS: f64 = 10.0;

const DIGIT_SHARE_MIN: f64 = 0.3;
const SEPARATOR_COUNT_MIN: usize = 3;
const LONG_NAME_MIN: usize = 21;

/// Score a username on a 0-100 scale. An empty name scores 0.
pub fn pattern_score(username: &str) -> f64 {
    let name = username.trim().trim_start_matches('@').to_lowercase();
    if name.is_empty() {
        return 0.0;
    }

    let mut score = 0.0;

    if TRAILING_DIGITS.is_match(&name) {
        score += TRAILING_DIGITS_POINTS;
    }
    if YEAR_SUFFIX.is_match(&name) {
        score += YEAR_SUFFIX_POINTS;
    }

    let total = name.chars().count();
    let digits = name.chars().filter(|c| c.is_ascii_digit()).count();
    if digits as f64 / total as f64 > DIGIT_SHARE_MIN {
        score += DIGIT_SHARE_POINTS;
    }

    let separators = name.chars().filter(|c| matches!(c, '_' | '.' | '-')).count();
    if SEPARATOR_RUN.is_match(&name) || separators >= SEPARATOR_COUNT_MIN {
        score += SEPARATOR_POINTS;
    }

    if SPAM_KEYWORDS.iter().any(|kw| name.contains(kw)) {
        score += KEYWORD_POINTS;
    }

    if total >= LONG_NAME_MIN {
        score += LENGTH_POINTS;
    }

    f64::min(score, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_scores_zero() {
        assert_eq!(pattern_score("digital_nomad_life"), 0.0);
    }

    #[test]
    fn test_year_suffix() {
        // trailing digits (25) + year (15)
        assert_eq!(pattern_score("tech_enthusiast_2024"), 40.0);
    }

    #[test]
    fn test_spam_keyword() {
        assert_eq!(pattern_score("crypto_giveaway_now"), 30.0);
    }

    #[test]
    fn test_digit_heavy_name() {
        // trailing digits (25) + digit share 7/10 (15)
        assert_eq!(pattern_score("abc4829173"), 40.0);
    }

    #[test]
    fn test_separator_run() {
        assert_eq!(pattern_score("jane__doe"), 10.0);
    }

    #[test]
    fn test_empty_and_at_prefix() {
        assert_eq!(pattern_score(""), 0.0);
        assert_eq!(pattern_score("@"), 0.0);
        assert_eq!(
            pattern_score("@tech_enthusiast_2024"),
            pattern_score("tech_enthusiast_2024")
        );
    }

    #[test]
    fn test_capped_at_100() {
        // 25 + 15 + 15 + 10 + 30 + 10 = 105 before the cap
        assert_eq!(pattern_score("free__crypto_bot_00000002024"), 100.0);
    }
}
