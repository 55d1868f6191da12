// Account query service — filtered, paginated views of a scored account list.
//
// Filtering is a stable case-insensitive username search AND a category
// filter. Ordering is whatever the caller passed in; nothing here sorts.

use serde::Serialize;

use crate::models::ScoredAccount;

use super::state::QueryState;

/// One page of results plus what the pager needs to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPage {
    pub page: Vec<ScoredAccount>,
    /// Always at least 1, even when nothing matched
    pub total_pages: usize,
    /// The page actually served, after clamping the requested one
    pub page_number: usize,
    /// Number of accounts that passed both filters
    pub total_matches: usize,
}

/// Number of pages needed for `count` items: `max(1, ceil(count / page_size))`.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Filter, then paginate. The input slice is never modified.
pub fn query(accounts: &[ScoredAccount], state: &QueryState) -> QueryPage {
    let needle = state.search_text().to_lowercase();
    let filter = state.category_filter();

    let filtered: Vec<&ScoredAccount> = accounts
        .iter()
        .filter(|a| needle.is_empty() || a.username().to_lowercase().contains(&needle))
        .filter(|a| filter.matches(a.category()))
        .collect();

    let page_size = state.page_size();
    let total_matches = filtered.len();
    let total_pages = total_pages(total_matches, page_size);
    let page_number = state.page().clamp(1, total_pages);
    let offset = (page_number - 1) * page_size;

    let page: Vec<ScoredAccount> = filtered
        .into_iter()
        .skip(offset)
        .take(page_size)
        .cloned()
        .collect();

    QueryPage {
        page,
        total_pages,
        page_number,
        total_matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::query::state::CategoryFilter;

    fn accounts() -> Vec<ScoredAccount> {
        vec![
            ScoredAccount::new("tech_enthusiast_2024", 92.3),
            ScoredAccount::new("start_and_design_hub", 58.2),
            ScoredAccount::new("digital_nomad_life", 8.5),
            ScoredAccount::new("market_watch_daily", 42.9),
            ScoredAccount::new("city_food_trails", 16.4),
            ScoredAccount::new("crypto_giveaway_now", 86.1),
        ]
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 4), 1);
        assert_eq!(total_pages(4, 4), 1);
        assert_eq!(total_pages(5, 4), 2);
        assert_eq!(total_pages(6, 1), 6);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let state = QueryState::new(10).unwrap().with_search("CRYPTO");
        let result = query(&accounts(), &state);
        assert_eq!(result.total_matches, 1);
        assert_eq!(result.page[0].username(), "crypto_giveaway_now");
    }

    #[test]
    fn test_search_and_filter_are_conjunctive() {
        let state = QueryState::new(10)
            .unwrap()
            .with_search("_d")
            .with_category(Category::Suspicious);
        let result = query(&accounts(), &state);
        let names: Vec<&str> = result.page.iter().map(|a| a.username()).collect();
        assert_eq!(names, vec!["start_and_design_hub", "market_watch_daily"]);
    }

    #[test]
    fn test_page_past_end_is_clamped() {
        let state = QueryState::new(4).unwrap().with_page(9);
        let result = query(&accounts(), &state);
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.page_number, 2);
        assert_eq!(result.page.len(), 2);
    }

    #[test]
    fn test_no_matches_still_has_one_page() {
        let state = QueryState::new(4)
            .unwrap()
            .with_search("nobody")
            .with_page(3);
        let result = query(&accounts(), &state);
        assert!(result.page.is_empty());
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.page_number, 1);
    }

    #[test]
    fn test_filter_all() {
        let state = QueryState::new(100)
            .unwrap()
            .with_category(CategoryFilter::All);
        assert_eq!(query(&accounts(), &state).total_matches, 6);
    }
}
