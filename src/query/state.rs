// Query state — what the results view asks for on each render.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::models::Category;

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Category filter for the results list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Search text, category filter and page request, passed by value on every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search_text: String,
    category_filter: CategoryFilter,
    page: usize,
    page_size: usize,
}

impl QueryState {
    /// Start at page 1 with no search and no filter.
    ///
    /// A zero page size cannot be corrected sensibly, so it is rejected.
    pub fn new(page_size: usize) -> Result<Self, QueryError> {
        if page_size == 0 {
            return Err(QueryError::InvalidQueryState(
                "page size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            search_text: String::new(),
            category_filter: CategoryFilter::All,
            page: 1,
            page_size,
        })
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_category(mut self, filter: impl Into<CategoryFilter>) -> Self {
        self.category_filter = filter.into();
        self
    }

    /// Request a page. Page 0 is treated as page 1; pages past the end are
    /// clamped when the query runs.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn category_filter(&self) -> CategoryFilter {
        self.category_filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category_filter: CategoryFilter::All,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
