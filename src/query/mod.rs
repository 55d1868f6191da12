// Search, category filter and pagination over scored accounts.

pub mod service;
pub mod state;

pub use service::{query, total_pages, QueryPage};
pub use state::{CategoryFilter, QueryState, DEFAULT_PAGE_SIZE};
