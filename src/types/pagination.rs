//! Pagination types for list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Pagination query parameters, reusable across all list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, IntoParams)]
pub struct PaginationParams {
    /// Page number, 1-indexed
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (capped at the server maximum)
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    /// Calculate the row offset for a store query
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.limit()
    }

    /// Get the row limit capped at the maximum
    pub fn limit(&self) -> u64 {
        self.per_page.min(MAX_PAGE_SIZE)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}
