//! Free-text component search.
//!
//! Backs the `/search` endpoint with a case-insensitive substring match
//! on the `components` table. Rows are forwarded as-is; the table's
//! schema belongs to the store.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppResult;
use crate::infra::Supabase;

const TABLE: &str = "components";

/// Search use cases.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Components whose name contains the query, case-insensitively
    async fn components_by_name(&self, query: &str) -> AppResult<Value>;
}

/// Concrete implementation backed by the hosted store.
pub struct SearchManager {
    store: Arc<Supabase>,
}

impl SearchManager {
    pub fn new(store: Arc<Supabase>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SearchService for SearchManager {
    async fn components_by_name(&self, query: &str) -> AppResult<Value> {
        Ok(self
            .store
            .from(TABLE)
            .select("*")
            .ilike("name", &format!("%{}%", query))
            .execute()
            .await?)
    }
}
