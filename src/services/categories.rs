//! Category service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Category, CategoryPatch, NewCategory};
use crate::errors::AppResult;
use crate::infra::Supabase;

const TABLE: &str = "categories";

/// Category use cases, one store query each.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// All categories
    async fn list(&self) -> AppResult<Vec<Category>>;

    /// Single category by id (404 when missing)
    async fn get(&self, id: i64) -> AppResult<Category>;

    /// Insert one category
    async fn create(&self, category: NewCategory) -> AppResult<()>;

    /// Insert a batch of categories
    async fn create_many(&self, categories: Vec<NewCategory>) -> AppResult<()>;

    /// Update the category with the given id
    async fn update(&self, id: i64, patch: CategoryPatch) -> AppResult<()>;

    /// Delete the category with the given id
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation backed by the hosted store.
pub struct CategoryManager {
    store: Arc<Supabase>,
}

impl CategoryManager {
    pub fn new(store: Arc<Supabase>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryService for CategoryManager {
    async fn list(&self) -> AppResult<Vec<Category>> {
        Ok(self.store.from(TABLE).select("*").fetch().await?)
    }

    async fn get(&self, id: i64) -> AppResult<Category> {
        Ok(self
            .store
            .from(TABLE)
            .select("*")
            .eq("id", id)
            .single()
            .fetch()
            .await?)
    }

    async fn create(&self, category: NewCategory) -> AppResult<()> {
        self.store.from(TABLE).insert([category]).execute().await?;
        Ok(())
    }

    async fn create_many(&self, categories: Vec<NewCategory>) -> AppResult<()> {
        self.store.from(TABLE).insert(categories).execute().await?;
        Ok(())
    }

    async fn update(&self, id: i64, patch: CategoryPatch) -> AppResult<()> {
        self.store
            .from(TABLE)
            .update(patch)
            .eq("id", id)
            .execute()
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.store
            .from(TABLE)
            .delete()
            .eq("id", id)
            .execute()
            .await?;
        Ok(())
    }
}
