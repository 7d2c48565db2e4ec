//! Review service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NewReview, Review};
use crate::errors::{AppError, AppResult};
use crate::infra::Supabase;

const TABLE: &str = "reviews";

/// Review use cases.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// All reviews
    async fn list(&self) -> AppResult<Vec<Review>>;

    /// Reviews of one product; an empty result is a 404
    async fn by_product(&self, product_id: i64) -> AppResult<Vec<Review>>;

    /// Insert a review and return the created row
    async fn create(&self, review: NewReview) -> AppResult<Review>;

    /// Set the likes counter of a review
    async fn set_likes(&self, id: i64, likes: i64) -> AppResult<()>;
}

/// Concrete implementation backed by the hosted store.
pub struct ReviewManager {
    store: Arc<Supabase>,
}

impl ReviewManager {
    pub fn new(store: Arc<Supabase>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReviewService for ReviewManager {
    async fn list(&self) -> AppResult<Vec<Review>> {
        Ok(self.store.from(TABLE).select("*").fetch().await?)
    }

    async fn by_product(&self, product_id: i64) -> AppResult<Vec<Review>> {
        let reviews: Vec<Review> = self
            .store
            .from(TABLE)
            .select("*")
            .eq("product_id", product_id)
            .fetch()
            .await?;

        // A product with no reviews reads as not-found, not as an empty list.
        if reviews.is_empty() {
            return Err(AppError::NotFound);
        }
        Ok(reviews)
    }

    async fn create(&self, review: NewReview) -> AppResult<Review> {
        let mut rows: Vec<Review> = self.store.from(TABLE).insert([review]).fetch().await?;

        rows.pop()
            .ok_or_else(|| AppError::internal("store returned no row for created review"))
    }

    async fn set_likes(&self, id: i64, likes: i64) -> AppResult<()> {
        self.store
            .from(TABLE)
            .update(serde_json::json!({ "likes": likes }))
            .eq("id", id)
            .execute()
            .await?;
        Ok(())
    }
}
