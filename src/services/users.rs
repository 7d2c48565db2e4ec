//! Profile service (users, carts, likes).
//!
//! Cart and like mutations are the one place the API issues a short
//! fixed sequence of queries: read the current array, modify it in
//! memory, write it back.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::{NewProfile, Profile};
use crate::errors::AppResult;
use crate::infra::Supabase;

const TABLE: &str = "profiles";

/// Outcome of an idempotent likes mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeStatus {
    Added,
    AlreadyLiked,
    Removed,
    NotPresent,
}

/// Profile use cases.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// All profiles
    async fn list(&self) -> AppResult<Vec<Profile>>;

    /// Single profile by id (404 when missing)
    async fn get(&self, id: Uuid) -> AppResult<Profile>;

    /// Insert one profile
    async fn create(&self, profile: NewProfile) -> AppResult<()>;

    /// Append a product to the user's cart
    async fn add_to_cart(&self, user_id: Uuid, product_id: i64) -> AppResult<()>;

    /// Reset the user's cart to empty
    async fn empty_cart(&self, user_id: Uuid) -> AppResult<()>;

    /// Append a product to the user's likes unless already present
    async fn add_to_likes(&self, user_id: Uuid, product_id: i64) -> AppResult<LikeStatus>;

    /// Remove a product from the user's likes
    async fn remove_from_likes(&self, user_id: Uuid, product_id: i64) -> AppResult<LikeStatus>;

    /// Whether the product is in the user's likes
    async fn is_liked(&self, user_id: Uuid, product_id: i64) -> AppResult<bool>;
}

/// Row projection for the read-modify-write sequences.
#[derive(Debug, Deserialize)]
struct ArrayRow {
    #[serde(default)]
    cart: Option<Vec<i64>>,
    #[serde(default)]
    likes: Option<Vec<i64>>,
}

/// Concrete implementation backed by the hosted store.
pub struct ProfileManager {
    store: Arc<Supabase>,
}

impl ProfileManager {
    pub fn new(store: Arc<Supabase>) -> Self {
        Self { store }
    }

    /// Fetch one column-projected row for a user (404 when missing).
    async fn fetch_row(&self, user_id: Uuid, columns: &str) -> AppResult<ArrayRow> {
        Ok(self
            .store
            .from(TABLE)
            .select(columns)
            .eq("id", user_id)
            .single()
            .fetch()
            .await?)
    }

    /// Write one array column back for a user.
    async fn write_column(&self, user_id: Uuid, column: &str, value: Value) -> AppResult<()> {
        let mut patch = serde_json::Map::new();
        patch.insert(column.to_string(), value);

        self.store
            .from(TABLE)
            .update(Value::Object(patch))
            .eq("id", user_id)
            .execute()
            .await?;
        Ok(())
    }
}

#[async_trait]
impl UserService for ProfileManager {
    async fn list(&self) -> AppResult<Vec<Profile>> {
        Ok(self.store.from(TABLE).select("*").fetch().await?)
    }

    async fn get(&self, id: Uuid) -> AppResult<Profile> {
        Ok(self
            .store
            .from(TABLE)
            .select("*")
            .eq("id", id)
            .single()
            .fetch()
            .await?)
    }

    async fn create(&self, profile: NewProfile) -> AppResult<()> {
        self.store.from(TABLE).insert([profile]).execute().await?;
        Ok(())
    }

    async fn add_to_cart(&self, user_id: Uuid, product_id: i64) -> AppResult<()> {
        let row = self.fetch_row(user_id, "id, cart").await?;

        let mut cart = row.cart.unwrap_or_default();
        cart.push(product_id);

        self.write_column(user_id, "cart", serde_json::json!(cart))
            .await
    }

    async fn empty_cart(&self, user_id: Uuid) -> AppResult<()> {
        self.write_column(user_id, "cart", Value::Null).await
    }

    async fn add_to_likes(&self, user_id: Uuid, product_id: i64) -> AppResult<LikeStatus> {
        let row = self.fetch_row(user_id, "id, likes").await?;

        let mut likes = row.likes.unwrap_or_default();
        if likes.contains(&product_id) {
            return Ok(LikeStatus::AlreadyLiked);
        }
        likes.push(product_id);

        self.write_column(user_id, "likes", serde_json::json!(likes))
            .await?;
        Ok(LikeStatus::Added)
    }

    async fn remove_from_likes(&self, user_id: Uuid, product_id: i64) -> AppResult<LikeStatus> {
        let row = self.fetch_row(user_id, "id, likes").await?;

        let mut likes = row.likes.unwrap_or_default();
        let Some(index) = likes.iter().position(|id| *id == product_id) else {
            return Ok(LikeStatus::NotPresent);
        };
        likes.remove(index);

        self.write_column(user_id, "likes", serde_json::json!(likes))
            .await?;
        Ok(LikeStatus::Removed)
    }

    async fn is_liked(&self, user_id: Uuid, product_id: i64) -> AppResult<bool> {
        let row = self.fetch_row(user_id, "likes").await?;
        Ok(row.likes.unwrap_or_default().contains(&product_id))
    }
}
