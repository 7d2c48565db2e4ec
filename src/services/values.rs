//! Feature-value service.
//!
//! Feature values live in the `features_values` table; feature
//! definitions in `features`. The per-product feature listing goes
//! through the `product_features_query` stored procedure, which joins
//! the two on the store side.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Feature, FeatureValue, FeatureValuePatch, NewFeatureValue};
use crate::errors::AppResult;
use crate::infra::Supabase;

const VALUES_TABLE: &str = "features_values";
const FEATURES_TABLE: &str = "features";
const PRODUCT_FEATURES_FN: &str = "product_features_query";

/// Feature-value use cases.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ValueService: Send + Sync {
    /// All feature values
    async fn list(&self) -> AppResult<Vec<FeatureValue>>;

    /// Single value by id (404 when missing)
    async fn get(&self, id: i64) -> AppResult<FeatureValue>;

    /// Values attached to one product
    async fn by_product(&self, product_id: i64) -> AppResult<Vec<FeatureValue>>;

    /// Values attached to one feature
    async fn by_feature(&self, feature_id: i64) -> AppResult<Vec<FeatureValue>>;

    /// Feature definitions of a category
    async fn features_by_category(&self, category_id: i64) -> AppResult<Vec<Feature>>;

    /// Joined feature/value rows for a product (stored procedure)
    async fn product_features(&self, product_id: i64) -> AppResult<Value>;

    /// Insert one value
    async fn create(&self, value: NewFeatureValue) -> AppResult<()>;

    /// Insert a batch of values
    async fn create_many(&self, values: Vec<NewFeatureValue>) -> AppResult<()>;

    /// Update the value with the given id
    async fn update(&self, id: i64, patch: FeatureValuePatch) -> AppResult<()>;

    /// Update every value of one product
    async fn update_by_product(&self, product_id: i64, patch: FeatureValuePatch) -> AppResult<()>;

    /// Delete the value with the given id
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Delete every value of one product
    async fn delete_by_product(&self, product_id: i64) -> AppResult<()>;
}

/// Concrete implementation backed by the hosted store.
pub struct ValueManager {
    store: Arc<Supabase>,
}

impl ValueManager {
    pub fn new(store: Arc<Supabase>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ValueService for ValueManager {
    async fn list(&self) -> AppResult<Vec<FeatureValue>> {
        Ok(self.store.from(VALUES_TABLE).select("*").fetch().await?)
    }

    async fn get(&self, id: i64) -> AppResult<FeatureValue> {
        Ok(self
            .store
            .from(VALUES_TABLE)
            .select("*")
            .eq("id", id)
            .single()
            .fetch()
            .await?)
    }

    async fn by_product(&self, product_id: i64) -> AppResult<Vec<FeatureValue>> {
        Ok(self
            .store
            .from(VALUES_TABLE)
            .select("*")
            .eq("id_product", product_id)
            .fetch()
            .await?)
    }

    async fn by_feature(&self, feature_id: i64) -> AppResult<Vec<FeatureValue>> {
        Ok(self
            .store
            .from(VALUES_TABLE)
            .select("*")
            .eq("id_feature", feature_id)
            .fetch()
            .await?)
    }

    async fn features_by_category(&self, category_id: i64) -> AppResult<Vec<Feature>> {
        Ok(self
            .store
            .from(FEATURES_TABLE)
            .select("*")
            .eq("category_id", category_id)
            .fetch()
            .await?)
    }

    async fn product_features(&self, product_id: i64) -> AppResult<Value> {
        Ok(self
            .store
            .rpc(
                PRODUCT_FEATURES_FN,
                serde_json::json!({ "product_id": product_id }),
            )
            .await?)
    }

    async fn create(&self, value: NewFeatureValue) -> AppResult<()> {
        self.store
            .from(VALUES_TABLE)
            .insert([value])
            .execute()
            .await?;
        Ok(())
    }

    async fn create_many(&self, values: Vec<NewFeatureValue>) -> AppResult<()> {
        self.store
            .from(VALUES_TABLE)
            .insert(values)
            .execute()
            .await?;
        Ok(())
    }

    async fn update(&self, id: i64, patch: FeatureValuePatch) -> AppResult<()> {
        self.store
            .from(VALUES_TABLE)
            .update(patch)
            .eq("id", id)
            .execute()
            .await?;
        Ok(())
    }

    async fn update_by_product(&self, product_id: i64, patch: FeatureValuePatch) -> AppResult<()> {
        self.store
            .from(VALUES_TABLE)
            .update(patch)
            .eq("id_product", product_id)
            .execute()
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.store
            .from(VALUES_TABLE)
            .delete()
            .eq("id", id)
            .execute()
            .await?;
        Ok(())
    }

    async fn delete_by_product(&self, product_id: i64) -> AppResult<()> {
        self.store
            .from(VALUES_TABLE)
            .delete()
            .eq("id_product", product_id)
            .execute()
            .await?;
        Ok(())
    }
}
