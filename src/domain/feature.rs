//! Feature and feature-value entities.
//!
//! Features describe a category (e.g. "clock speed" for CPUs); feature
//! values attach a concrete value to one product. The `features_values`
//! table keeps the original `id_product` / `id_feature` column names.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A feature definition belonging to a category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Feature {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
}

/// A feature/value pair attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeatureValue {
    pub id: i64,
    pub id_product: i64,
    pub id_feature: i64,
    pub value: String,
}

/// Insert payload for a feature value. The id may be client-assigned.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewFeatureValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub id_product: i64,
    pub id_feature: i64,
    #[validate(length(min = 1, message = "Value cannot be empty"))]
    pub value: String,
}

/// Partial update payload; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct FeatureValuePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_product: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_feature: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
