//! Category entity with localized name and description columns.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A catalog category row. Names and descriptions are stored per locale
/// (Spanish, English, Catalan).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i64,
    pub category_name_es: String,
    pub category_name_en: String,
    pub category_name_ca: String,
    pub category_description_es: Option<String>,
    pub category_description_en: Option<String>,
    pub category_description_ca: Option<String>,
}

/// Insert payload for a category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewCategory {
    #[validate(length(min = 1, message = "Category name cannot be empty"))]
    pub category_name_es: String,
    #[validate(length(min = 1, message = "Category name cannot be empty"))]
    pub category_name_en: String,
    #[validate(length(min = 1, message = "Category name cannot be empty"))]
    pub category_name_ca: String,
    pub category_description_es: Option<String>,
    pub category_description_en: Option<String>,
    pub category_description_ca: Option<String>,
}

/// Partial update payload; absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, Default)]
pub struct CategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name_es: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name_ca: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_description_es: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_description_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_description_ca: Option<String>,
}
