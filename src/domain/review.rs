//! Product review entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A review row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: i64,
    pub product_id: i64,
    pub rating: f64,
    pub comment: String,
    pub likes: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload for a review.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewReview {
    #[validate(range(min = 1, message = "Product id is required"))]
    pub product_id: i64,
    #[validate(range(min = 1.0, max = 5.0, message = "Rating must be between 1 and 5"))]
    pub rating: f64,
    #[validate(length(min = 1, message = "Comment cannot be empty"))]
    pub comment: String,
}
