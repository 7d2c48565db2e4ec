//! User profile entity.
//!
//! Profiles are keyed by the UUID the hosted auth system assigns; the
//! cart and likes columns are nullable arrays of product ids.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A profile row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub admin: Option<bool>,
    pub cart: Option<Vec<i64>>,
    pub likes: Option<Vec<i64>>,
}

/// Insert payload for a profile.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewProfile {
    pub id: Uuid,
    pub admin: Option<bool>,
    pub cart: Option<Vec<i64>>,
    pub likes: Option<Vec<i64>>,
}
