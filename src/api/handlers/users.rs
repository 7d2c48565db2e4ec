//! Profile handlers (users, carts, likes).

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::state::AppState;
use crate::domain::{NewProfile, Profile};
use crate::errors::AppResult;
use crate::services::LikeStatus;
use crate::types::MessageResponse;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_profiles).post(create_profile))
        .route("/cart", post(add_to_cart))
        .route("/cart/:user_id", delete(empty_cart))
        .route("/likes", post(add_to_likes).delete(remove_from_likes))
        .route("/likes/check", get(check_like))
        .route("/:user_id", get(get_profile))
}

/// Cart/likes mutation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    /// Profile id
    pub user_id: Uuid,
    /// Product to add or remove
    pub product_id: i64,
}

/// Like lookup query
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct LikeQuery {
    pub user_id: Uuid,
    pub product_id: i64,
}

/// Like lookup response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub is_liked: bool,
}

/// List all profiles
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All profiles", body = [Profile])
    )
)]
pub async fn list_profiles(State(state): State<AppState>) -> AppResult<Json<Vec<Profile>>> {
    Ok(Json(state.users.list().await?))
}

/// Get a profile by id
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "Users",
    params(("user_id" = Uuid, Path, description = "Profile id")),
    responses(
        (status = 200, description = "The profile", body = Profile),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<Profile>> {
    Ok(Json(state.users.get(user_id).await?))
}

/// Create a profile
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = NewProfile,
    responses(
        (status = 200, description = "Profile created", body = MessageResponse)
    )
)]
pub async fn create_profile(
    State(state): State<AppState>,
    ValidatedJson(profile): ValidatedJson<NewProfile>,
) -> AppResult<Json<MessageResponse>> {
    state.users.create(profile).await?;
    Ok(Json(MessageResponse::new("User created successfully")))
}

/// Add a product to a user's cart
#[utoipa::path(
    post,
    path = "/users/cart",
    tag = "Users",
    request_body = CartItemRequest,
    responses(
        (status = 200, description = "Product added", body = MessageResponse),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CartItemRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .users
        .add_to_cart(payload.user_id, payload.product_id)
        .await?;
    Ok(Json(MessageResponse::new(
        "Product added to cart successfully",
    )))
}

/// Empty a user's cart
#[utoipa::path(
    delete,
    path = "/users/cart/{user_id}",
    tag = "Users",
    params(("user_id" = Uuid, Path, description = "Profile id")),
    responses(
        (status = 200, description = "Cart emptied", body = MessageResponse)
    )
)]
pub async fn empty_cart(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.users.empty_cart(user_id).await?;
    Ok(Json(MessageResponse::new("Cart emptied successfully")))
}

/// Add a product to a user's likes
#[utoipa::path(
    post,
    path = "/users/likes",
    tag = "Users",
    request_body = CartItemRequest,
    responses(
        (status = 200, description = "Product liked", body = MessageResponse),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn add_to_likes(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CartItemRequest>,
) -> AppResult<Json<MessageResponse>> {
    let status = state
        .users
        .add_to_likes(payload.user_id, payload.product_id)
        .await?;

    let message = match status {
        LikeStatus::AlreadyLiked => "Product already liked by user",
        _ => "Product added to likes successfully",
    };
    Ok(Json(MessageResponse::new(message)))
}

/// Remove a product from a user's likes
#[utoipa::path(
    delete,
    path = "/users/likes",
    tag = "Users",
    request_body = CartItemRequest,
    responses(
        (status = 200, description = "Product unliked", body = MessageResponse),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn remove_from_likes(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CartItemRequest>,
) -> AppResult<Json<MessageResponse>> {
    let status = state
        .users
        .remove_from_likes(payload.user_id, payload.product_id)
        .await?;

    let message = match status {
        LikeStatus::NotPresent => "Product not found in user's likes",
        _ => "Product removed from likes successfully",
    };
    Ok(Json(MessageResponse::new(message)))
}

/// Check whether a product is in a user's likes
#[utoipa::path(
    get,
    path = "/users/likes/check",
    tag = "Users",
    params(LikeQuery),
    responses(
        (status = 200, description = "Like state", body = LikeResponse),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn check_like(
    State(state): State<AppState>,
    Query(query): Query<LikeQuery>,
) -> AppResult<Json<LikeResponse>> {
    let is_liked = state.users.is_liked(query.user_id, query.product_id).await?;
    Ok(Json(LikeResponse { is_liked }))
}
