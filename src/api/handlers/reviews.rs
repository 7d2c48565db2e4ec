//! Review handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::state::AppState;
use crate::domain::{NewReview, Review};
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Create review routes
pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reviews))
        .route("/findReviewsByProductId/:product_id", get(reviews_by_product))
        .route("/createReview", post(create_review))
        .route("/updateLikes/:review_id", put(update_review_likes))
}

/// Likes update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLikesRequest {
    /// New likes counter value
    #[validate(range(min = 0, message = "Likes cannot be negative"))]
    pub likes: i64,
}

/// List all reviews
#[utoipa::path(
    get,
    path = "/reviews",
    tag = "Reviews",
    responses(
        (status = 200, description = "All reviews", body = [Review])
    )
)]
pub async fn list_reviews(State(state): State<AppState>) -> AppResult<Json<Vec<Review>>> {
    Ok(Json(state.reviews.list().await?))
}

/// Reviews of a product
#[utoipa::path(
    get,
    path = "/reviews/findReviewsByProductId/{product_id}",
    tag = "Reviews",
    params(("product_id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Reviews of the product", body = [Review]),
        (status = 404, description = "No reviews for the product")
    )
)]
pub async fn reviews_by_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<Vec<Review>>> {
    Ok(Json(state.reviews.by_product(product_id).await?))
}

/// Create a review
#[utoipa::path(
    post,
    path = "/reviews/createReview",
    tag = "Reviews",
    request_body = NewReview,
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    ValidatedJson(review): ValidatedJson<NewReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let created = state.reviews.create(review).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Set the likes counter of a review
#[utoipa::path(
    put,
    path = "/reviews/updateLikes/{review_id}",
    tag = "Reviews",
    params(("review_id" = i64, Path, description = "Review id")),
    request_body = UpdateLikesRequest,
    responses(
        (status = 200, description = "Likes updated", body = MessageResponse)
    )
)]
pub async fn update_review_likes(
    State(state): State<AppState>,
    Path(review_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateLikesRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.reviews.set_likes(review_id, payload.likes).await?;
    Ok(Json(MessageResponse::new("Likes updated successfully")))
}
