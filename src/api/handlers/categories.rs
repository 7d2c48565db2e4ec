//! Category handlers.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::api::extractors::{ValidatedBatch, ValidatedJson};
use crate::api::state::AppState;
use crate::domain::{Category, CategoryPatch, NewCategory};
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/all", post(create_categories))
        .route(
            "/:category_id",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories", body = [Category])
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.categories.list().await?))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/categories/{category_id}",
    tag = "Categories",
    params(("category_id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> AppResult<Json<Category>> {
    Ok(Json(state.categories.get(category_id).await?))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "Categories",
    request_body = NewCategory,
    responses(
        (status = 200, description = "Category created", body = MessageResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(category): ValidatedJson<NewCategory>,
) -> AppResult<Json<MessageResponse>> {
    state.categories.create(category).await?;
    Ok(Json(MessageResponse::new("Category created successfully")))
}

/// Create a batch of categories
#[utoipa::path(
    post,
    path = "/categories/all",
    tag = "Categories",
    request_body = Vec<NewCategory>,
    responses(
        (status = 200, description = "Categories created", body = MessageResponse)
    )
)]
pub async fn create_categories(
    State(state): State<AppState>,
    ValidatedBatch(categories): ValidatedBatch<NewCategory>,
) -> AppResult<Json<MessageResponse>> {
    state.categories.create_many(categories).await?;
    Ok(Json(MessageResponse::new(
        "Categories created successfully",
    )))
}

/// Update a category by id
#[utoipa::path(
    put,
    path = "/categories/{category_id}",
    tag = "Categories",
    params(("category_id" = i64, Path, description = "Category id")),
    request_body = CategoryPatch,
    responses(
        (status = 200, description = "Category updated", body = MessageResponse)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    ValidatedJson(patch): ValidatedJson<CategoryPatch>,
) -> AppResult<Json<MessageResponse>> {
    state.categories.update(category_id, patch).await?;
    Ok(Json(MessageResponse::new("Category updated successfully")))
}

/// Delete a category by id
#[utoipa::path(
    delete,
    path = "/categories/{category_id}",
    tag = "Categories",
    params(("category_id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse)
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.categories.delete(category_id).await?;
    Ok(Json(MessageResponse::new("Category deleted successfully")))
}
