//! Feature-value handlers.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use crate::api::extractors::{ValidatedBatch, ValidatedJson};
use crate::api::state::AppState;
use crate::domain::{Feature, FeatureValue, FeatureValuePatch, NewFeatureValue};
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Create feature-value routes
pub fn value_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_values).post(create_value))
        .route("/all", post(create_values))
        .route("/features/:category_id", get(features_by_category))
        .route("/feature/:feature_id", get(values_by_feature))
        .route(
            "/product/:product_id",
            get(values_by_product)
                .put(update_values_by_product)
                .delete(delete_values_by_product),
        )
        .route("/product/:product_id/features", get(product_features))
        .route(
            "/:value_id",
            get(get_value).put(update_value).delete(delete_value),
        )
}

/// List all feature values
#[utoipa::path(
    get,
    path = "/values",
    tag = "Values",
    responses(
        (status = 200, description = "All feature values", body = [FeatureValue])
    )
)]
pub async fn list_values(State(state): State<AppState>) -> AppResult<Json<Vec<FeatureValue>>> {
    Ok(Json(state.values.list().await?))
}

/// Get a feature value by id
#[utoipa::path(
    get,
    path = "/values/{value_id}",
    tag = "Values",
    params(("value_id" = i64, Path, description = "Feature value id")),
    responses(
        (status = 200, description = "The feature value", body = FeatureValue),
        (status = 404, description = "Value not found")
    )
)]
pub async fn get_value(
    State(state): State<AppState>,
    Path(value_id): Path<i64>,
) -> AppResult<Json<FeatureValue>> {
    Ok(Json(state.values.get(value_id).await?))
}

/// Feature values of a product
#[utoipa::path(
    get,
    path = "/values/product/{product_id}",
    tag = "Values",
    params(("product_id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Values of the product", body = [FeatureValue])
    )
)]
pub async fn values_by_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<Vec<FeatureValue>>> {
    Ok(Json(state.values.by_product(product_id).await?))
}

/// Joined feature/value rows of a product
#[utoipa::path(
    get,
    path = "/values/product/{product_id}/features",
    tag = "Values",
    params(("product_id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Feature/value rows of the product")
    )
)]
pub async fn product_features(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<Value>> {
    Ok(Json(state.values.product_features(product_id).await?))
}

/// Feature values attached to a feature
#[utoipa::path(
    get,
    path = "/values/feature/{feature_id}",
    tag = "Values",
    params(("feature_id" = i64, Path, description = "Feature id")),
    responses(
        (status = 200, description = "Values of the feature", body = [FeatureValue])
    )
)]
pub async fn values_by_feature(
    State(state): State<AppState>,
    Path(feature_id): Path<i64>,
) -> AppResult<Json<Vec<FeatureValue>>> {
    Ok(Json(state.values.by_feature(feature_id).await?))
}

/// Feature definitions of a category
#[utoipa::path(
    get,
    path = "/values/features/{category_id}",
    tag = "Values",
    params(("category_id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Features of the category", body = [Feature])
    )
)]
pub async fn features_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> AppResult<Json<Vec<Feature>>> {
    Ok(Json(state.values.features_by_category(category_id).await?))
}

/// Create a feature value
#[utoipa::path(
    post,
    path = "/values",
    tag = "Values",
    request_body = NewFeatureValue,
    responses(
        (status = 200, description = "Value created", body = MessageResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_value(
    State(state): State<AppState>,
    ValidatedJson(value): ValidatedJson<NewFeatureValue>,
) -> AppResult<Json<MessageResponse>> {
    state.values.create(value).await?;
    Ok(Json(MessageResponse::new("Value created successfully")))
}

/// Create a batch of feature values
#[utoipa::path(
    post,
    path = "/values/all",
    tag = "Values",
    request_body = Vec<NewFeatureValue>,
    responses(
        (status = 200, description = "Values created", body = MessageResponse)
    )
)]
pub async fn create_values(
    State(state): State<AppState>,
    ValidatedBatch(values): ValidatedBatch<NewFeatureValue>,
) -> AppResult<Json<MessageResponse>> {
    state.values.create_many(values).await?;
    Ok(Json(MessageResponse::new("Values created successfully")))
}

/// Update a feature value by id
#[utoipa::path(
    put,
    path = "/values/{value_id}",
    tag = "Values",
    params(("value_id" = i64, Path, description = "Feature value id")),
    request_body = FeatureValuePatch,
    responses(
        (status = 200, description = "Value updated", body = MessageResponse)
    )
)]
pub async fn update_value(
    State(state): State<AppState>,
    Path(value_id): Path<i64>,
    ValidatedJson(patch): ValidatedJson<FeatureValuePatch>,
) -> AppResult<Json<MessageResponse>> {
    state.values.update(value_id, patch).await?;
    Ok(Json(MessageResponse::new("Value updated successfully")))
}

/// Update every feature value of a product
#[utoipa::path(
    put,
    path = "/values/product/{product_id}",
    tag = "Values",
    params(("product_id" = i64, Path, description = "Product id")),
    request_body = FeatureValuePatch,
    responses(
        (status = 200, description = "Values updated", body = MessageResponse)
    )
)]
pub async fn update_values_by_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    ValidatedJson(patch): ValidatedJson<FeatureValuePatch>,
) -> AppResult<Json<MessageResponse>> {
    state.values.update_by_product(product_id, patch).await?;
    Ok(Json(MessageResponse::new("Value updated successfully")))
}

/// Delete a feature value by id
#[utoipa::path(
    delete,
    path = "/values/{value_id}",
    tag = "Values",
    params(("value_id" = i64, Path, description = "Feature value id")),
    responses(
        (status = 200, description = "Value deleted", body = MessageResponse)
    )
)]
pub async fn delete_value(
    State(state): State<AppState>,
    Path(value_id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.values.delete(value_id).await?;
    Ok(Json(MessageResponse::new("Value deleted successfully")))
}

/// Delete every feature value of a product
#[utoipa::path(
    delete,
    path = "/values/product/{product_id}",
    tag = "Values",
    params(("product_id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Values deleted", body = MessageResponse)
    )
)]
pub async fn delete_values_by_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.values.delete_by_product(product_id).await?;
    Ok(Json(MessageResponse::new("Value deleted successfully")))
}
