//! Product handlers.
//!
//! The search routes keep the original path shapes
//! (`/searchByPrice/{min}/{max}`, …); each one builds a
//! [`ProductFilter`] and hands it to the service. Pagination and price
//! ordering come in as query parameters on top of any search route.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::{ValidatedBatch, ValidatedJson};
use crate::api::state::AppState;
use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::domain::{NewProduct, Product, ProductPatch};
use crate::errors::{AppError, AppResult};
use crate::services::{ProductFilter, SortOrder};
use crate::types::{MessageResponse, PaginationParams};

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/all", post(create_products))
        .route("/offer", get(offer_products))
        .route("/productsByCategory/:category_id", get(products_by_category))
        .route("/search/:name", get(search_by_name))
        .route("/searchByPrice/:min_price/:max_price", get(search_by_price))
        .route(
            "/searchByPriceAndName/:min_price/:max_price/:name",
            get(search_by_price_and_name),
        )
        .route(
            "/searchByPriceAndCategory/:min_price/:max_price/:category_id",
            get(search_by_price_and_category),
        )
        .route(
            "/searchByAllFilters/:min_price/:max_price/:name/:category_id",
            get(search_by_all_filters),
        )
        .route(
            "/:product_id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Windowing and ordering accepted by the list/search routes.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ProductListQuery {
    /// Page number, 1-indexed
    pub page: Option<u64>,
    /// Items per page
    pub per_page: Option<u64>,
    /// Price ordering: `asc` or `desc`
    pub order: Option<String>,
}

impl ProductListQuery {
    fn pages(&self) -> Option<PaginationParams> {
        if self.page.is_none() && self.per_page.is_none() {
            return None;
        }
        Some(PaginationParams {
            page: self.page.unwrap_or(DEFAULT_PAGE_NUMBER),
            per_page: self.per_page.unwrap_or(DEFAULT_PAGE_SIZE),
        })
    }

    fn sort_order(&self) -> AppResult<Option<SortOrder>> {
        match self.order.as_deref() {
            None => Ok(None),
            Some("asc") => Ok(Some(SortOrder::Asc)),
            Some("desc") => Ok(Some(SortOrder::Desc)),
            Some(other) => Err(AppError::bad_request(format!(
                "order must be 'asc' or 'desc', got '{}'",
                other
            ))),
        }
    }

    fn into_filter(self) -> AppResult<ProductFilter> {
        Ok(ProductFilter {
            order: self.sort_order()?,
            pages: self.pages(),
            ..Default::default()
        })
    }
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "All products", body = [Product])
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let order = query.sort_order()?;
    Ok(Json(state.products.list(query.pages(), order).await?))
}

/// List products currently on offer
#[utoipa::path(
    get,
    path = "/products/offer",
    tag = "Products",
    responses(
        (status = 200, description = "Products on offer", body = [Product])
    )
)]
pub async fn offer_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(state.products.offers().await?))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/products/{product_id}",
    tag = "Products",
    params(("product_id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<Product>> {
    Ok(Json(state.products.get(product_id).await?))
}

/// First products of a category
#[utoipa::path(
    get,
    path = "/products/productsByCategory/{category_id}",
    tag = "Products",
    params(("category_id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Products in the category", body = [Product])
    )
)]
pub async fn products_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(state.products.by_category(category_id).await?))
}

/// Search products by name
#[utoipa::path(
    get,
    path = "/products/search/{name}",
    tag = "Products",
    params(
        ("name" = String, Path, description = "Name fragment"),
        ProductListQuery
    ),
    responses(
        (status = 200, description = "Matching products", body = [Product])
    )
)]
pub async fn search_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<ProductListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let filter = ProductFilter {
        name: Some(name),
        ..query.into_filter()?
    };
    Ok(Json(state.products.search(filter).await?))
}

/// Search products by price range
#[utoipa::path(
    get,
    path = "/products/searchByPrice/{min_price}/{max_price}",
    tag = "Products",
    params(
        ("min_price" = f64, Path, description = "Lower price bound"),
        ("max_price" = f64, Path, description = "Upper price bound"),
        ProductListQuery
    ),
    responses(
        (status = 200, description = "Matching products", body = [Product])
    )
)]
pub async fn search_by_price(
    State(state): State<AppState>,
    Path((min_price, max_price)): Path<(f64, f64)>,
    Query(query): Query<ProductListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let filter = ProductFilter {
        min_price: Some(min_price),
        max_price: Some(max_price),
        ..query.into_filter()?
    };
    Ok(Json(state.products.search(filter).await?))
}

/// Search products by price range and name
#[utoipa::path(
    get,
    path = "/products/searchByPriceAndName/{min_price}/{max_price}/{name}",
    tag = "Products",
    params(
        ("min_price" = f64, Path, description = "Lower price bound"),
        ("max_price" = f64, Path, description = "Upper price bound"),
        ("name" = String, Path, description = "Name fragment"),
        ProductListQuery
    ),
    responses(
        (status = 200, description = "Matching products", body = [Product])
    )
)]
pub async fn search_by_price_and_name(
    State(state): State<AppState>,
    Path((min_price, max_price, name)): Path<(f64, f64, String)>,
    Query(query): Query<ProductListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let filter = ProductFilter {
        min_price: Some(min_price),
        max_price: Some(max_price),
        name: Some(name),
        ..query.into_filter()?
    };
    Ok(Json(state.products.search(filter).await?))
}

/// Search products by price range and category
#[utoipa::path(
    get,
    path = "/products/searchByPriceAndCategory/{min_price}/{max_price}/{category_id}",
    tag = "Products",
    params(
        ("min_price" = f64, Path, description = "Lower price bound"),
        ("max_price" = f64, Path, description = "Upper price bound"),
        ("category_id" = i64, Path, description = "Category id"),
        ProductListQuery
    ),
    responses(
        (status = 200, description = "Matching products", body = [Product])
    )
)]
pub async fn search_by_price_and_category(
    State(state): State<AppState>,
    Path((min_price, max_price, category_id)): Path<(f64, f64, i64)>,
    Query(query): Query<ProductListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let filter = ProductFilter {
        min_price: Some(min_price),
        max_price: Some(max_price),
        category_id: Some(category_id),
        ..query.into_filter()?
    };
    Ok(Json(state.products.search(filter).await?))
}

/// Search products with every filter combined
#[utoipa::path(
    get,
    path = "/products/searchByAllFilters/{min_price}/{max_price}/{name}/{category_id}",
    tag = "Products",
    params(
        ("min_price" = f64, Path, description = "Lower price bound"),
        ("max_price" = f64, Path, description = "Upper price bound"),
        ("name" = String, Path, description = "Name fragment"),
        ("category_id" = i64, Path, description = "Category id"),
        ProductListQuery
    ),
    responses(
        (status = 200, description = "Matching products", body = [Product])
    )
)]
pub async fn search_by_all_filters(
    State(state): State<AppState>,
    Path((min_price, max_price, name, category_id)): Path<(f64, f64, String, i64)>,
    Query(query): Query<ProductListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let filter = ProductFilter {
        min_price: Some(min_price),
        max_price: Some(max_price),
        name: Some(name),
        category_id: Some(category_id),
        ..query.into_filter()?
    };
    Ok(Json(state.products.search(filter).await?))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 200, description = "Product created", body = MessageResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(product): ValidatedJson<NewProduct>,
) -> AppResult<Json<MessageResponse>> {
    state.products.create(product).await?;
    Ok(Json(MessageResponse::new("Product created successfully")))
}

/// Create a batch of products
#[utoipa::path(
    post,
    path = "/products/all",
    tag = "Products",
    request_body = Vec<NewProduct>,
    responses(
        (status = 200, description = "Products created", body = MessageResponse)
    )
)]
pub async fn create_products(
    State(state): State<AppState>,
    ValidatedBatch(products): ValidatedBatch<NewProduct>,
) -> AppResult<Json<MessageResponse>> {
    state.products.create_many(products).await?;
    Ok(Json(MessageResponse::new("Products created successfully")))
}

/// Update a product by id
#[utoipa::path(
    put,
    path = "/products/{product_id}",
    tag = "Products",
    params(("product_id" = i64, Path, description = "Product id")),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "Product updated", body = MessageResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    ValidatedJson(patch): ValidatedJson<ProductPatch>,
) -> AppResult<Json<MessageResponse>> {
    state.products.update(product_id, patch).await?;
    Ok(Json(MessageResponse::new("Product updated successfully")))
}

/// Delete a product by id
#[utoipa::path(
    delete,
    path = "/products/{product_id}",
    tag = "Products",
    params(("product_id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.products.delete(product_id).await?;
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
