//! Integration tests for API endpoints.
//!
//! These tests use mock services to test API endpoints without requiring
//! a reachable Supabase project.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use catalog_api::api::{create_router, AppState};
use catalog_api::domain::{
    Category, CategoryPatch, Feature, FeatureValue, FeatureValuePatch, NewCategory,
    NewFeatureValue, NewProduct, NewProfile, NewReview, Product, ProductPatch, Profile, Review,
};
use catalog_api::errors::{AppError, AppResult};
use catalog_api::services::{
    CategoryService, LikeStatus, ProductFilter, ProductService, ReviewService, SearchService,
    SortOrder, UserService, ValueService,
};
use catalog_api::types::PaginationParams;
use catalog_api::Supabase;

// =============================================================================
// Mock Services for Testing
// =============================================================================

fn sample_category(id: i64) -> Category {
    Category {
        id,
        category_name_es: "Placas base".to_string(),
        category_name_en: "Motherboards".to_string(),
        category_name_ca: "Plaques base".to_string(),
        category_description_es: None,
        category_description_en: None,
        category_description_ca: None,
    }
}

fn sample_product(id: i64) -> Product {
    Product {
        id,
        name: "Arduino Uno".to_string(),
        price: 24.95,
        category_id: 1,
        image_url: None,
        is_offer: Some(false),
        discount: None,
        rating: Some(4.5),
        stock: Default::default(),
    }
}

fn sample_review(id: i64, product_id: i64) -> Review {
    Review {
        id,
        product_id,
        rating: 5.0,
        comment: "Great board".to_string(),
        likes: Some(0),
        created_at: None,
    }
}

/// Mock category service that knows a single category
struct MockCategoryService;

#[async_trait]
impl CategoryService for MockCategoryService {
    async fn list(&self) -> AppResult<Vec<Category>> {
        Ok(vec![sample_category(1), sample_category(2)])
    }

    async fn get(&self, id: i64) -> AppResult<Category> {
        if id == 1 {
            Ok(sample_category(1))
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn create(&self, _category: NewCategory) -> AppResult<()> {
        Ok(())
    }

    async fn create_many(&self, _categories: Vec<NewCategory>) -> AppResult<()> {
        Ok(())
    }

    async fn update(&self, _id: i64, _patch: CategoryPatch) -> AppResult<()> {
        Ok(())
    }

    async fn delete(&self, _id: i64) -> AppResult<()> {
        Ok(())
    }
}

/// Mock product service returning canned rows
struct MockProductService;

#[async_trait]
impl ProductService for MockProductService {
    async fn list(
        &self,
        _pages: Option<PaginationParams>,
        _order: Option<SortOrder>,
    ) -> AppResult<Vec<Product>> {
        Ok(vec![sample_product(1)])
    }

    async fn get(&self, id: i64) -> AppResult<Product> {
        if id == 1 {
            Ok(sample_product(1))
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn offers(&self) -> AppResult<Vec<Product>> {
        Ok(vec![])
    }

    async fn by_category(&self, _category_id: i64) -> AppResult<Vec<Product>> {
        Ok(vec![sample_product(1)])
    }

    async fn search(&self, _filter: ProductFilter) -> AppResult<Vec<Product>> {
        Ok(vec![sample_product(1)])
    }

    async fn create(&self, _product: NewProduct) -> AppResult<()> {
        Ok(())
    }

    async fn create_many(&self, _products: Vec<NewProduct>) -> AppResult<()> {
        Ok(())
    }

    async fn update(&self, _id: i64, _patch: ProductPatch) -> AppResult<()> {
        Ok(())
    }

    async fn delete(&self, _id: i64) -> AppResult<()> {
        Ok(())
    }
}

/// Mock feature value service
struct MockValueService;

#[async_trait]
impl ValueService for MockValueService {
    async fn list(&self) -> AppResult<Vec<FeatureValue>> {
        Ok(vec![])
    }

    async fn get(&self, _id: i64) -> AppResult<FeatureValue> {
        Err(AppError::NotFound)
    }

    async fn by_product(&self, _product_id: i64) -> AppResult<Vec<FeatureValue>> {
        Ok(vec![])
    }

    async fn by_feature(&self, _feature_id: i64) -> AppResult<Vec<FeatureValue>> {
        Ok(vec![])
    }

    async fn features_by_category(&self, _category_id: i64) -> AppResult<Vec<Feature>> {
        Ok(vec![])
    }

    async fn product_features(&self, _product_id: i64) -> AppResult<Value> {
        Ok(json!([]))
    }

    async fn create(&self, _value: NewFeatureValue) -> AppResult<()> {
        Ok(())
    }

    async fn create_many(&self, _values: Vec<NewFeatureValue>) -> AppResult<()> {
        Ok(())
    }

    async fn update(&self, _id: i64, _patch: FeatureValuePatch) -> AppResult<()> {
        Ok(())
    }

    async fn update_by_product(&self, _product_id: i64, _patch: FeatureValuePatch) -> AppResult<()> {
        Ok(())
    }

    async fn delete(&self, _id: i64) -> AppResult<()> {
        Ok(())
    }

    async fn delete_by_product(&self, _product_id: i64) -> AppResult<()> {
        Ok(())
    }
}

/// Mock review service; product 1 has reviews, everything else does not
struct MockReviewService;

#[async_trait]
impl ReviewService for MockReviewService {
    async fn list(&self) -> AppResult<Vec<Review>> {
        Ok(vec![sample_review(1, 1)])
    }

    async fn by_product(&self, product_id: i64) -> AppResult<Vec<Review>> {
        if product_id == 1 {
            Ok(vec![sample_review(1, 1)])
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn create(&self, review: NewReview) -> AppResult<Review> {
        Ok(Review {
            id: 42,
            product_id: review.product_id,
            rating: review.rating,
            comment: review.comment,
            likes: Some(0),
            created_at: None,
        })
    }

    async fn set_likes(&self, _id: i64, _likes: i64) -> AppResult<()> {
        Ok(())
    }
}

/// Mock user service; product 7 is liked, nothing else is
struct MockUserService;

#[async_trait]
impl UserService for MockUserService {
    async fn list(&self) -> AppResult<Vec<Profile>> {
        Ok(vec![])
    }

    async fn get(&self, id: Uuid) -> AppResult<Profile> {
        Ok(Profile {
            id,
            admin: Some(false),
            cart: Some(vec![]),
            likes: Some(vec![7]),
        })
    }

    async fn create(&self, _profile: NewProfile) -> AppResult<()> {
        Ok(())
    }

    async fn add_to_cart(&self, _user_id: Uuid, _product_id: i64) -> AppResult<()> {
        Ok(())
    }

    async fn empty_cart(&self, _user_id: Uuid) -> AppResult<()> {
        Ok(())
    }

    async fn add_to_likes(&self, _user_id: Uuid, product_id: i64) -> AppResult<LikeStatus> {
        if product_id == 7 {
            Ok(LikeStatus::AlreadyLiked)
        } else {
            Ok(LikeStatus::Added)
        }
    }

    async fn remove_from_likes(&self, _user_id: Uuid, product_id: i64) -> AppResult<LikeStatus> {
        if product_id == 7 {
            Ok(LikeStatus::Removed)
        } else {
            Ok(LikeStatus::NotPresent)
        }
    }

    async fn is_liked(&self, _user_id: Uuid, product_id: i64) -> AppResult<bool> {
        Ok(product_id == 7)
    }
}

/// Mock component search
struct MockSearchService;

#[async_trait]
impl SearchService for MockSearchService {
    async fn components_by_name(&self, query: &str) -> AppResult<Value> {
        Ok(json!([{ "id": 1, "name": query }]))
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

/// Create a test AppState with mock services.
///
/// The store client points at a closed local port; only the health probe
/// ever touches it.
fn test_state() -> AppState {
    let store = Arc::new(
        Supabase::connect("http://127.0.0.1:59999", "test-key")
            .expect("store client should build"),
    );
    AppState::new(
        Arc::new(MockCategoryService),
        Arc::new(MockProductService),
        Arc::new(MockValueService),
        Arc::new(MockReviewService),
        Arc::new(MockUserService),
        Arc::new(MockSearchService),
        store,
    )
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = create_router(test_state())
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should buffer");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

// =============================================================================
// Root and Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_root_endpoint_returns_welcome_message() {
    let response = create_router(test_state())
        .oneshot(get("/"))
        .await
        .expect("request should not fail");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should buffer");
    assert_eq!(&bytes[..], b"Welcome to the catalog API");
}

#[tokio::test]
async fn test_openapi_document_keeps_store_column_names() {
    let (status, body) = send(get("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    let properties = &body["components"]["schemas"]["NewCategory"]["properties"];
    // Request bodies use the store's snake_case columns; the served
    // document must describe them that way, untouched by the response
    // key conversion applied to catalog resources.
    assert!(properties.get("category_name_es").is_some());
    assert!(properties.get("categoryNameEs").is_none());
}

#[tokio::test]
async fn test_health_reports_unreachable_store() {
    let (status, body) = send(get("/health")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["store"]["status"], "unhealthy");
}

// =============================================================================
// Category Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_list_categories_renders_camel_case_keys() {
    let (status, body) = send(get("/categories")).await;

    assert_eq!(status, StatusCode::OK);
    let first = &body[0];
    assert_eq!(first["categoryNameEs"], "Placas base");
    assert_eq!(first["categoryNameEn"], "Motherboards");
    assert!(first.get("category_name_es").is_none());
}

#[tokio::test]
async fn test_missing_category_renders_error_envelope() {
    let (status, body) = send(get("/categories/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_category_rejects_empty_name() {
    let payload = json!({
        "category_name_es": "",
        "category_name_en": "Motherboards",
        "category_name_ca": "Plaques base"
    });
    let (status, body) = send(json_request("POST", "/categories", payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_bulk_create_categories_validates_every_row() {
    let valid = json!({
        "category_name_es": "Placas base",
        "category_name_en": "Motherboards",
        "category_name_ca": "Plaques base"
    });
    let invalid = json!({
        "category_name_es": "",
        "category_name_en": "Motherboards",
        "category_name_ca": "Plaques base"
    });

    let (status, body) =
        send(json_request("POST", "/categories/all", json!([valid, invalid]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let valid = json!({
        "category_name_es": "Placas base",
        "category_name_en": "Motherboards",
        "category_name_ca": "Plaques base"
    });
    let (status, body) = send(json_request("POST", "/categories/all", json!([valid]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Categories created successfully");
}

// =============================================================================
// Product Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_get_product_flattens_stock_columns() {
    let (status, body) = send(get("/products/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Arduino Uno");
    assert_eq!(body["isOffer"], false);
    // Absent city stock columns are omitted, not rendered as null
    assert!(body.get("barcelonaStock").is_none());
}

#[tokio::test]
async fn test_search_by_price_returns_matches() {
    let (status, body) = send(get("/products/searchByPrice/10/50")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], 1);
}

// =============================================================================
// Review Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_reviews_for_unreviewed_product_is_not_found() {
    let (status, body) = send(get("/reviews/findReviewsByProductId/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_review_returns_created_row() {
    let payload = json!({ "product_id": 1, "rating": 4.0, "comment": "Solid" });
    let (status, body) = send(json_request("POST", "/reviews/createReview", payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 42);
    assert_eq!(body["productId"], 1);
}

#[tokio::test]
async fn test_create_review_rejects_out_of_range_rating() {
    let payload = json!({ "product_id": 1, "rating": 9.0, "comment": "??" });
    let (status, body) = send(json_request("POST", "/reviews/createReview", payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// User Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_add_to_cart_confirms_with_message() {
    let payload = json!({ "userId": Uuid::new_v4(), "productId": 5 });
    let (status, body) = send(json_request("POST", "/users/cart", payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product added to cart successfully");
}

#[tokio::test]
async fn test_like_check_reports_state() {
    let user_id = Uuid::new_v4();

    let (status, body) = send(get(&format!(
        "/users/likes/check?userId={user_id}&productId=7"
    )))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isLiked"], true);

    let (status, body) = send(get(&format!(
        "/users/likes/check?userId={user_id}&productId=8"
    )))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isLiked"], false);
}

#[tokio::test]
async fn test_removing_unliked_product_reports_not_present() {
    let payload = json!({ "userId": Uuid::new_v4(), "productId": 8 });
    let (status, body) = send(json_request("DELETE", "/users/likes", payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product not found in user's likes");
}

// =============================================================================
// Search Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_search_requires_a_query() {
    let (status, body) = send(get("/search")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_search_forwards_the_query() {
    let (status, body) = send(get("/search?query=arduino")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "arduino");
}
