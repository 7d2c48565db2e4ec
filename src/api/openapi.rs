//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{categories, products, reviews, search, users, values};
use crate::domain::{
    Category, CategoryPatch, CityStock, Feature, FeatureValue, FeatureValuePatch, NewCategory,
    NewFeatureValue, NewProduct, NewProfile, NewReview, Product, ProductPatch, Profile, Review,
};
use crate::types::MessageResponse;

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "REST API for an e-commerce catalog backed by a hosted Supabase store"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Category endpoints
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::create_categories,
        categories::update_category,
        categories::delete_category,
        // Product endpoints
        products::list_products,
        products::offer_products,
        products::get_product,
        products::products_by_category,
        products::search_by_name,
        products::search_by_price,
        products::search_by_price_and_name,
        products::search_by_price_and_category,
        products::search_by_all_filters,
        products::create_product,
        products::create_products,
        products::update_product,
        products::delete_product,
        // Feature value endpoints
        values::list_values,
        values::get_value,
        values::values_by_product,
        values::values_by_feature,
        values::features_by_category,
        values::product_features,
        values::create_value,
        values::create_values,
        values::update_value,
        values::update_values_by_product,
        values::delete_value,
        values::delete_values_by_product,
        // Review endpoints
        reviews::list_reviews,
        reviews::reviews_by_product,
        reviews::create_review,
        reviews::update_review_likes,
        // User endpoints
        users::list_profiles,
        users::get_profile,
        users::create_profile,
        users::add_to_cart,
        users::empty_cart,
        users::add_to_likes,
        users::remove_from_likes,
        users::check_like,
        // Component search
        search::search_components,
    ),
    components(
        schemas(
            // Domain types
            Category,
            NewCategory,
            CategoryPatch,
            Product,
            CityStock,
            NewProduct,
            ProductPatch,
            Feature,
            FeatureValue,
            NewFeatureValue,
            FeatureValuePatch,
            Review,
            NewReview,
            Profile,
            NewProfile,
            // Handler types
            reviews::UpdateLikesRequest,
            users::CartItemRequest,
            users::LikeResponse,
            // Shared responses
            MessageResponse,
        )
    ),
    tags(
        (name = "Categories", description = "Catalog category management"),
        (name = "Products", description = "Product listing, search, and management"),
        (name = "Values", description = "Product feature values"),
        (name = "Reviews", description = "Product reviews and likes"),
        (name = "Users", description = "User profiles, carts, and likes"),
        (name = "Search", description = "Component search")
    )
)]
pub struct ApiDoc;
