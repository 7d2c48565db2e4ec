//! Application route configuration.

use axum::{extract::State, http::StatusCode, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    category_routes, product_routes, review_routes, search_routes, user_routes, value_routes,
};
use super::middleware::camelize_response;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    // Response keys are camelized for catalog resources only; the OpenAPI
    // document keeps the store's real column names, which the request
    // payloads still use.
    let resources = Router::new()
        .nest("/categories", category_routes())
        .nest("/products", product_routes())
        .nest("/values", value_routes())
        .nest("/reviews", review_routes())
        .nest("/users", user_routes())
        .nest("/search", search_routes())
        .layer(middleware::from_fn(camelize_response));

    Router::new()
        // Infrastructure endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(resources)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Welcome to the catalog API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    store: StoreStatus,
}

/// Hosted store status
#[derive(Serialize)]
struct StoreStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with store connectivity probe
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store_status = match state.store.ping().await {
        Ok(_) => StoreStatus {
            status: "healthy",
            error: None,
        },
        Err(e) => StoreStatus {
            status: "unhealthy",
            error: Some(e.to_string()),
        },
    };

    let healthy = store_status.status == "healthy";
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        store: store_status,
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
