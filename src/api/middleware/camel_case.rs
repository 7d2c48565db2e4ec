//! camelCase response-key middleware.
//!
//! The store keeps snake_case column names but API consumers expect
//! camelCase keys, so every JSON response body is buffered and its
//! object keys converted recursively before it leaves the server.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        StatusCode,
    },
    middleware::Next,
    response::Response,
};
use serde_json::Value;

/// Rewrite the keys of JSON response bodies to camelCase.
pub async fn camelize_response(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false);
    if !is_json {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("failed to buffer response body: {}", e);
            parts.status = StatusCode::INTERNAL_SERVER_ERROR;
            parts.headers.remove(CONTENT_LENGTH);
            return Response::from_parts(parts, Body::empty());
        }
    };

    // A body that is not valid JSON is forwarded untouched.
    let Ok(value) = serde_json::from_slice::<Value>(&bytes) else {
        return Response::from_parts(parts, Body::from(bytes));
    };

    match serde_json::to_vec(&camelize_value(value)) {
        Ok(converted) => {
            parts.headers.remove(CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(converted))
        }
        Err(_) => Response::from_parts(parts, Body::from(bytes)),
    }
}

/// Recursively convert the object keys of a JSON value.
fn camelize_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (camelize_key(&key), camelize_value(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(camelize_value).collect()),
        other => other,
    }
}

/// Convert one snake_case key to camelCase. Keys without underscores
/// (already camelCase store columns like `isOffer`) pass through.
fn camelize_key(key: &str) -> String {
    if !key.contains('_') {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len());
    for (i, segment) in key.split('_').filter(|s| !s.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(segment);
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Json, Router};
    use serde_json::json;
    use tower::ServiceExt;

    #[test]
    fn keys_without_underscores_pass_through() {
        assert_eq!(camelize_key("isOffer"), "isOffer");
        assert_eq!(camelize_key("rating"), "rating");
    }

    #[test]
    fn snake_case_keys_convert() {
        assert_eq!(camelize_key("category_id"), "categoryId");
        assert_eq!(camelize_key("category_name_es"), "categoryNameEs");
        assert_eq!(camelize_key("id_product"), "idProduct");
    }

    #[test]
    fn nested_values_convert_recursively() {
        let value = json!([
            { "category_id": 1, "features": [{ "id_feature": 2 }] },
            { "image_url": null }
        ]);
        let converted = camelize_value(value);
        assert_eq!(
            converted,
            json!([
                { "categoryId": 1, "features": [{ "idFeature": 2 }] },
                { "imageUrl": null }
            ])
        );
    }

    #[test]
    fn scalars_are_untouched() {
        assert_eq!(camelize_value(json!("a_b")), json!("a_b"));
        assert_eq!(camelize_value(json!(42)), json!(42));
    }

    #[tokio::test]
    async fn middleware_rewrites_json_bodies() {
        let app = Router::new()
            .route(
                "/",
                get(|| async { Json(json!({ "product_id": 3, "isOffer": false })) }),
            )
            .layer(middleware::from_fn(camelize_response));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "productId": 3, "isOffer": false }));
    }

    #[tokio::test]
    async fn middleware_leaves_plain_text_alone() {
        let app = Router::new()
            .route("/", get(|| async { "hello_world" }))
            .layer(middleware::from_fn(camelize_response));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"hello_world");
    }
}
