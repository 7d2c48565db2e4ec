//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::infra::StoreError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External store errors
    #[error("Store error")]
    Store(StoreError),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Store(_) => "STORE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::BadRequest(msg) => format!("Invalid input: {}", msg),

            // Store errors are forwarded with their own message, matching the
            // uniform catch-and-500 policy of the API.
            AppError::Store(e) => {
                tracing::error!("Store error: {:?}", e);
                e.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        // A zero-row result on a single-row lookup is a 404, anything
        // else the store reports is a 500.
        if err.is_row_not_found() {
            AppError::NotFound
        } else {
            AppError::Store(err)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::ROW_NOT_FOUND_CODE;

    #[test]
    fn row_not_found_maps_to_404() {
        let err = StoreError::Api {
            status: reqwest::StatusCode::NOT_ACCEPTABLE,
            code: Some(ROW_NOT_FOUND_CODE.to_string()),
            message: "JSON object requested, multiple (or no) rows returned".to_string(),
        };
        let app_err = AppError::from(err);
        assert!(matches!(app_err, AppError::NotFound));
        assert_eq!(app_err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn other_store_errors_map_to_500() {
        let err = StoreError::Api {
            status: reqwest::StatusCode::BAD_REQUEST,
            code: Some("42703".to_string()),
            message: "column does not exist".to_string(),
        };
        let app_err = AppError::from(err);
        assert_eq!(app_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(app_err.user_message(), "column does not exist");
    }

    #[test]
    fn option_ext_translates_none() {
        let missing: Option<u32> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(7).ok_or_not_found().unwrap(), 7);
    }
}
