//! Error types for the API service
//!
//! [`ApiError`] is the only place where failures become status codes. Every
//! lower layer returns its own error enum and converts into this one.

use auth::AuthError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::DatabaseError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::services::ServiceError;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing, malformed or expired credentials
    #[error("{0}")]
    Unauthorized(String),

    /// Invalid input or unresolved reference
    #[error("{0}")]
    BadRequest(String),

    /// No row owned by the caller matches
    #[error("{0}")]
    NotFound(String),

    /// Unique resource already exists
    #[error("{0}")]
    Conflict(String),

    /// Unexpected failure; the detail is logged, never returned
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) | ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            ApiError::Unauthorized(msg)
            | ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg) => msg,
            internal @ (ApiError::Internal(_) | ApiError::Database(_)) => {
                error!(error = %internal, "Request failed");
                "Internal server error".to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidInput(msg) => ApiError::BadRequest(msg),
            AuthError::Database(e) => ApiError::Database(e),
            conflict @ AuthError::EmailExists => ApiError::Conflict(conflict.to_string()),
            unauthorized @ (AuthError::InvalidCredentials
            | AuthError::InvalidToken
            | AuthError::InvalidTokenPayload) => ApiError::Unauthorized(unauthorized.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::Database(e) => ApiError::Database(e),
            reference => ApiError::BadRequest(reference.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
