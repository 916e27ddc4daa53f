//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Neither access nor refresh cookie present
    #[error("Not logged in")]
    NotLoggedIn,

    /// Token failed signature or expiry validation
    #[error("Unauthorized")]
    InvalidToken,

    /// Token was valid but the user no longer exists
    #[error("User not found")]
    UserNotFound,

    /// Role gate rejected the caller
    #[error("Unauthorized")]
    InsufficientRole,

    /// Login payload is incomplete
    #[error("Please provide email, name and picture")]
    MissingLoginField,

    /// Field-level validation failure
    #[error("{0}")]
    Validation(String),

    /// Image store failure during profile update
    #[error("Failed to update picture")]
    ImageStore(#[from] platform::images::ImageStoreError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::NotLoggedIn
            | AuthError::InvalidToken
            | AuthError::InsufficientRole => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound => StatusCode::UNAUTHORIZED,
            AuthError::MissingLoginField | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::ImageStore(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::NotLoggedIn
            | AuthError::InvalidToken
            | AuthError::UserNotFound
            | AuthError::InsufficientRole => ErrorKind::Unauthorized,
            AuthError::MissingLoginField | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::ImageStore(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::ImageStore(e) => {
                tracing::error!(error = %e, "Image store error during profile update");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected invalid or expired token");
            }
            AuthError::UserNotFound => {
                tracing::warn!("Token referenced a missing user");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}
