//! Content Error Types
//!
//! Content-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Content-specific result type alias
pub type ContentResult<T> = Result<T, ContentError>;

/// Content-specific error variants
#[derive(Debug, Error)]
pub enum ContentError {
    /// Blog lookup failed
    #[error("Blog not found")]
    BlogNotFound,

    /// Comment lookup failed
    #[error("Comment not found")]
    CommentNotFound,

    /// Reply lookup failed
    #[error("Reply not found")]
    ReplyNotFound,

    /// Banner lookup failed
    #[error("Banner not found")]
    BannerNotFound,

    /// Like toggle repeated ("Blog", "Comment", "Reply")
    #[error("{0} already liked")]
    AlreadyLiked(&'static str),

    /// Unlike of a never-liked target
    #[error("{0} not liked")]
    NotLiked(&'static str),

    /// Save toggle repeated
    #[error("Blog already saved")]
    AlreadySaved,

    /// Unsave of a never-saved blog
    #[error("Blog not saved")]
    NotSaved,

    /// Missing or empty required field
    #[error("{0}")]
    Validation(String),

    /// Comment/reply deletion by someone other than the author
    #[error("You are not authorized to delete this {0}")]
    NotAuthor(&'static str),

    /// Image store failure
    #[error("Image store error: {0}")]
    ImageStore(#[from] platform::images::ImageStoreError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContentError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContentError::BlogNotFound
            | ContentError::CommentNotFound
            | ContentError::ReplyNotFound
            | ContentError::BannerNotFound => StatusCode::NOT_FOUND,
            // Toggle conflicts surface as plain client errors, matching
            // the API's published contract.
            ContentError::AlreadyLiked(_)
            | ContentError::NotLiked(_)
            | ContentError::AlreadySaved
            | ContentError::NotSaved
            | ContentError::Validation(_) => StatusCode::BAD_REQUEST,
            ContentError::NotAuthor(_) => StatusCode::UNAUTHORIZED,
            ContentError::ImageStore(_)
            | ContentError::Database(_)
            | ContentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::BlogNotFound
            | ContentError::CommentNotFound
            | ContentError::ReplyNotFound
            | ContentError::BannerNotFound => ErrorKind::NotFound,
            ContentError::AlreadyLiked(_)
            | ContentError::NotLiked(_)
            | ContentError::AlreadySaved
            | ContentError::NotSaved
            | ContentError::Validation(_) => ErrorKind::BadRequest,
            ContentError::NotAuthor(_) => ErrorKind::Unauthorized,
            ContentError::ImageStore(_)
            | ContentError::Database(_)
            | ContentError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ContentError::Database(e) => {
                tracing::error!(error = %e, "Content database error");
            }
            ContentError::ImageStore(e) => {
                tracing::error!(error = %e, "Image store error");
            }
            ContentError::Internal(msg) => {
                tracing::error!(message = %msg, "Content internal error");
            }
            ContentError::NotAuthor(resource) => {
                tracing::warn!(resource, "Rejected deletion by non-author");
            }
            _ => {
                tracing::debug!(error = %self, "Content error");
            }
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
