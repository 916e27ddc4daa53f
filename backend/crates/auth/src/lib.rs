//! Auth (Authentication & Accounts) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Login by identity-provider profile (name/email/picture), upsert by email
//! - JWT access/refresh token pair in HttpOnly cookies
//! - Transparent access-token refresh in the request middleware
//! - Role-based access (User, Admin)
//! - Profile updates with external image hosting
//!
//! ## Token Model
//! - Access token: 5 minutes, signed with the access secret
//! - Refresh token: 30 days, signed with a distinct refresh secret
//! - The refresh token is only ever used to mint a new access token

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthMiddlewareState, CurrentUser};
pub use presentation::router::users_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
