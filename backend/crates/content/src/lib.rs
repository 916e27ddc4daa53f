//! Content Backend Module
//!
//! Blogs, comments, replies, engagement, banners, and site statistics.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, read models, repository traits
//! - `application/` - Use cases per resource
//! - `infra/` - PostgreSQL implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Behavior notes
//! - Reads are denormalized: author/commenter/liker ids resolve to user
//!   summaries in a single response document.
//! - `likesCount`/`commentsCount` are derived at query time, never stored.
//! - Every multi-row mutation (save/unsave, add/delete comment, cascade
//!   reply deletion) runs in a single database transaction.
//! - Like/save toggles are strict: repeating a done action or undoing a
//!   never-done one is a client error.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{ContentError, ContentResult};
pub use infra::postgres::PgContentRepository;
pub use presentation::router::{
    banners_router, blogs_router, comments_router, replies_router, saves_router,
    statistics_router,
};
