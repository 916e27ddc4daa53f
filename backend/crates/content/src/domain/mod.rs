//! Domain Layer
//!
//! Entities, value objects, read models, and repository traits.

pub mod entity;
pub mod list_query;
pub mod read_model;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{banner::Banner, blog::Blog, comment::Comment, reply::Reply};
pub use list_query::{ListQuery, SortKey, SortOrder};
pub use repository::{
    BannerRepository, BlogRepository, CommentRepository, ContentRepository, ReplyRepository,
    StatisticsRepository,
};
