//! Application Layer
//!
//! Use cases, grouped per resource.

pub mod banners;
pub mod blogs;
pub mod comments;
pub mod replies;
pub mod statistics;

// Re-exports
pub use banners::{BannerUseCase, NewBannerInput, RandomBanners};
pub use blogs::{BlogUseCase, BlogsPage, LatestAndPopular, NewBlogInput, UpdateBlogInput};
pub use comments::CommentUseCase;
pub use replies::ReplyUseCase;
pub use statistics::StatisticsUseCase;
