//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure
//! layer. Toggle operations own their idempotency check: the conditional
//! insert/delete and the error decision happen in one statement.

use kernel::id::{BannerId, BlogId, CommentId, ReplyId, UserId};

use crate::domain::entity::{banner::Banner, blog::Blog, comment::Comment, reply::Reply};
use crate::domain::list_query::ListQuery;
use crate::domain::read_model::{
    BannerView, BlogBrief, BlogCard, BlogDetail, BlogListItem, BlogPage, SiteTotals, UserBrief,
};
use crate::error::ContentResult;

/// Blog repository trait
#[trait_variant::make(BlogRepository: Send)]
pub trait LocalBlogRepository {
    /// Persist a new blog
    async fn create(&self, blog: &Blog) -> ContentResult<()>;

    /// Find blog by slug
    async fn find_by_slug(&self, slug: &str) -> ContentResult<Option<Blog>>;

    /// Find blog by id
    async fn find_by_id(&self, blog_id: &BlogId) -> ContentResult<Option<Blog>>;

    /// Update a blog in place
    async fn update(&self, blog: &Blog) -> ContentResult<()>;

    /// Bump the view counter by one
    async fn increment_views(&self, blog_id: &BlogId) -> ContentResult<()>;

    /// Load the fully populated document for a slug
    async fn load_detail(&self, slug: &str) -> ContentResult<Option<BlogDetail>>;

    /// Paginated/sorted/filtered listing with derived counts
    async fn list(&self, query: &ListQuery) -> ContentResult<BlogPage>;

    /// Uniform random sample for the carousel
    async fn random(&self, n: i64) -> ContentResult<Vec<BlogCard>>;

    /// Most recent blogs with derived counts
    async fn latest(&self, n: i64) -> ContentResult<Vec<BlogListItem>>;

    /// Most viewed blogs with derived counts
    async fn popular(&self, n: i64) -> ContentResult<Vec<BlogListItem>>;

    /// Add the user to the blog's like set; `AlreadyLiked` if present
    async fn like(&self, blog_id: &BlogId, user_id: &UserId) -> ContentResult<()>;

    /// Remove the user from the like set; `NotLiked` if absent
    async fn unlike(&self, blog_id: &BlogId, user_id: &UserId) -> ContentResult<()>;

    /// Save for the user and bump the save counter, atomically;
    /// `AlreadySaved` if present
    async fn save(&self, blog_id: &BlogId, user_id: &UserId) -> ContentResult<()>;

    /// Unsave and decrement the counter, atomically; `NotSaved` if absent
    async fn unsave(&self, blog_id: &BlogId, user_id: &UserId) -> ContentResult<()>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Insert the comment and bump the author's comment counter,
    /// atomically
    async fn create(&self, comment: &Comment) -> ContentResult<()>;

    /// Find comment by id
    async fn find_by_id(&self, comment_id: &CommentId) -> ContentResult<Option<Comment>>;

    /// Delete the comment, all of its replies, and decrement the
    /// author's comment counter, atomically
    async fn delete_cascade(&self, comment: &Comment) -> ContentResult<()>;

    /// Like toggle; `AlreadyLiked` if present
    async fn like(&self, comment_id: &CommentId, user_id: &UserId) -> ContentResult<()>;

    /// Unlike toggle; `NotLiked` if absent
    async fn unlike(&self, comment_id: &CommentId, user_id: &UserId) -> ContentResult<()>;
}

/// Reply repository trait
#[trait_variant::make(ReplyRepository: Send)]
pub trait LocalReplyRepository {
    /// Insert a reply (no user statistic is adjusted)
    async fn create(&self, reply: &Reply) -> ContentResult<()>;

    /// Find reply by id
    async fn find_by_id(&self, reply_id: &ReplyId) -> ContentResult<Option<Reply>>;

    /// Delete a reply and its likes
    async fn delete(&self, reply_id: &ReplyId) -> ContentResult<()>;

    /// Like toggle; `AlreadyLiked` if present
    async fn like(&self, reply_id: &ReplyId, user_id: &UserId) -> ContentResult<()>;

    /// Unlike toggle; `NotLiked` if absent
    async fn unlike(&self, reply_id: &ReplyId, user_id: &UserId) -> ContentResult<()>;
}

/// Banner repository trait
#[trait_variant::make(BannerRepository: Send)]
pub trait LocalBannerRepository {
    /// Persist a new banner
    async fn create(&self, banner: &Banner) -> ContentResult<()>;

    /// Find banner by id
    async fn find_by_id(&self, banner_id: &BannerId) -> ContentResult<Option<Banner>>;

    /// Delete a banner row
    async fn delete(&self, banner_id: &BannerId) -> ContentResult<()>;

    /// All banners
    async fn list(&self) -> ContentResult<Vec<BannerView>>;

    /// Uniform random sample of up to `n` banners
    async fn random(&self, n: i64) -> ContentResult<Vec<BannerView>>;
}

/// Statistics repository trait
#[trait_variant::make(StatisticsRepository: Send)]
pub trait LocalStatisticsRepository {
    /// Increment the singleton visit counter, creating it on first call;
    /// returns the running total
    async fn add_visit(&self) -> ContentResult<i64>;

    /// Site-wide totals
    async fn overview(&self) -> ContentResult<SiteTotals>;

    /// Most recent users
    async fn latest_users(&self, n: i64) -> ContentResult<Vec<UserBrief>>;

    /// Most recent blogs
    async fn latest_blogs(&self, n: i64) -> ContentResult<Vec<BlogBrief>>;
}

/// Everything the content routers need from one storage backend
pub trait ContentRepository:
    BlogRepository
    + CommentRepository
    + ReplyRepository
    + BannerRepository
    + StatisticsRepository
{
}

impl<T> ContentRepository for T where
    T: BlogRepository
        + CommentRepository
        + ReplyRepository
        + BannerRepository
        + StatisticsRepository
{
}
