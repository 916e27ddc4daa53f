//! Read Models
//!
//! Denormalized query results. These are the wire projections: referenced
//! user ids arrive already resolved to summaries, and the derived counts
//! are computed by the query that produced them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// User summary (the "populate" projection)
// ============================================================================

/// Resolved user reference: name/email/picture only
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub picture_url: String,
}

// ============================================================================
// Populated blog document
// ============================================================================

/// Reply with resolved user and likers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyDetail {
    pub reply_id: Uuid,
    pub user: UserSummary,
    pub text: String,
    pub likes: Vec<UserSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment with resolved user, likers, and replies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetail {
    pub comment_id: Uuid,
    pub user: UserSummary,
    pub text: String,
    pub likes: Vec<UserSummary>,
    pub replies: Vec<ReplyDetail>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailView {
    pub url: String,
    pub public_id: String,
}

/// Fully populated blog document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDetail {
    pub blog_id: Uuid,
    pub title: String,
    pub content: String,
    pub highlight: String,
    pub thumbnail: ThumbnailView,
    pub author: UserSummary,
    pub category: String,
    pub slug: String,
    pub likes: Vec<UserSummary>,
    pub saves: i64,
    pub views: i64,
    pub comments: Vec<CommentDetail>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Listing projections
// ============================================================================

/// Listing row with derived counts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListItem {
    pub blog_id: Uuid,
    pub title: String,
    pub slug: String,
    pub highlight: String,
    pub author_name: String,
    pub thumbnail_url: String,
    /// Size of the blog's like set
    pub likes_count: i64,
    /// Comments plus all nested replies
    pub comments_count: i64,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

/// One page of listing rows plus the total match count
#[derive(Debug, Clone)]
pub struct BlogPage {
    pub items: Vec<BlogListItem>,
    pub total: i64,
}

/// Carousel projection for the random sample
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogCard {
    pub blog_id: Uuid,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub author_name: String,
    pub thumbnail_url: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Statistics projections
// ============================================================================

/// Site-wide totals for the admin dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteTotals {
    pub total_blogs: i64,
    pub total_users: i64,
    pub total_views: i64,
    pub total_likes: i64,
    /// Comments plus replies
    pub total_comments: i64,
    pub total_visits: i64,
}

/// Dashboard row: recent user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBrief {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Dashboard row: recent blog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogBrief {
    pub blog_id: Uuid,
    pub title: String,
    pub category: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Banner projection
// ============================================================================

/// Serialized banner
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerView {
    pub banner_id: Uuid,
    pub image: ThumbnailView,
    pub title: String,
    pub link: String,
}
