//! API DTOs (Data Transfer Objects)
//!
//! Requests, plus the `{success, message, ...}` response envelopes the
//! SPA consumes. Read models serialize straight into the envelopes.

use serde::{Deserialize, Serialize};

use crate::domain::read_model::{
    BannerView, BlogBrief, BlogCard, BlogDetail, BlogListItem, SiteTotals, UserBrief,
};

// ============================================================================
// Blog requests
// ============================================================================

/// Create-blog request; thumbnail is a base64 data-URL
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub highlight: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
}

/// Partial-update request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub highlight: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
}

/// Raw listing query parameters; normalization happens in `ListQuery`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBlogsParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

// ============================================================================
// Blog responses
// ============================================================================

/// Single populated blog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub success: bool,
    pub message: String,
    pub blog: BlogDetail,
}

/// Paginated listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogsListResponse {
    pub success: bool,
    pub message: String,
    pub blogs: Vec<BlogListItem>,
    pub total_pages: i64,
    pub current_page: i64,
}

/// Random carousel sample
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomBlogsResponse {
    pub success: bool,
    pub message: String,
    pub blogs: Vec<BlogCard>,
}

/// Landing page lists
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestAndPopularResponse {
    pub success: bool,
    pub message: String,
    pub latest_blogs: Vec<BlogListItem>,
    pub popular_blogs: Vec<BlogListItem>,
}

// ============================================================================
// Comments / replies
// ============================================================================

/// Comment or reply body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRequest {
    #[serde(default)]
    pub text: String,
}

// ============================================================================
// Banners
// ============================================================================

/// Create-banner request; image is a base64 data-URL
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBannerRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerResponse {
    pub success: bool,
    pub message: String,
    pub banner: BannerView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannersResponse {
    pub success: bool,
    pub banners: Vec<BannerView>,
}

/// The two random promotional slots
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomBannersResponse {
    pub success: bool,
    pub random_two_banners: Vec<BannerView>,
    pub random_one_banner: BannerView,
}

// ============================================================================
// Statistics
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitResponse {
    pub success: bool,
    pub message: String,
    pub total_visits: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    pub success: bool,
    pub data: SiteTotals,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestUsersAndBlogsResponse {
    pub success: bool,
    pub latest_users: Vec<UserBrief>,
    pub latest_blogs: Vec<BlogBrief>,
}

// ============================================================================
// Generic envelope
// ============================================================================

/// Plain `{success, message}` body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}
