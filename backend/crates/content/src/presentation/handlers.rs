//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use auth::CurrentUser;
use kernel::id::Id;
use platform::images::ImageStore;

use crate::application::banners::{BannerUseCase, NewBannerInput};
use crate::application::blogs::{BlogUseCase, NewBlogInput, UpdateBlogInput};
use crate::application::comments::CommentUseCase;
use crate::application::replies::ReplyUseCase;
use crate::application::statistics::StatisticsUseCase;
use crate::domain::list_query::ListQuery;
use crate::domain::repository::ContentRepository;
use crate::error::ContentResult;
use crate::presentation::dto::{
    BannerResponse, BannersResponse, BlogResponse, BlogsListResponse, CreateBannerRequest,
    CreateBlogRequest, LatestAndPopularResponse, LatestUsersAndBlogsResponse, ListBlogsParams,
    MessageResponse, RandomBannersResponse, RandomBlogsResponse, StatisticsResponse, TextRequest,
    UpdateBlogRequest, VisitResponse,
};

/// Shared state for content handlers
#[derive(Clone)]
pub struct ContentAppState<R, S>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub images: Arc<S>,
}

impl<R, S> ContentAppState<R, S>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    fn blogs(&self) -> BlogUseCase<R, S> {
        BlogUseCase::new(self.repo.clone(), self.images.clone())
    }

    fn comments(&self) -> CommentUseCase<R, R> {
        CommentUseCase::new(self.repo.clone(), self.repo.clone())
    }

    fn replies(&self) -> ReplyUseCase<R, R, R> {
        ReplyUseCase::new(self.repo.clone(), self.repo.clone(), self.repo.clone())
    }

    fn banners(&self) -> BannerUseCase<R, S> {
        BannerUseCase::new(self.repo.clone(), self.images.clone())
    }

    fn statistics(&self) -> StatisticsUseCase<R> {
        StatisticsUseCase::new(self.repo.clone())
    }
}

// ============================================================================
// Blogs
// ============================================================================

/// POST /api/v1/blogs
pub async fn create_blog<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<CreateBlogRequest>,
) -> ContentResult<impl IntoResponse>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let blog = state
        .blogs()
        .create(
            NewBlogInput {
                title: req.title,
                content: req.content,
                highlight: req.highlight,
                category: req.category,
                thumbnail: req.thumbnail,
            },
            current.0.user_id,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BlogResponse {
            success: true,
            message: "Blog created successfully".to_string(),
            blog,
        }),
    ))
}

/// GET /api/v1/blogs
pub async fn list_blogs<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Query(params): Query<ListBlogsParams>,
) -> ContentResult<Json<BlogsListResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let query = ListQuery::from_params(
        params.search,
        params.category,
        params.sort_by,
        params.order,
        params.page,
        params.limit,
    );

    let page = state.blogs().list(query).await?;

    Ok(Json(BlogsListResponse {
        success: true,
        message: "All blogs fetched successfully".to_string(),
        blogs: page.items,
        total_pages: page.total_pages,
        current_page: page.current_page,
    }))
}

/// GET /api/v1/blogs/random
pub async fn random_blogs<R, S>(
    State(state): State<ContentAppState<R, S>>,
) -> ContentResult<Json<RandomBlogsResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let blogs = state.blogs().random(5).await?;

    Ok(Json(RandomBlogsResponse {
        success: true,
        message: "Random blogs fetched successfully".to_string(),
        blogs,
    }))
}

/// GET /api/v1/blogs/latest-and-popular
pub async fn latest_and_popular_blogs<R, S>(
    State(state): State<ContentAppState<R, S>>,
) -> ContentResult<Json<LatestAndPopularResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let lists = state.blogs().latest_and_popular().await?;

    Ok(Json(LatestAndPopularResponse {
        success: true,
        message: "Latest and Popular blogs fetched successfully".to_string(),
        latest_blogs: lists.latest,
        popular_blogs: lists.popular,
    }))
}

/// GET /api/v1/blogs/{slug}; every read increments the view counter
pub async fn get_blog<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Path(slug): Path<String>,
) -> ContentResult<Json<BlogResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let blog = state.blogs().get_by_slug(&slug).await?;

    Ok(Json(BlogResponse {
        success: true,
        message: "Blog fetched successfully".to_string(),
        blog,
    }))
}

/// PUT /api/v1/blogs/{slug}
pub async fn update_blog<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Path(slug): Path<String>,
    Json(req): Json<UpdateBlogRequest>,
) -> ContentResult<Json<BlogResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let blog = state
        .blogs()
        .update(
            &slug,
            UpdateBlogInput {
                title: req.title,
                content: req.content,
                highlight: req.highlight,
                category: req.category,
                thumbnail: req.thumbnail,
            },
        )
        .await?;

    Ok(Json(BlogResponse {
        success: true,
        message: "Blog updated successfully".to_string(),
        blog,
    }))
}

/// GET /api/v1/blogs/like/{slug}
pub async fn like_blog<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
    Path(slug): Path<String>,
) -> ContentResult<Json<BlogResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let blog = state.blogs().like(&slug, &current.0.user_id).await?;

    Ok(Json(BlogResponse {
        success: true,
        message: "Blog liked successfully".to_string(),
        blog,
    }))
}

/// GET /api/v1/blogs/unlike/{slug}
pub async fn unlike_blog<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
    Path(slug): Path<String>,
) -> ContentResult<Json<BlogResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let blog = state.blogs().unlike(&slug, &current.0.user_id).await?;

    Ok(Json(BlogResponse {
        success: true,
        message: "Blog unliked successfully".to_string(),
        blog,
    }))
}

// ============================================================================
// Saves (mounted under /users)
// ============================================================================

/// GET /api/v1/users/save/{blogId}
pub async fn save_blog<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
    Path(blog_id): Path<Uuid>,
) -> ContentResult<Json<MessageResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    state
        .blogs()
        .save(&Id::from_uuid(blog_id), &current.0.user_id)
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Blog saved successfully".to_string(),
    }))
}

/// GET /api/v1/users/unsave/{blogId}
pub async fn unsave_blog<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
    Path(blog_id): Path<Uuid>,
) -> ContentResult<Json<MessageResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    state
        .blogs()
        .unsave(&Id::from_uuid(blog_id), &current.0.user_id)
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Blog unsaved successfully".to_string(),
    }))
}

// ============================================================================
// Comments
// ============================================================================

/// POST /api/v1/comments/{blogId}
pub async fn add_comment<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
    Path(blog_id): Path<Uuid>,
    Json(req): Json<TextRequest>,
) -> ContentResult<impl IntoResponse>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let blog = state
        .comments()
        .add(&Id::from_uuid(blog_id), &current.0.user_id, &req.text)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BlogResponse {
            success: true,
            message: "Comment created successfully".to_string(),
            blog,
        }),
    ))
}

/// GET /api/v1/comments/like/{blogId}/{commentId}
pub async fn like_comment<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
    Path((blog_id, comment_id)): Path<(Uuid, Uuid)>,
) -> ContentResult<Json<BlogResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let blog = state
        .comments()
        .like(
            &Id::from_uuid(blog_id),
            &Id::from_uuid(comment_id),
            &current.0.user_id,
        )
        .await?;

    Ok(Json(BlogResponse {
        success: true,
        message: "Comment liked successfully".to_string(),
        blog,
    }))
}

/// GET /api/v1/comments/unlike/{blogId}/{commentId}
pub async fn unlike_comment<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
    Path((blog_id, comment_id)): Path<(Uuid, Uuid)>,
) -> ContentResult<Json<BlogResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let blog = state
        .comments()
        .unlike(
            &Id::from_uuid(blog_id),
            &Id::from_uuid(comment_id),
            &current.0.user_id,
        )
        .await?;

    Ok(Json(BlogResponse {
        success: true,
        message: "Comment unliked successfully".to_string(),
        blog,
    }))
}

/// DELETE /api/v1/comments/{blogId}/{commentId}
pub async fn delete_comment<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
    Path((blog_id, comment_id)): Path<(Uuid, Uuid)>,
) -> ContentResult<Json<BlogResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let blog = state
        .comments()
        .delete(
            &Id::from_uuid(blog_id),
            &Id::from_uuid(comment_id),
            &current.0.user_id,
        )
        .await?;

    Ok(Json(BlogResponse {
        success: true,
        message: "Comment deleted successfully".to_string(),
        blog,
    }))
}

// ============================================================================
// Replies
// ============================================================================

/// POST /api/v1/replies/{blogId}/{commentId}
pub async fn add_reply<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
    Path((blog_id, comment_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<TextRequest>,
) -> ContentResult<impl IntoResponse>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let blog = state
        .replies()
        .add(
            &Id::from_uuid(blog_id),
            &Id::from_uuid(comment_id),
            &current.0.user_id,
            &req.text,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BlogResponse {
            success: true,
            message: "Reply created successfully".to_string(),
            blog,
        }),
    ))
}

/// GET /api/v1/replies/like/{blogId}/{replyId}
pub async fn like_reply<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
    Path((blog_id, reply_id)): Path<(Uuid, Uuid)>,
) -> ContentResult<Json<BlogResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let blog = state
        .replies()
        .like(
            &Id::from_uuid(blog_id),
            &Id::from_uuid(reply_id),
            &current.0.user_id,
        )
        .await?;

    Ok(Json(BlogResponse {
        success: true,
        message: "Reply liked successfully".to_string(),
        blog,
    }))
}

/// GET /api/v1/replies/unlike/{blogId}/{replyId}
pub async fn unlike_reply<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
    Path((blog_id, reply_id)): Path<(Uuid, Uuid)>,
) -> ContentResult<Json<BlogResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let blog = state
        .replies()
        .unlike(
            &Id::from_uuid(blog_id),
            &Id::from_uuid(reply_id),
            &current.0.user_id,
        )
        .await?;

    Ok(Json(BlogResponse {
        success: true,
        message: "Reply unliked successfully".to_string(),
        blog,
    }))
}

/// DELETE /api/v1/replies/{blogId}/{commentId}/{replyId}
pub async fn delete_reply<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
    Path((blog_id, comment_id, reply_id)): Path<(Uuid, Uuid, Uuid)>,
) -> ContentResult<Json<BlogResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let blog = state
        .replies()
        .delete(
            &Id::from_uuid(blog_id),
            &Id::from_uuid(comment_id),
            &Id::from_uuid(reply_id),
            &current.0.user_id,
        )
        .await?;

    Ok(Json(BlogResponse {
        success: true,
        message: "Reply deleted successfully".to_string(),
        blog,
    }))
}

// ============================================================================
// Banners
// ============================================================================

/// POST /api/v1/banners
pub async fn create_banner<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Json(req): Json<CreateBannerRequest>,
) -> ContentResult<impl IntoResponse>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let banner = state
        .banners()
        .create(NewBannerInput {
            title: req.title,
            link: req.link,
            image: req.image,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BannerResponse {
            success: true,
            message: "Banner created successfully".to_string(),
            banner: banner.into(),
        }),
    ))
}

/// GET /api/v1/banners
pub async fn list_banners<R, S>(
    State(state): State<ContentAppState<R, S>>,
) -> ContentResult<Json<BannersResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let banners = state.banners().list().await?;

    Ok(Json(BannersResponse {
        success: true,
        banners,
    }))
}

/// GET /api/v1/banners/random
pub async fn random_banners<R, S>(
    State(state): State<ContentAppState<R, S>>,
) -> ContentResult<Json<RandomBannersResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let random = state.banners().random().await?;

    Ok(Json(RandomBannersResponse {
        success: true,
        random_two_banners: random.two,
        random_one_banner: random.one,
    }))
}

/// DELETE /api/v1/banners/{bannerId}
pub async fn delete_banner<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Path(banner_id): Path<Uuid>,
) -> ContentResult<Json<MessageResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    state.banners().delete(&Id::from_uuid(banner_id)).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Banner deleted successfully".to_string(),
    }))
}

// ============================================================================
// Statistics
// ============================================================================

/// GET /api/v1/statistics/add-visit
pub async fn add_visit<R, S>(
    State(state): State<ContentAppState<R, S>>,
) -> ContentResult<Json<VisitResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let total_visits = state.statistics().add_visit().await?;

    Ok(Json(VisitResponse {
        success: true,
        message: "Visit added successfully".to_string(),
        total_visits,
    }))
}

/// GET /api/v1/statistics
pub async fn statistics_overview<R, S>(
    State(state): State<ContentAppState<R, S>>,
) -> ContentResult<Json<StatisticsResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let data = state.statistics().overview().await?;

    Ok(Json(StatisticsResponse {
        success: true,
        data,
    }))
}

/// GET /api/v1/statistics/latest-users-and-blogs
pub async fn latest_users_and_blogs<R, S>(
    State(state): State<ContentAppState<R, S>>,
) -> ContentResult<Json<LatestUsersAndBlogsResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let (latest_users, latest_blogs) = state.statistics().latest_users_and_blogs().await?;

    Ok(Json(LatestUsersAndBlogsResponse {
        success: true,
        latest_users,
        latest_blogs,
    }))
}
