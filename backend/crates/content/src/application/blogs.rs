//! Blog Use Cases
//!
//! Content-store operations on blogs: create/update with thumbnail
//! handling, populated reads, listings, and the like/save toggles.

use std::sync::Arc;

use kernel::id::{BlogId, UserId};
use platform::images::ImageStore;

use crate::domain::entity::blog::{Blog, BlogPatch, NewBlog};
use crate::domain::list_query::ListQuery;
use crate::domain::read_model::{BlogCard, BlogDetail, BlogListItem};
use crate::domain::repository::BlogRepository;
use crate::error::{ContentError, ContentResult};

const THUMBNAIL_FOLDER: &str = "blog/thumbnails";

/// Create-blog input; `thumbnail` is a base64 data-URL
pub struct NewBlogInput {
    pub title: String,
    pub content: String,
    pub highlight: String,
    pub category: String,
    pub thumbnail: String,
}

/// Update-blog input; absent fields keep their value
#[derive(Default)]
pub struct UpdateBlogInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub highlight: Option<String>,
    pub category: Option<String>,
    /// Base64 data-URL of a replacement thumbnail
    pub thumbnail: Option<String>,
}

/// One page of listing results
pub struct BlogsPage {
    pub items: Vec<BlogListItem>,
    pub total_pages: i64,
    pub current_page: i64,
}

/// The two top-5 lists for the landing page
pub struct LatestAndPopular {
    pub latest: Vec<BlogListItem>,
    pub popular: Vec<BlogListItem>,
}

/// Blog use case
pub struct BlogUseCase<R, S>
where
    R: BlogRepository,
    S: ImageStore,
{
    repo: Arc<R>,
    images: Arc<S>,
}

impl<R, S> BlogUseCase<R, S>
where
    R: BlogRepository,
    S: ImageStore + Sync,
{
    pub fn new(repo: Arc<R>, images: Arc<S>) -> Self {
        Self { repo, images }
    }

    /// Create a blog. The thumbnail upload happens first: a failed upload
    /// aborts before any row is written, so no blog ever exists without a
    /// hosted thumbnail.
    pub async fn create(&self, input: NewBlogInput, author_id: UserId) -> ContentResult<BlogDetail> {
        for (field, value) in [
            ("title", &input.title),
            ("content", &input.content),
            ("highlight", &input.highlight),
            ("category", &input.category),
            ("thumbnail", &input.thumbnail),
        ] {
            if value.is_empty() {
                return Err(ContentError::Validation(format!("{field} is required")));
            }
        }

        let asset = self.images.upload(&input.thumbnail, THUMBNAIL_FOLDER).await?;

        let blog = Blog::new(
            NewBlog {
                title: input.title,
                content: input.content,
                highlight: input.highlight,
                category: input.category,
            },
            author_id,
            asset.into(),
        );

        self.repo.create(&blog).await?;

        tracing::info!(blog_id = %blog.blog_id, slug = %blog.slug, "Blog created");

        self.require_detail(blog.slug.as_str()).await
    }

    /// Partial update by slug. A replacement thumbnail deletes the old
    /// image before uploading the new one; if the upload then fails the
    /// stored reference is stale. Known gap, surfaced as a 500.
    pub async fn update(&self, slug: &str, input: UpdateBlogInput) -> ContentResult<BlogDetail> {
        let mut blog = self
            .repo
            .find_by_slug(slug)
            .await?
            .ok_or(ContentError::BlogNotFound)?;

        if let Some(data_url) = input.thumbnail.filter(|t| !t.is_empty()) {
            self.images.delete(&blog.thumbnail.public_id).await?;

            let asset = self.images.upload(&data_url, THUMBNAIL_FOLDER).await?;
            blog.set_thumbnail(asset.into());
        }

        blog.apply_patch(BlogPatch {
            title: input.title,
            content: input.content,
            highlight: input.highlight,
            category: input.category,
        });

        self.repo.update(&blog).await?;

        tracing::info!(blog_id = %blog.blog_id, slug = %blog.slug, "Blog updated");

        self.require_detail(blog.slug.as_str()).await
    }

    /// Populated read. Every read also increments the view counter.
    pub async fn get_by_slug(&self, slug: &str) -> ContentResult<BlogDetail> {
        let blog = self
            .repo
            .find_by_slug(slug)
            .await?
            .ok_or(ContentError::BlogNotFound)?;

        self.repo.increment_views(&blog.blog_id).await?;

        self.require_detail(slug).await
    }

    /// Paginated listing
    pub async fn list(&self, query: ListQuery) -> ContentResult<BlogsPage> {
        let page = self.repo.list(&query).await?;

        Ok(BlogsPage {
            total_pages: query.total_pages(page.total),
            current_page: query.page,
            items: page.items,
        })
    }

    /// Uniform random sample for the promotional carousel
    pub async fn random(&self, n: i64) -> ContentResult<Vec<BlogCard>> {
        self.repo.random(n).await
    }

    /// The landing page's two top-5 lists
    pub async fn latest_and_popular(&self) -> ContentResult<LatestAndPopular> {
        let latest = self.repo.latest(5).await?;
        let popular = self.repo.popular(5).await?;

        Ok(LatestAndPopular { latest, popular })
    }

    /// Like toggle
    pub async fn like(&self, slug: &str, user_id: &UserId) -> ContentResult<BlogDetail> {
        let blog = self
            .repo
            .find_by_slug(slug)
            .await?
            .ok_or(ContentError::BlogNotFound)?;

        self.repo.like(&blog.blog_id, user_id).await?;

        self.require_detail(slug).await
    }

    /// Unlike toggle
    pub async fn unlike(&self, slug: &str, user_id: &UserId) -> ContentResult<BlogDetail> {
        let blog = self
            .repo
            .find_by_slug(slug)
            .await?
            .ok_or(ContentError::BlogNotFound)?;

        self.repo.unlike(&blog.blog_id, user_id).await?;

        self.require_detail(slug).await
    }

    /// Save toggle (row in `saved_blogs` + counter, one transaction)
    pub async fn save(&self, blog_id: &BlogId, user_id: &UserId) -> ContentResult<()> {
        self.repo
            .find_by_id(blog_id)
            .await?
            .ok_or(ContentError::BlogNotFound)?;

        self.repo.save(blog_id, user_id).await
    }

    /// Unsave toggle
    pub async fn unsave(&self, blog_id: &BlogId, user_id: &UserId) -> ContentResult<()> {
        self.repo
            .find_by_id(blog_id)
            .await?
            .ok_or(ContentError::BlogNotFound)?;

        self.repo.unsave(blog_id, user_id).await
    }

    async fn require_detail(&self, slug: &str) -> ContentResult<BlogDetail> {
        self.repo
            .load_detail(slug)
            .await?
            .ok_or(ContentError::BlogNotFound)
    }
}
