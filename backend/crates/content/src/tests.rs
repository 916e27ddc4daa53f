//! Unit tests for the content crate
//!
//! Use cases are exercised against in-memory fakes of the repository and
//! image-store traits; no database is involved. The fakes keep the same
//! contracts as the Postgres implementation: membership checks decide the
//! toggle errors, and save/unsave move the counter with the membership.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use kernel::id::{BlogId, CommentId, ReplyId, UserId};
use platform::images::{ImageAsset, ImageStore, ImageStoreError};

use crate::application::banners::{BannerUseCase, NewBannerInput};
use crate::application::blogs::{BlogUseCase, NewBlogInput, UpdateBlogInput};
use crate::application::comments::CommentUseCase;
use crate::application::replies::ReplyUseCase;
use crate::domain::entity::banner::Banner;
use crate::domain::entity::blog::Blog;
use crate::domain::entity::comment::Comment;
use crate::domain::entity::reply::Reply;
use crate::domain::list_query::ListQuery;
use crate::domain::read_model::{
    BannerView, BlogCard, BlogDetail, BlogListItem, BlogPage, CommentDetail, ReplyDetail,
    ThumbnailView, UserSummary,
};
use crate::domain::repository::{
    BannerRepository, BlogRepository, CommentRepository, ReplyRepository,
};
use crate::error::{ContentError, ContentResult};

// ============================================================================
// In-memory image store fake
// ============================================================================

#[derive(Clone, Default)]
struct MemoryImageStore {
    uploads: Arc<Mutex<Vec<String>>>,
    deleted: Arc<Mutex<Vec<String>>>,
    fail_uploads: Arc<AtomicBool>,
}

impl MemoryImageStore {
    fn set_fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    fn deleted_ids(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

impl ImageStore for MemoryImageStore {
    async fn upload(&self, _file: &str, folder: &str) -> Result<ImageAsset, ImageStoreError> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(ImageStoreError::Rejected("quota exceeded".to_string()));
        }

        let mut uploads = self.uploads.lock().unwrap();
        let public_id = format!("{}/{}", folder, uploads.len());
        uploads.push(public_id.clone());

        Ok(ImageAsset {
            url: format!("https://cdn.test/{public_id}.webp"),
            public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), ImageStoreError> {
        self.deleted.lock().unwrap().push(public_id.to_string());
        Ok(())
    }
}

// ============================================================================
// In-memory content store fake
// ============================================================================

#[derive(Default)]
struct StoreInner {
    blogs: Vec<Blog>,
    blog_likes: Vec<(BlogId, UserId)>,
    saved_blogs: Vec<(UserId, BlogId)>,
    comments: Vec<Comment>,
    comment_likes: Vec<(CommentId, UserId)>,
    replies: Vec<Reply>,
    reply_likes: Vec<(ReplyId, UserId)>,
}

#[derive(Clone, Default)]
struct MemoryContentStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl MemoryContentStore {
    fn blog_count(&self) -> usize {
        self.inner.lock().unwrap().blogs.len()
    }

    fn reply_count(&self) -> usize {
        self.inner.lock().unwrap().replies.len()
    }

    fn saves_of(&self, blog_id: &BlogId) -> i64 {
        self.inner
            .lock()
            .unwrap()
            .blogs
            .iter()
            .find(|b| b.blog_id == *blog_id)
            .map(|b| b.saves)
            .unwrap()
    }

    fn is_saved(&self, user_id: &UserId, blog_id: &BlogId) -> bool {
        self.inner
            .lock()
            .unwrap()
            .saved_blogs
            .contains(&(*user_id, *blog_id))
    }
}

// Resolved references carry synthetic contact fields; the tests only
// assert on ids and counts.
fn summary(user_id: &UserId) -> UserSummary {
    UserSummary {
        user_id: *user_id.as_uuid(),
        name: "Reader".to_string(),
        email: format!("{user_id}@example.com"),
        picture_url: "https://cdn.test/avatar.webp".to_string(),
    }
}

impl StoreInner {
    fn detail(&self, slug: &str) -> Option<BlogDetail> {
        let blog = self.blogs.iter().find(|b| b.slug.as_str() == slug)?;

        // Insertion order stands in for the created_at ordering the SQL
        // queries apply.
        let comments = self
            .comments
            .iter()
            .filter(|c| c.blog_id == blog.blog_id)
            .map(|c| CommentDetail {
                comment_id: c.comment_id.into_uuid(),
                user: summary(&c.user_id),
                text: c.text.clone(),
                likes: self
                    .comment_likes
                    .iter()
                    .filter(|(id, _)| *id == c.comment_id)
                    .map(|(_, u)| summary(u))
                    .collect(),
                replies: self
                    .replies
                    .iter()
                    .filter(|r| r.comment_id == c.comment_id)
                    .map(|r| ReplyDetail {
                        reply_id: r.reply_id.into_uuid(),
                        user: summary(&r.user_id),
                        text: r.text.clone(),
                        likes: self
                            .reply_likes
                            .iter()
                            .filter(|(id, _)| *id == r.reply_id)
                            .map(|(_, u)| summary(u))
                            .collect(),
                        created_at: r.created_at,
                        updated_at: r.updated_at,
                    })
                    .collect(),
                created_at: c.created_at,
                updated_at: c.updated_at,
            })
            .collect();

        Some(BlogDetail {
            blog_id: blog.blog_id.into_uuid(),
            title: blog.title.clone(),
            content: blog.content.clone(),
            highlight: blog.highlight.clone(),
            thumbnail: ThumbnailView {
                url: blog.thumbnail.url.clone(),
                public_id: blog.thumbnail.public_id.clone(),
            },
            author: summary(&blog.author_id),
            category: blog.category.clone(),
            slug: blog.slug.as_str().to_string(),
            likes: self
                .blog_likes
                .iter()
                .filter(|(id, _)| *id == blog.blog_id)
                .map(|(_, u)| summary(u))
                .collect(),
            saves: blog.saves,
            views: blog.views,
            comments,
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        })
    }

    fn list_item(&self, blog: &Blog) -> BlogListItem {
        let comment_ids: Vec<CommentId> = self
            .comments
            .iter()
            .filter(|c| c.blog_id == blog.blog_id)
            .map(|c| c.comment_id)
            .collect();
        let reply_count = self
            .replies
            .iter()
            .filter(|r| comment_ids.contains(&r.comment_id))
            .count();

        BlogListItem {
            blog_id: blog.blog_id.into_uuid(),
            title: blog.title.clone(),
            slug: blog.slug.as_str().to_string(),
            highlight: blog.highlight.clone(),
            author_name: "Author".to_string(),
            thumbnail_url: blog.thumbnail.url.clone(),
            likes_count: self
                .blog_likes
                .iter()
                .filter(|(id, _)| *id == blog.blog_id)
                .count() as i64,
            comments_count: (comment_ids.len() + reply_count) as i64,
            views: blog.views,
            created_at: blog.created_at,
        }
    }
}

impl BlogRepository for MemoryContentStore {
    async fn create(&self, blog: &Blog) -> ContentResult<()> {
        self.inner.lock().unwrap().blogs.push(blog.clone());
        Ok(())
    }

    async fn find_by_slug(&self, slug: &str) -> ContentResult<Option<Blog>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .blogs
            .iter()
            .find(|b| b.slug.as_str() == slug)
            .cloned())
    }

    async fn find_by_id(&self, blog_id: &BlogId) -> ContentResult<Option<Blog>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .blogs
            .iter()
            .find(|b| b.blog_id == *blog_id)
            .cloned())
    }

    async fn update(&self, blog: &Blog) -> ContentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(existing) = inner.blogs.iter_mut().find(|b| b.blog_id == blog.blog_id) {
            *existing = blog.clone();
        }
        Ok(())
    }

    async fn increment_views(&self, blog_id: &BlogId) -> ContentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(blog) = inner.blogs.iter_mut().find(|b| b.blog_id == *blog_id) {
            blog.views += 1;
        }
        Ok(())
    }

    async fn load_detail(&self, slug: &str) -> ContentResult<Option<BlogDetail>> {
        Ok(self.inner.lock().unwrap().detail(slug))
    }

    async fn list(&self, query: &ListQuery) -> ContentResult<BlogPage> {
        let inner = self.inner.lock().unwrap();

        let mut matching: Vec<&Blog> = inner
            .blogs
            .iter()
            .filter(|b| {
                query.search.as_deref().is_none_or(|s| {
                    let needle = s.to_lowercase();
                    b.title.to_lowercase().contains(&needle)
                        || b.highlight.to_lowercase().contains(&needle)
                })
            })
            .filter(|b| query.category.as_deref().is_none_or(|c| b.category == c))
            .collect();
        // Newest first; the fake ignores the other sort keys.
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len() as i64;
        let items = matching
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit as usize)
            .map(|b| inner.list_item(b))
            .collect();

        Ok(BlogPage { items, total })
    }

    async fn random(&self, n: i64) -> ContentResult<Vec<BlogCard>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .blogs
            .iter()
            .take(n as usize)
            .map(|b| BlogCard {
                blog_id: b.blog_id.into_uuid(),
                title: b.title.clone(),
                slug: b.slug.as_str().to_string(),
                category: b.category.clone(),
                author_name: "Author".to_string(),
                thumbnail_url: b.thumbnail.url.clone(),
                created_at: b.created_at,
            })
            .collect())
    }

    async fn latest(&self, n: i64) -> ContentResult<Vec<BlogListItem>> {
        let inner = self.inner.lock().unwrap();
        let mut blogs: Vec<&Blog> = inner.blogs.iter().collect();
        blogs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(blogs
            .into_iter()
            .take(n as usize)
            .map(|b| inner.list_item(b))
            .collect())
    }

    async fn popular(&self, n: i64) -> ContentResult<Vec<BlogListItem>> {
        let inner = self.inner.lock().unwrap();
        let mut blogs: Vec<&Blog> = inner.blogs.iter().collect();
        blogs.sort_by(|a, b| b.views.cmp(&a.views));
        Ok(blogs
            .into_iter()
            .take(n as usize)
            .map(|b| inner.list_item(b))
            .collect())
    }

    async fn like(&self, blog_id: &BlogId, user_id: &UserId) -> ContentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.blog_likes.contains(&(*blog_id, *user_id)) {
            return Err(ContentError::AlreadyLiked("Blog"));
        }
        inner.blog_likes.push((*blog_id, *user_id));
        Ok(())
    }

    async fn unlike(&self, blog_id: &BlogId, user_id: &UserId) -> ContentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.blog_likes.contains(&(*blog_id, *user_id)) {
            return Err(ContentError::NotLiked("Blog"));
        }
        inner
            .blog_likes
            .retain(|(b, u)| !(b == blog_id && u == user_id));
        Ok(())
    }

    async fn save(&self, blog_id: &BlogId, user_id: &UserId) -> ContentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.saved_blogs.contains(&(*user_id, *blog_id)) {
            return Err(ContentError::AlreadySaved);
        }
        inner.saved_blogs.push((*user_id, *blog_id));
        if let Some(blog) = inner.blogs.iter_mut().find(|b| b.blog_id == *blog_id) {
            blog.saves += 1;
        }
        Ok(())
    }

    async fn unsave(&self, blog_id: &BlogId, user_id: &UserId) -> ContentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.saved_blogs.contains(&(*user_id, *blog_id)) {
            return Err(ContentError::NotSaved);
        }
        inner
            .saved_blogs
            .retain(|(u, b)| !(u == user_id && b == blog_id));
        if let Some(blog) = inner.blogs.iter_mut().find(|b| b.blog_id == *blog_id) {
            blog.saves -= 1;
        }
        Ok(())
    }
}

impl CommentRepository for MemoryContentStore {
    async fn create(&self, comment: &Comment) -> ContentResult<()> {
        self.inner.lock().unwrap().comments.push(comment.clone());
        Ok(())
    }

    async fn find_by_id(&self, comment_id: &CommentId) -> ContentResult<Option<Comment>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .comments
            .iter()
            .find(|c| c.comment_id == *comment_id)
            .cloned())
    }

    async fn delete_cascade(&self, comment: &Comment) -> ContentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let reply_ids: Vec<ReplyId> = inner
            .replies
            .iter()
            .filter(|r| r.comment_id == comment.comment_id)
            .map(|r| r.reply_id)
            .collect();

        inner
            .reply_likes
            .retain(|(id, _)| !reply_ids.contains(id));
        inner.replies.retain(|r| r.comment_id != comment.comment_id);
        inner
            .comment_likes
            .retain(|(id, _)| *id != comment.comment_id);
        inner.comments.retain(|c| c.comment_id != comment.comment_id);
        Ok(())
    }

    async fn like(&self, comment_id: &CommentId, user_id: &UserId) -> ContentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.comment_likes.contains(&(*comment_id, *user_id)) {
            return Err(ContentError::AlreadyLiked("Comment"));
        }
        inner.comment_likes.push((*comment_id, *user_id));
        Ok(())
    }

    async fn unlike(&self, comment_id: &CommentId, user_id: &UserId) -> ContentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.comment_likes.contains(&(*comment_id, *user_id)) {
            return Err(ContentError::NotLiked("Comment"));
        }
        inner
            .comment_likes
            .retain(|(c, u)| !(c == comment_id && u == user_id));
        Ok(())
    }
}

impl ReplyRepository for MemoryContentStore {
    async fn create(&self, reply: &Reply) -> ContentResult<()> {
        self.inner.lock().unwrap().replies.push(reply.clone());
        Ok(())
    }

    async fn find_by_id(&self, reply_id: &ReplyId) -> ContentResult<Option<Reply>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .replies
            .iter()
            .find(|r| r.reply_id == *reply_id)
            .cloned())
    }

    async fn delete(&self, reply_id: &ReplyId) -> ContentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.reply_likes.retain(|(id, _)| id != reply_id);
        inner.replies.retain(|r| r.reply_id != *reply_id);
        Ok(())
    }

    async fn like(&self, reply_id: &ReplyId, user_id: &UserId) -> ContentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.reply_likes.contains(&(*reply_id, *user_id)) {
            return Err(ContentError::AlreadyLiked("Reply"));
        }
        inner.reply_likes.push((*reply_id, *user_id));
        Ok(())
    }

    async fn unlike(&self, reply_id: &ReplyId, user_id: &UserId) -> ContentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.reply_likes.contains(&(*reply_id, *user_id)) {
            return Err(ContentError::NotLiked("Reply"));
        }
        inner
            .reply_likes
            .retain(|(r, u)| !(r == reply_id && u == user_id));
        Ok(())
    }
}

// ============================================================================
// In-memory banner store fake
// ============================================================================

#[derive(Clone, Default)]
struct MemoryBannerStore {
    banners: Arc<Mutex<Vec<Banner>>>,
}

impl BannerRepository for MemoryBannerStore {
    async fn create(&self, banner: &Banner) -> ContentResult<()> {
        self.banners.lock().unwrap().push(banner.clone());
        Ok(())
    }

    async fn find_by_id(&self, banner_id: &kernel::id::BannerId) -> ContentResult<Option<Banner>> {
        Ok(self
            .banners
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.banner_id == *banner_id)
            .cloned())
    }

    async fn delete(&self, banner_id: &kernel::id::BannerId) -> ContentResult<()> {
        self.banners
            .lock()
            .unwrap()
            .retain(|b| b.banner_id != *banner_id);
        Ok(())
    }

    async fn list(&self) -> ContentResult<Vec<BannerView>> {
        Ok(self
            .banners
            .lock()
            .unwrap()
            .iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    // First-n sample; uniformity is the SQL implementation's concern
    async fn random(&self, n: i64) -> ContentResult<Vec<BannerView>> {
        Ok(self
            .banners
            .lock()
            .unwrap()
            .iter()
            .take(n as usize)
            .cloned()
            .map(Into::into)
            .collect())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn blog_use_case(
    store: &MemoryContentStore,
    images: &MemoryImageStore,
) -> BlogUseCase<MemoryContentStore, MemoryImageStore> {
    BlogUseCase::new(Arc::new(store.clone()), Arc::new(images.clone()))
}

fn comment_use_case(
    store: &MemoryContentStore,
) -> CommentUseCase<MemoryContentStore, MemoryContentStore> {
    CommentUseCase::new(Arc::new(store.clone()), Arc::new(store.clone()))
}

fn reply_use_case(
    store: &MemoryContentStore,
) -> ReplyUseCase<MemoryContentStore, MemoryContentStore, MemoryContentStore> {
    ReplyUseCase::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
    )
}

fn new_blog_input(title: &str) -> NewBlogInput {
    NewBlogInput {
        title: title.to_string(),
        content: "<p>Body</p>".to_string(),
        highlight: "A highlight".to_string(),
        category: "tech".to_string(),
        thumbnail: "data:image/webp;base64,AAAA".to_string(),
    }
}

async fn seed_blog(store: &MemoryContentStore, images: &MemoryImageStore, title: &str) -> BlogDetail {
    blog_use_case(store, images)
        .create(new_blog_input(title), UserId::new())
        .await
        .unwrap()
}

// ============================================================================
// Blog creation and thumbnail ordering
// ============================================================================

#[tokio::test]
async fn test_create_blog_derives_slug() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();

    let blog = seed_blog(&store, &images, "Hello, Rust World!").await;

    assert_eq!(blog.slug, "hello-rust-world");
    assert_eq!(blog.views, 0);
    assert_eq!(images.upload_count(), 1);
}

#[tokio::test]
async fn test_create_blog_aborts_on_upload_failure() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    images.set_fail_uploads(true);

    let result = blog_use_case(&store, &images)
        .create(new_blog_input("Doomed Post"), UserId::new())
        .await;

    // Upload comes first; nothing was persisted.
    assert!(matches!(result, Err(ContentError::ImageStore(_))));
    assert_eq!(store.blog_count(), 0);
}

#[tokio::test]
async fn test_create_blog_requires_all_fields() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();

    let mut input = new_blog_input("Post");
    input.highlight = String::new();

    let result = blog_use_case(&store, &images)
        .create(input, UserId::new())
        .await;

    assert!(matches!(result, Err(ContentError::Validation(_))));
    assert_eq!(images.upload_count(), 0);
}

#[tokio::test]
async fn test_update_title_regenerates_slug() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = blog_use_case(&store, &images);

    seed_blog(&store, &images, "First Title").await;

    let updated = use_case
        .update(
            "first-title",
            UpdateBlogInput {
                title: Some("Second Title".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.slug, "second-title");
    assert!(use_case.get_by_slug("first-title").await.is_err());
}

#[tokio::test]
async fn test_update_replaces_thumbnail_old_image_deleted_first() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = blog_use_case(&store, &images);

    let created = seed_blog(&store, &images, "Post").await;
    let old_public_id = created.thumbnail.public_id.clone();

    let updated = use_case
        .update(
            "post",
            UpdateBlogInput {
                thumbnail: Some("data:image/webp;base64,BBBB".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(images.deleted_ids(), vec![old_public_id.clone()]);
    assert_ne!(updated.thumbnail.public_id, old_public_id);
}

#[tokio::test]
async fn test_update_failed_reupload_still_deletes_old_image() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = blog_use_case(&store, &images);

    let created = seed_blog(&store, &images, "Post").await;
    images.set_fail_uploads(true);

    let result = use_case
        .update(
            "post",
            UpdateBlogInput {
                thumbnail: Some("data:image/webp;base64,BBBB".to_string()),
                ..Default::default()
            },
        )
        .await;

    // The stale-reference window: deletion precedes the failed upload.
    assert!(matches!(result, Err(ContentError::ImageStore(_))));
    assert_eq!(images.deleted_ids(), vec![created.thumbnail.public_id]);
}

// ============================================================================
// Views
// ============================================================================

#[tokio::test]
async fn test_each_read_increments_views() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = blog_use_case(&store, &images);

    seed_blog(&store, &images, "Counted Post").await;

    use_case.get_by_slug("counted-post").await.unwrap();
    use_case.get_by_slug("counted-post").await.unwrap();
    let third = use_case.get_by_slug("counted-post").await.unwrap();

    assert_eq!(third.views, 3);
}

#[tokio::test]
async fn test_unknown_slug_is_not_found() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();

    let result = blog_use_case(&store, &images).get_by_slug("missing").await;

    assert!(matches!(result, Err(ContentError::BlogNotFound)));
}

// ============================================================================
// Like toggles
// ============================================================================

#[tokio::test]
async fn test_like_blog_twice_conflicts() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = blog_use_case(&store, &images);
    let user = UserId::new();

    seed_blog(&store, &images, "Post").await;

    let liked = use_case.like("post", &user).await.unwrap();
    assert_eq!(liked.likes.len(), 1);

    let again = use_case.like("post", &user).await;
    assert!(matches!(again, Err(ContentError::AlreadyLiked("Blog"))));
}

#[tokio::test]
async fn test_unlike_without_like_conflicts() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = blog_use_case(&store, &images);

    seed_blog(&store, &images, "Post").await;

    let result = use_case.unlike("post", &UserId::new()).await;
    assert!(matches!(result, Err(ContentError::NotLiked("Blog"))));
}

#[tokio::test]
async fn test_like_unlike_round_trip() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = blog_use_case(&store, &images);
    let user = UserId::new();

    seed_blog(&store, &images, "Post").await;

    use_case.like("post", &user).await.unwrap();
    let unliked = use_case.unlike("post", &user).await.unwrap();

    assert!(unliked.likes.is_empty());
}

// ============================================================================
// Save toggles
// ============================================================================

#[tokio::test]
async fn test_save_unsave_round_trip() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = blog_use_case(&store, &images);
    let user = UserId::new();

    let created = seed_blog(&store, &images, "Post").await;
    let blog_id = BlogId::from_uuid(created.blog_id);

    use_case.save(&blog_id, &user).await.unwrap();
    assert_eq!(store.saves_of(&blog_id), 1);
    assert!(store.is_saved(&user, &blog_id));

    use_case.unsave(&blog_id, &user).await.unwrap();
    assert_eq!(store.saves_of(&blog_id), 0);
    assert!(!store.is_saved(&user, &blog_id));
}

#[tokio::test]
async fn test_save_twice_conflicts() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = blog_use_case(&store, &images);
    let user = UserId::new();

    let created = seed_blog(&store, &images, "Post").await;
    let blog_id = BlogId::from_uuid(created.blog_id);

    use_case.save(&blog_id, &user).await.unwrap();
    let again = use_case.save(&blog_id, &user).await;

    assert!(matches!(again, Err(ContentError::AlreadySaved)));
    assert_eq!(store.saves_of(&blog_id), 1);
}

#[tokio::test]
async fn test_unsave_never_saved_conflicts() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = blog_use_case(&store, &images);

    let created = seed_blog(&store, &images, "Post").await;
    let blog_id = BlogId::from_uuid(created.blog_id);

    let result = use_case.unsave(&blog_id, &UserId::new()).await;
    assert!(matches!(result, Err(ContentError::NotSaved)));
}

#[tokio::test]
async fn test_save_unknown_blog_is_not_found() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();

    let result = blog_use_case(&store, &images)
        .save(&BlogId::new(), &UserId::new())
        .await;

    assert!(matches!(result, Err(ContentError::BlogNotFound)));
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn test_add_comment_appears_in_populated_blog() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = comment_use_case(&store);
    let user = UserId::new();

    let created = seed_blog(&store, &images, "Post").await;
    let blog_id = BlogId::from_uuid(created.blog_id);

    let blog = use_case.add(&blog_id, &user, "Nice article").await.unwrap();

    assert_eq!(blog.comments.len(), 1);
    assert_eq!(blog.comments[0].text, "Nice article");
    assert_eq!(blog.comments[0].user.user_id, *user.as_uuid());
}

#[tokio::test]
async fn test_add_comment_rejects_empty_text() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = comment_use_case(&store);

    let created = seed_blog(&store, &images, "Post").await;
    let blog_id = BlogId::from_uuid(created.blog_id);

    let result = use_case.add(&blog_id, &UserId::new(), "   ").await;
    assert!(matches!(result, Err(ContentError::Validation(_))));
}

#[tokio::test]
async fn test_delete_comment_cascades_replies() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let comments = comment_use_case(&store);
    let replies = reply_use_case(&store);
    let author = UserId::new();

    let created = seed_blog(&store, &images, "Post").await;
    let blog_id = BlogId::from_uuid(created.blog_id);

    let with_comment = comments.add(&blog_id, &author, "Parent").await.unwrap();
    let comment_id = CommentId::from_uuid(with_comment.comments[0].comment_id);

    replies
        .add(&blog_id, &comment_id, &UserId::new(), "First reply")
        .await
        .unwrap();
    replies
        .add(&blog_id, &comment_id, &UserId::new(), "Second reply")
        .await
        .unwrap();
    assert_eq!(store.reply_count(), 2);

    let after = comments.delete(&blog_id, &comment_id, &author).await.unwrap();

    assert!(after.comments.is_empty());
    assert_eq!(store.reply_count(), 0);
}

#[tokio::test]
async fn test_delete_comment_requires_author() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = comment_use_case(&store);
    let author = UserId::new();

    let created = seed_blog(&store, &images, "Post").await;
    let blog_id = BlogId::from_uuid(created.blog_id);

    let with_comment = use_case.add(&blog_id, &author, "Mine").await.unwrap();
    let comment_id = CommentId::from_uuid(with_comment.comments[0].comment_id);

    let result = use_case.delete(&blog_id, &comment_id, &UserId::new()).await;

    assert!(matches!(result, Err(ContentError::NotAuthor("comment"))));
    assert!(store.inner.lock().unwrap().comments.len() == 1);
}

#[tokio::test]
async fn test_comment_must_belong_to_blog_in_path() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = comment_use_case(&store);
    let user = UserId::new();

    let first = seed_blog(&store, &images, "First Post").await;
    let second = seed_blog(&store, &images, "Second Post").await;

    let with_comment = use_case
        .add(&BlogId::from_uuid(first.blog_id), &user, "On the first")
        .await
        .unwrap();
    let comment_id = CommentId::from_uuid(with_comment.comments[0].comment_id);

    let result = use_case
        .like(&BlogId::from_uuid(second.blog_id), &comment_id, &user)
        .await;

    assert!(matches!(result, Err(ContentError::CommentNotFound)));
}

#[tokio::test]
async fn test_comment_like_toggle_conflicts() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = comment_use_case(&store);
    let user = UserId::new();

    let created = seed_blog(&store, &images, "Post").await;
    let blog_id = BlogId::from_uuid(created.blog_id);

    let with_comment = use_case.add(&blog_id, &user, "Likeable").await.unwrap();
    let comment_id = CommentId::from_uuid(with_comment.comments[0].comment_id);

    let liked = use_case.like(&blog_id, &comment_id, &user).await.unwrap();
    assert_eq!(liked.comments[0].likes.len(), 1);

    let again = use_case.like(&blog_id, &comment_id, &user).await;
    assert!(matches!(again, Err(ContentError::AlreadyLiked("Comment"))));

    use_case.unlike(&blog_id, &comment_id, &user).await.unwrap();
    let under = use_case.unlike(&blog_id, &comment_id, &user).await;
    assert!(matches!(under, Err(ContentError::NotLiked("Comment"))));
}

// ============================================================================
// Replies
// ============================================================================

#[tokio::test]
async fn test_reply_lifecycle() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let comments = comment_use_case(&store);
    let replies = reply_use_case(&store);
    let replier = UserId::new();

    let created = seed_blog(&store, &images, "Post").await;
    let blog_id = BlogId::from_uuid(created.blog_id);

    let with_comment = comments.add(&blog_id, &UserId::new(), "Parent").await.unwrap();
    let comment_id = CommentId::from_uuid(with_comment.comments[0].comment_id);

    let with_reply = replies
        .add(&blog_id, &comment_id, &replier, "A reply")
        .await
        .unwrap();
    assert_eq!(with_reply.comments[0].replies.len(), 1);

    let reply_id = ReplyId::from_uuid(with_reply.comments[0].replies[0].reply_id);

    let after = replies
        .delete(&blog_id, &comment_id, &reply_id, &replier)
        .await
        .unwrap();

    // The comment survives its reply.
    assert_eq!(after.comments.len(), 1);
    assert!(after.comments[0].replies.is_empty());
}

#[tokio::test]
async fn test_delete_reply_requires_author() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let comments = comment_use_case(&store);
    let replies = reply_use_case(&store);
    let replier = UserId::new();

    let created = seed_blog(&store, &images, "Post").await;
    let blog_id = BlogId::from_uuid(created.blog_id);

    let with_comment = comments.add(&blog_id, &UserId::new(), "Parent").await.unwrap();
    let comment_id = CommentId::from_uuid(with_comment.comments[0].comment_id);

    let with_reply = replies
        .add(&blog_id, &comment_id, &replier, "Mine")
        .await
        .unwrap();
    let reply_id = ReplyId::from_uuid(with_reply.comments[0].replies[0].reply_id);

    let result = replies
        .delete(&blog_id, &comment_id, &reply_id, &UserId::new())
        .await;

    assert!(matches!(result, Err(ContentError::NotAuthor("reply"))));
    assert_eq!(store.reply_count(), 1);
}

#[tokio::test]
async fn test_reply_must_belong_to_comment_in_path() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let comments = comment_use_case(&store);
    let replies = reply_use_case(&store);
    let user = UserId::new();

    let created = seed_blog(&store, &images, "Post").await;
    let blog_id = BlogId::from_uuid(created.blog_id);

    let first = comments.add(&blog_id, &user, "First").await.unwrap();
    let first_id = CommentId::from_uuid(first.comments[0].comment_id);
    let second = comments.add(&blog_id, &user, "Second").await.unwrap();
    let second_id = CommentId::from_uuid(second.comments[1].comment_id);

    let with_reply = replies
        .add(&blog_id, &first_id, &user, "Under the first")
        .await
        .unwrap();
    let reply_id = ReplyId::from_uuid(with_reply.comments[0].replies[0].reply_id);

    let result = replies
        .delete(&blog_id, &second_id, &reply_id, &user)
        .await;

    assert!(matches!(result, Err(ContentError::ReplyNotFound)));
}

#[tokio::test]
async fn test_reply_like_toggle_conflicts() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let comments = comment_use_case(&store);
    let replies = reply_use_case(&store);
    let user = UserId::new();

    let created = seed_blog(&store, &images, "Post").await;
    let blog_id = BlogId::from_uuid(created.blog_id);

    let with_comment = comments.add(&blog_id, &user, "Parent").await.unwrap();
    let comment_id = CommentId::from_uuid(with_comment.comments[0].comment_id);
    let with_reply = replies
        .add(&blog_id, &comment_id, &user, "Likeable")
        .await
        .unwrap();
    let reply_id = ReplyId::from_uuid(with_reply.comments[0].replies[0].reply_id);

    replies.like(&blog_id, &reply_id, &user).await.unwrap();
    let again = replies.like(&blog_id, &reply_id, &user).await;
    assert!(matches!(again, Err(ContentError::AlreadyLiked("Reply"))));
}

// ============================================================================
// Listings
// ============================================================================

#[tokio::test]
async fn test_list_paginates_and_reports_total_pages() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = blog_use_case(&store, &images);

    for i in 0..12 {
        seed_blog(&store, &images, &format!("Post Number {i}")).await;
    }

    let page = use_case
        .list(ListQuery::from_params(
            None,
            None,
            None,
            None,
            Some("3".to_string()),
            Some("5".to_string()),
        ))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.current_page, 3);
}

#[tokio::test]
async fn test_list_search_is_case_insensitive() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = blog_use_case(&store, &images);

    seed_blog(&store, &images, "Learning Rust Ownership").await;
    seed_blog(&store, &images, "Gardening Basics").await;

    let page = use_case
        .list(ListQuery::from_params(
            Some("RUST".to_string()),
            None,
            None,
            None,
            None,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].slug, "learning-rust-ownership");
}

#[tokio::test]
async fn test_list_derives_comment_and_like_counts() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let blogs = blog_use_case(&store, &images);
    let comments = comment_use_case(&store);
    let replies = reply_use_case(&store);
    let user = UserId::new();

    let created = seed_blog(&store, &images, "Post").await;
    let blog_id = BlogId::from_uuid(created.blog_id);

    let with_comment = comments.add(&blog_id, &user, "One").await.unwrap();
    let comment_id = CommentId::from_uuid(with_comment.comments[0].comment_id);
    comments.add(&blog_id, &user, "Two").await.unwrap();
    replies
        .add(&blog_id, &comment_id, &user, "Nested")
        .await
        .unwrap();

    blogs.like("post", &user).await.unwrap();
    blogs.like("post", &UserId::new()).await.unwrap();

    let page = blogs
        .list(ListQuery::from_params(None, None, None, None, None, None))
        .await
        .unwrap();

    // commentsCount counts comments plus all nested replies.
    assert_eq!(page.items[0].comments_count, 3);
    assert_eq!(page.items[0].likes_count, 2);
}

#[tokio::test]
async fn test_latest_and_popular_are_capped_at_five() {
    let store = MemoryContentStore::default();
    let images = MemoryImageStore::default();
    let use_case = blog_use_case(&store, &images);

    for i in 0..7 {
        seed_blog(&store, &images, &format!("Post Number {i}")).await;
    }

    let lists = use_case.latest_and_popular().await.unwrap();

    assert_eq!(lists.latest.len(), 5);
    assert_eq!(lists.popular.len(), 5);
}

// ============================================================================
// Banners
// ============================================================================

#[tokio::test]
async fn test_create_banner_requires_image() {
    let repo = MemoryBannerStore::default();
    let images = MemoryImageStore::default();
    let use_case = BannerUseCase::new(Arc::new(repo), Arc::new(images.clone()));

    let result = use_case
        .create(NewBannerInput {
            title: "Sale".to_string(),
            link: "https://example.com/sale".to_string(),
            image: String::new(),
        })
        .await;

    assert!(matches!(result, Err(ContentError::Validation(_))));
    assert_eq!(images.upload_count(), 0);
}

#[tokio::test]
async fn test_delete_banner_removes_hosted_image() {
    let repo = MemoryBannerStore::default();
    let images = MemoryImageStore::default();
    let use_case = BannerUseCase::new(Arc::new(repo.clone()), Arc::new(images.clone()));

    let banner = use_case
        .create(NewBannerInput {
            title: "Sale".to_string(),
            link: "https://example.com/sale".to_string(),
            image: "data:image/webp;base64,AAAA".to_string(),
        })
        .await
        .unwrap();

    use_case.delete(&banner.banner_id).await.unwrap();

    assert_eq!(images.deleted_ids(), vec![banner.image.public_id]);
    assert!(repo.banners.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_random_banners_empty_store_is_not_found() {
    let repo = MemoryBannerStore::default();
    let images = MemoryImageStore::default();
    let use_case = BannerUseCase::new(Arc::new(repo), Arc::new(images));

    let result = use_case.random().await;

    assert!(matches!(result, Err(ContentError::BannerNotFound)));
}

#[tokio::test]
async fn test_random_banners_fills_both_slots() {
    let repo = MemoryBannerStore::default();
    let images = MemoryImageStore::default();
    let use_case = BannerUseCase::new(Arc::new(repo), Arc::new(images));

    for i in 0..3 {
        use_case
            .create(NewBannerInput {
                title: format!("Banner {i}"),
                link: "https://example.com".to_string(),
                image: "data:image/webp;base64,AAAA".to_string(),
            })
            .await
            .unwrap();
    }

    let random = use_case.random().await.unwrap();

    assert_eq!(random.two.len(), 2);
    assert!(!random.one.title.is_empty());
}
