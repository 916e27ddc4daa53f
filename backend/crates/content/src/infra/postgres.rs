//! PostgreSQL Repository Implementations
//!
//! Like sets are join tables, so every toggle is a single conditional
//! insert/delete; multi-row mutations run in one transaction.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use kernel::id::{BannerId, BlogId, CommentId, Id, ReplyId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{banner::Banner, blog::Blog, comment::Comment, reply::Reply};
use crate::domain::list_query::ListQuery;
use crate::domain::read_model::{
    BannerView, BlogBrief, BlogCard, BlogDetail, BlogListItem, BlogPage, CommentDetail,
    ReplyDetail, SiteTotals, ThumbnailView, UserBrief, UserSummary,
};
use crate::domain::repository::{
    BannerRepository, BlogRepository, CommentRepository, ReplyRepository, StatisticsRepository,
};
use crate::domain::value_object::{image_ref::ImageRef, slug::Slug};
use crate::error::{ContentError, ContentResult};

/// Listing projection with the derived counts. `commentsCount` is the
/// blog's comments plus every reply nested under them.
const LIST_PROJECTION: &str = r#"
    SELECT
        b.blog_id,
        b.title,
        b.slug,
        b.highlight,
        u.name AS author_name,
        b.thumbnail_url,
        (SELECT COUNT(*) FROM blog_likes bl WHERE bl.blog_id = b.blog_id) AS likes_count,
        (SELECT COUNT(*) FROM comments c WHERE c.blog_id = b.blog_id)
            + (SELECT COUNT(*)
               FROM replies r
               JOIN comments c2 ON c2.comment_id = r.comment_id
               WHERE c2.blog_id = b.blog_id) AS comments_count,
        b.views,
        b.created_at
    FROM blogs b
    JOIN users u ON u.user_id = b.author_id
"#;

const LIST_FILTER: &str = r#"
    WHERE ($1::text IS NULL
           OR b.title ILIKE '%' || $1 || '%'
           OR b.highlight ILIKE '%' || $1 || '%'
           OR u.name ILIKE '%' || $1 || '%')
      AND ($2::text IS NULL OR b.category = $2)
"#;

/// PostgreSQL-backed content repository
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Blog Repository Implementation
// ============================================================================

impl BlogRepository for PgContentRepository {
    async fn create(&self, blog: &Blog) -> ContentResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO blogs (
                blog_id,
                title,
                content,
                highlight,
                thumbnail_url,
                thumbnail_public_id,
                author_id,
                category,
                slug,
                saves,
                views,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(blog.blog_id.as_uuid())
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(&blog.highlight)
        .bind(&blog.thumbnail.url)
        .bind(&blog.thumbnail.public_id)
        .bind(blog.author_id.as_uuid())
        .bind(&blog.category)
        .bind(blog.slug.as_str())
        .bind(blog.saves)
        .bind(blog.views)
        .bind(blog.created_at)
        .bind(blog.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(ContentError::Validation(
                "A blog with this title already exists".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_slug(&self, slug: &str) -> ContentResult<Option<Blog>> {
        let row = sqlx::query_as::<_, BlogRow>(&format!("{BLOG_COLUMNS} WHERE slug = $1"))
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.into_blog()))
    }

    async fn find_by_id(&self, blog_id: &BlogId) -> ContentResult<Option<Blog>> {
        let row = sqlx::query_as::<_, BlogRow>(&format!("{BLOG_COLUMNS} WHERE blog_id = $1"))
            .bind(blog_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.into_blog()))
    }

    async fn update(&self, blog: &Blog) -> ContentResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE blogs SET
                title = $2,
                content = $3,
                highlight = $4,
                thumbnail_url = $5,
                thumbnail_public_id = $6,
                category = $7,
                slug = $8,
                updated_at = $9
            WHERE blog_id = $1
            "#,
        )
        .bind(blog.blog_id.as_uuid())
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(&blog.highlight)
        .bind(&blog.thumbnail.url)
        .bind(&blog.thumbnail.public_id)
        .bind(&blog.category)
        .bind(blog.slug.as_str())
        .bind(blog.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(ContentError::Validation(
                "A blog with this title already exists".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn increment_views(&self, blog_id: &BlogId) -> ContentResult<()> {
        sqlx::query("UPDATE blogs SET views = views + 1 WHERE blog_id = $1")
            .bind(blog_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn load_detail(&self, slug: &str) -> ContentResult<Option<BlogDetail>> {
        let Some(blog) = sqlx::query_as::<_, BlogDetailRow>(
            r#"
            SELECT
                b.blog_id,
                b.title,
                b.content,
                b.highlight,
                b.thumbnail_url,
                b.thumbnail_public_id,
                b.category,
                b.slug,
                b.saves,
                b.views,
                b.created_at,
                b.updated_at,
                u.user_id AS author_id,
                u.name AS author_name,
                u.email AS author_email,
                u.picture_url AS author_picture_url
            FROM blogs b
            JOIN users u ON u.user_id = b.author_id
            WHERE b.slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let likes = sqlx::query_as::<_, LikerRow>(
            r#"
            SELECT u.user_id, u.name, u.email, u.picture_url
            FROM blog_likes bl
            JOIN users u ON u.user_id = bl.user_id
            WHERE bl.blog_id = $1
            ORDER BY bl.created_at
            "#,
        )
        .bind(blog.blog_id)
        .fetch_all(&self.pool)
        .await?;

        let comment_rows = sqlx::query_as::<_, CommentDetailRow>(
            r#"
            SELECT
                c.comment_id,
                c.text,
                c.created_at,
                c.updated_at,
                u.user_id,
                u.name,
                u.email,
                u.picture_url
            FROM comments c
            JOIN users u ON u.user_id = c.user_id
            WHERE c.blog_id = $1
            ORDER BY c.created_at
            "#,
        )
        .bind(blog.blog_id)
        .fetch_all(&self.pool)
        .await?;

        let comment_ids: Vec<Uuid> = comment_rows.iter().map(|c| c.comment_id).collect();

        let comment_likes = sqlx::query_as::<_, TargetLikerRow>(
            r#"
            SELECT cl.comment_id AS target_id, u.user_id, u.name, u.email, u.picture_url
            FROM comment_likes cl
            JOIN users u ON u.user_id = cl.user_id
            WHERE cl.comment_id = ANY($1)
            ORDER BY cl.created_at
            "#,
        )
        .bind(&comment_ids)
        .fetch_all(&self.pool)
        .await?;

        let reply_rows = sqlx::query_as::<_, ReplyDetailRow>(
            r#"
            SELECT
                r.reply_id,
                r.comment_id,
                r.text,
                r.created_at,
                r.updated_at,
                u.user_id,
                u.name,
                u.email,
                u.picture_url
            FROM replies r
            JOIN users u ON u.user_id = r.user_id
            WHERE r.comment_id = ANY($1)
            ORDER BY r.created_at
            "#,
        )
        .bind(&comment_ids)
        .fetch_all(&self.pool)
        .await?;

        let reply_ids: Vec<Uuid> = reply_rows.iter().map(|r| r.reply_id).collect();

        let reply_likes = sqlx::query_as::<_, TargetLikerRow>(
            r#"
            SELECT rl.reply_id AS target_id, u.user_id, u.name, u.email, u.picture_url
            FROM reply_likes rl
            JOIN users u ON u.user_id = rl.user_id
            WHERE rl.reply_id = ANY($1)
            ORDER BY rl.created_at
            "#,
        )
        .bind(&reply_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(assemble_detail(
            blog,
            likes,
            comment_rows,
            comment_likes,
            reply_rows,
            reply_likes,
        )))
    }

    async fn list(&self, query: &ListQuery) -> ContentResult<BlogPage> {
        let sql = format!(
            "{LIST_PROJECTION} {LIST_FILTER} ORDER BY {} {} LIMIT $3 OFFSET $4",
            query.sort.sql_expr(),
            query.order.sql_keyword(),
        );

        let items = sqlx::query_as::<_, BlogListRow>(&sql)
            .bind(query.search.as_deref())
            .bind(query.category.as_deref())
            .bind(query.limit)
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(|r| r.into_item())
            .collect();

        let total = sqlx::query_scalar::<_, i64>(&format!(
            r#"
            SELECT COUNT(*)
            FROM blogs b
            JOIN users u ON u.user_id = b.author_id
            {LIST_FILTER}
            "#
        ))
        .bind(query.search.as_deref())
        .bind(query.category.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(BlogPage { items, total })
    }

    async fn random(&self, n: i64) -> ContentResult<Vec<BlogCard>> {
        let rows = sqlx::query_as::<_, BlogCardRow>(
            r#"
            SELECT
                b.blog_id,
                b.title,
                b.slug,
                b.category,
                u.name AS author_name,
                b.thumbnail_url,
                b.created_at
            FROM blogs b
            JOIN users u ON u.user_id = b.author_id
            ORDER BY random()
            LIMIT $1
            "#,
        )
        .bind(n)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_card()).collect())
    }

    async fn latest(&self, n: i64) -> ContentResult<Vec<BlogListItem>> {
        let rows = sqlx::query_as::<_, BlogListRow>(&format!(
            "{LIST_PROJECTION} ORDER BY b.created_at DESC LIMIT $1"
        ))
        .bind(n)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_item()).collect())
    }

    async fn popular(&self, n: i64) -> ContentResult<Vec<BlogListItem>> {
        let rows = sqlx::query_as::<_, BlogListRow>(&format!(
            "{LIST_PROJECTION} ORDER BY b.views DESC LIMIT $1"
        ))
        .bind(n)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_item()).collect())
    }

    async fn like(&self, blog_id: &BlogId, user_id: &UserId) -> ContentResult<()> {
        let inserted = sqlx::query(
            "INSERT INTO blog_likes (blog_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(blog_id.as_uuid())
        .bind(user_id.as_uuid())
        .execute(&self.pool)
        .await?
        .rows_affected();

        if inserted == 0 {
            return Err(ContentError::AlreadyLiked("Blog"));
        }

        Ok(())
    }

    async fn unlike(&self, blog_id: &BlogId, user_id: &UserId) -> ContentResult<()> {
        let deleted = sqlx::query("DELETE FROM blog_likes WHERE blog_id = $1 AND user_id = $2")
            .bind(blog_id.as_uuid())
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(ContentError::NotLiked("Blog"));
        }

        Ok(())
    }

    async fn save(&self, blog_id: &BlogId, user_id: &UserId) -> ContentResult<()> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            "INSERT INTO saved_blogs (user_id, blog_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(user_id.as_uuid())
        .bind(blog_id.as_uuid())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if inserted == 0 {
            return Err(ContentError::AlreadySaved);
        }

        sqlx::query("UPDATE blogs SET saves = saves + 1 WHERE blog_id = $1")
            .bind(blog_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn unsave(&self, blog_id: &BlogId, user_id: &UserId) -> ContentResult<()> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM saved_blogs WHERE user_id = $1 AND blog_id = $2")
            .bind(user_id.as_uuid())
            .bind(blog_id.as_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(ContentError::NotSaved);
        }

        sqlx::query("UPDATE blogs SET saves = saves - 1 WHERE blog_id = $1")
            .bind(blog_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgContentRepository {
    async fn create(&self, comment: &Comment) -> ContentResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO comments (comment_id, blog_id, user_id, text, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(comment.blog_id.as_uuid())
        .bind(comment.user_id.as_uuid())
        .bind(&comment.text)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE users SET total_comments = total_comments + 1 WHERE user_id = $1")
            .bind(comment.user_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn find_by_id(&self, comment_id: &CommentId) -> ContentResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, blog_id, user_id, text, created_at, updated_at
            FROM comments
            WHERE comment_id = $1
            "#,
        )
        .bind(comment_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_comment()))
    }

    async fn delete_cascade(&self, comment: &Comment) -> ContentResult<()> {
        let mut tx = self.pool.begin().await?;

        // reply_likes / comment_likes rows go via FK cascade
        sqlx::query("DELETE FROM replies WHERE comment_id = $1")
            .bind(comment.comment_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment.comment_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE users SET total_comments = total_comments - 1 WHERE user_id = $1")
            .bind(comment.user_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn like(&self, comment_id: &CommentId, user_id: &UserId) -> ContentResult<()> {
        let inserted = sqlx::query(
            "INSERT INTO comment_likes (comment_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(comment_id.as_uuid())
        .bind(user_id.as_uuid())
        .execute(&self.pool)
        .await?
        .rows_affected();

        if inserted == 0 {
            return Err(ContentError::AlreadyLiked("Comment"));
        }

        Ok(())
    }

    async fn unlike(&self, comment_id: &CommentId, user_id: &UserId) -> ContentResult<()> {
        let deleted =
            sqlx::query("DELETE FROM comment_likes WHERE comment_id = $1 AND user_id = $2")
                .bind(comment_id.as_uuid())
                .bind(user_id.as_uuid())
                .execute(&self.pool)
                .await?
                .rows_affected();

        if deleted == 0 {
            return Err(ContentError::NotLiked("Comment"));
        }

        Ok(())
    }
}

// ============================================================================
// Reply Repository Implementation
// ============================================================================

impl ReplyRepository for PgContentRepository {
    async fn create(&self, reply: &Reply) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO replies (reply_id, comment_id, user_id, text, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(reply.reply_id.as_uuid())
        .bind(reply.comment_id.as_uuid())
        .bind(reply.user_id.as_uuid())
        .bind(&reply.text)
        .bind(reply.created_at)
        .bind(reply.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, reply_id: &ReplyId) -> ContentResult<Option<Reply>> {
        let row = sqlx::query_as::<_, ReplyRow>(
            r#"
            SELECT reply_id, comment_id, user_id, text, created_at, updated_at
            FROM replies
            WHERE reply_id = $1
            "#,
        )
        .bind(reply_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_reply()))
    }

    async fn delete(&self, reply_id: &ReplyId) -> ContentResult<()> {
        sqlx::query("DELETE FROM replies WHERE reply_id = $1")
            .bind(reply_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn like(&self, reply_id: &ReplyId, user_id: &UserId) -> ContentResult<()> {
        let inserted = sqlx::query(
            "INSERT INTO reply_likes (reply_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(reply_id.as_uuid())
        .bind(user_id.as_uuid())
        .execute(&self.pool)
        .await?
        .rows_affected();

        if inserted == 0 {
            return Err(ContentError::AlreadyLiked("Reply"));
        }

        Ok(())
    }

    async fn unlike(&self, reply_id: &ReplyId, user_id: &UserId) -> ContentResult<()> {
        let deleted = sqlx::query("DELETE FROM reply_likes WHERE reply_id = $1 AND user_id = $2")
            .bind(reply_id.as_uuid())
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(ContentError::NotLiked("Reply"));
        }

        Ok(())
    }
}

// ============================================================================
// Banner Repository Implementation
// ============================================================================

impl BannerRepository for PgContentRepository {
    async fn create(&self, banner: &Banner) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO banners (banner_id, image_url, image_public_id, title, link, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(banner.banner_id.as_uuid())
        .bind(&banner.image.url)
        .bind(&banner.image.public_id)
        .bind(&banner.title)
        .bind(&banner.link)
        .bind(banner.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, banner_id: &BannerId) -> ContentResult<Option<Banner>> {
        let row = sqlx::query_as::<_, BannerRow>(
            r#"
            SELECT banner_id, image_url, image_public_id, title, link, created_at
            FROM banners
            WHERE banner_id = $1
            "#,
        )
        .bind(banner_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_banner()))
    }

    async fn delete(&self, banner_id: &BannerId) -> ContentResult<()> {
        sqlx::query("DELETE FROM banners WHERE banner_id = $1")
            .bind(banner_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list(&self) -> ContentResult<Vec<BannerView>> {
        let rows = sqlx::query_as::<_, BannerRow>(
            r#"
            SELECT banner_id, image_url, image_public_id, title, link, created_at
            FROM banners
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_view()).collect())
    }

    async fn random(&self, n: i64) -> ContentResult<Vec<BannerView>> {
        let rows = sqlx::query_as::<_, BannerRow>(
            r#"
            SELECT banner_id, image_url, image_public_id, title, link, created_at
            FROM banners
            ORDER BY random()
            LIMIT $1
            "#,
        )
        .bind(n)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_view()).collect())
    }
}

// ============================================================================
// Statistics Repository Implementation
// ============================================================================

impl StatisticsRepository for PgContentRepository {
    async fn add_visit(&self) -> ContentResult<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO site_visits (id, total_visits)
            VALUES (TRUE, 1)
            ON CONFLICT (id)
            DO UPDATE SET total_visits = site_visits.total_visits + 1
            RETURNING total_visits
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    async fn overview(&self) -> ContentResult<SiteTotals> {
        let row = sqlx::query_as::<_, SiteTotalsRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM blogs) AS total_blogs,
                (SELECT COUNT(*) FROM users) AS total_users,
                (SELECT COALESCE(SUM(views), 0)::BIGINT FROM blogs) AS total_views,
                (SELECT COUNT(*) FROM blog_likes) AS total_likes,
                (SELECT COUNT(*) FROM comments)
                    + (SELECT COUNT(*) FROM replies) AS total_comments,
                (SELECT COALESCE(MAX(total_visits), 0) FROM site_visits) AS total_visits
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(SiteTotals {
            total_blogs: row.total_blogs,
            total_users: row.total_users,
            total_views: row.total_views,
            total_likes: row.total_likes,
            total_comments: row.total_comments,
            total_visits: row.total_visits,
        })
    }

    async fn latest_users(&self, n: i64) -> ContentResult<Vec<UserBrief>> {
        let rows = sqlx::query_as::<_, UserBriefRow>(
            r#"
            SELECT user_id, name, email, created_at
            FROM users
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(n)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_brief()).collect())
    }

    async fn latest_blogs(&self, n: i64) -> ContentResult<Vec<BlogBrief>> {
        let rows = sqlx::query_as::<_, BlogBriefRow>(
            r#"
            SELECT b.blog_id, b.title, b.category, u.name AS author_name, b.created_at
            FROM blogs b
            JOIN users u ON u.user_id = b.author_id
            ORDER BY b.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(n)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_brief()).collect())
    }
}

// ============================================================================
// Helpers
// ============================================================================

const BLOG_COLUMNS: &str = r#"
    SELECT
        blog_id,
        title,
        content,
        highlight,
        thumbnail_url,
        thumbnail_public_id,
        author_id,
        category,
        slug,
        saves,
        views,
        created_at,
        updated_at
    FROM blogs
"#;

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505")
    )
}

fn assemble_detail(
    blog: BlogDetailRow,
    likes: Vec<LikerRow>,
    comment_rows: Vec<CommentDetailRow>,
    comment_likes: Vec<TargetLikerRow>,
    reply_rows: Vec<ReplyDetailRow>,
    reply_likes: Vec<TargetLikerRow>,
) -> BlogDetail {
    let mut likes_by_comment: HashMap<Uuid, Vec<UserSummary>> = HashMap::new();
    for row in comment_likes {
        likes_by_comment
            .entry(row.target_id)
            .or_default()
            .push(row.into_summary());
    }

    let mut likes_by_reply: HashMap<Uuid, Vec<UserSummary>> = HashMap::new();
    for row in reply_likes {
        likes_by_reply
            .entry(row.target_id)
            .or_default()
            .push(row.into_summary());
    }

    let mut replies_by_comment: HashMap<Uuid, Vec<ReplyDetail>> = HashMap::new();
    for row in reply_rows {
        let likes = likes_by_reply.remove(&row.reply_id).unwrap_or_default();
        replies_by_comment
            .entry(row.comment_id)
            .or_default()
            .push(row.into_detail(likes));
    }

    let comments = comment_rows
        .into_iter()
        .map(|row| {
            let likes = likes_by_comment.remove(&row.comment_id).unwrap_or_default();
            let replies = replies_by_comment.remove(&row.comment_id).unwrap_or_default();
            row.into_detail(likes, replies)
        })
        .collect();

    BlogDetail {
        blog_id: blog.blog_id,
        title: blog.title,
        content: blog.content,
        highlight: blog.highlight,
        thumbnail: ThumbnailView {
            url: blog.thumbnail_url,
            public_id: blog.thumbnail_public_id,
        },
        author: UserSummary {
            user_id: blog.author_id,
            name: blog.author_name,
            email: blog.author_email,
            picture_url: blog.author_picture_url,
        },
        category: blog.category,
        slug: blog.slug,
        likes: likes.into_iter().map(|r| r.into_summary()).collect(),
        saves: blog.saves,
        views: blog.views,
        comments,
        created_at: blog.created_at,
        updated_at: blog.updated_at,
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct BlogRow {
    blog_id: Uuid,
    title: String,
    content: String,
    highlight: String,
    thumbnail_url: String,
    thumbnail_public_id: String,
    author_id: Uuid,
    category: String,
    slug: String,
    saves: i64,
    views: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BlogRow {
    fn into_blog(self) -> Blog {
        Blog {
            blog_id: Id::from_uuid(self.blog_id),
            title: self.title,
            content: self.content,
            highlight: self.highlight,
            thumbnail: ImageRef {
                url: self.thumbnail_url,
                public_id: self.thumbnail_public_id,
            },
            author_id: Id::from_uuid(self.author_id),
            category: self.category,
            slug: Slug::from_db(self.slug),
            saves: self.saves,
            views: self.views,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BlogDetailRow {
    blog_id: Uuid,
    title: String,
    content: String,
    highlight: String,
    thumbnail_url: String,
    thumbnail_public_id: String,
    category: String,
    slug: String,
    saves: i64,
    views: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_id: Uuid,
    author_name: String,
    author_email: String,
    author_picture_url: String,
}

#[derive(sqlx::FromRow)]
struct LikerRow {
    user_id: Uuid,
    name: String,
    email: String,
    picture_url: String,
}

impl LikerRow {
    fn into_summary(self) -> UserSummary {
        UserSummary {
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            picture_url: self.picture_url,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TargetLikerRow {
    target_id: Uuid,
    user_id: Uuid,
    name: String,
    email: String,
    picture_url: String,
}

impl TargetLikerRow {
    fn into_summary(self) -> UserSummary {
        UserSummary {
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            picture_url: self.picture_url,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentDetailRow {
    comment_id: Uuid,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: Uuid,
    name: String,
    email: String,
    picture_url: String,
}

impl CommentDetailRow {
    fn into_detail(self, likes: Vec<UserSummary>, replies: Vec<ReplyDetail>) -> CommentDetail {
        CommentDetail {
            comment_id: self.comment_id,
            user: UserSummary {
                user_id: self.user_id,
                name: self.name,
                email: self.email,
                picture_url: self.picture_url,
            },
            text: self.text,
            likes,
            replies,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReplyDetailRow {
    reply_id: Uuid,
    comment_id: Uuid,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: Uuid,
    name: String,
    email: String,
    picture_url: String,
}

impl ReplyDetailRow {
    fn into_detail(self, likes: Vec<UserSummary>) -> ReplyDetail {
        ReplyDetail {
            reply_id: self.reply_id,
            user: UserSummary {
                user_id: self.user_id,
                name: self.name,
                email: self.email,
                picture_url: self.picture_url,
            },
            text: self.text,
            likes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BlogListRow {
    blog_id: Uuid,
    title: String,
    slug: String,
    highlight: String,
    author_name: String,
    thumbnail_url: String,
    likes_count: i64,
    comments_count: i64,
    views: i64,
    created_at: DateTime<Utc>,
}

impl BlogListRow {
    fn into_item(self) -> BlogListItem {
        BlogListItem {
            blog_id: self.blog_id,
            title: self.title,
            slug: self.slug,
            highlight: self.highlight,
            author_name: self.author_name,
            thumbnail_url: self.thumbnail_url,
            likes_count: self.likes_count,
            comments_count: self.comments_count,
            views: self.views,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BlogCardRow {
    blog_id: Uuid,
    title: String,
    slug: String,
    category: String,
    author_name: String,
    thumbnail_url: String,
    created_at: DateTime<Utc>,
}

impl BlogCardRow {
    fn into_card(self) -> BlogCard {
        BlogCard {
            blog_id: self.blog_id,
            title: self.title,
            slug: self.slug,
            category: self.category,
            author_name: self.author_name,
            thumbnail_url: self.thumbnail_url,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: Uuid,
    blog_id: Uuid,
    user_id: Uuid,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            comment_id: Id::from_uuid(self.comment_id),
            blog_id: Id::from_uuid(self.blog_id),
            user_id: Id::from_uuid(self.user_id),
            text: self.text,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReplyRow {
    reply_id: Uuid,
    comment_id: Uuid,
    user_id: Uuid,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ReplyRow {
    fn into_reply(self) -> Reply {
        Reply {
            reply_id: Id::from_uuid(self.reply_id),
            comment_id: Id::from_uuid(self.comment_id),
            user_id: Id::from_uuid(self.user_id),
            text: self.text,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BannerRow {
    banner_id: Uuid,
    image_url: String,
    image_public_id: String,
    title: String,
    link: String,
    created_at: DateTime<Utc>,
}

impl BannerRow {
    fn into_banner(self) -> Banner {
        Banner {
            banner_id: Id::from_uuid(self.banner_id),
            image: ImageRef {
                url: self.image_url,
                public_id: self.image_public_id,
            },
            title: self.title,
            link: self.link,
            created_at: self.created_at,
        }
    }

    fn into_view(self) -> BannerView {
        BannerView {
            banner_id: self.banner_id,
            image: ThumbnailView {
                url: self.image_url,
                public_id: self.image_public_id,
            },
            title: self.title,
            link: self.link,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SiteTotalsRow {
    total_blogs: i64,
    total_users: i64,
    total_views: i64,
    total_likes: i64,
    total_comments: i64,
    total_visits: i64,
}

#[derive(sqlx::FromRow)]
struct UserBriefRow {
    user_id: Uuid,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl UserBriefRow {
    fn into_brief(self) -> UserBrief {
        UserBrief {
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BlogBriefRow {
    blog_id: Uuid,
    title: String,
    category: String,
    author_name: String,
    created_at: DateTime<Utc>,
}

impl BlogBriefRow {
    fn into_brief(self) -> BlogBrief {
        BlogBrief {
            blog_id: self.blog_id,
            title: self.title,
            category: self.category,
            author_name: self.author_name,
            created_at: self.created_at,
        }
    }
}
