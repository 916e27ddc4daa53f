//! Reply Use Cases
//!
//! One level below comments: add, delete, and like-toggle replies.
//! Reply deletion adjusts no user statistic counter.

use std::sync::Arc;

use kernel::id::{BlogId, CommentId, ReplyId, UserId};

use crate::domain::entity::reply::Reply;
use crate::domain::read_model::BlogDetail;
use crate::domain::repository::{BlogRepository, CommentRepository, ReplyRepository};
use crate::error::{ContentError, ContentResult};

/// Reply use case
pub struct ReplyUseCase<B, C, P>
where
    B: BlogRepository,
    C: CommentRepository,
    P: ReplyRepository,
{
    blogs: Arc<B>,
    comments: Arc<C>,
    replies: Arc<P>,
}

impl<B, C, P> ReplyUseCase<B, C, P>
where
    B: BlogRepository,
    C: CommentRepository,
    P: ReplyRepository,
{
    pub fn new(blogs: Arc<B>, comments: Arc<C>, replies: Arc<P>) -> Self {
        Self {
            blogs,
            comments,
            replies,
        }
    }

    /// Add a reply under a comment
    pub async fn add(
        &self,
        blog_id: &BlogId,
        comment_id: &CommentId,
        user_id: &UserId,
        text: &str,
    ) -> ContentResult<BlogDetail> {
        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or(ContentError::CommentNotFound)?;

        let blog = self
            .blogs
            .find_by_id(blog_id)
            .await?
            .ok_or(ContentError::BlogNotFound)?;

        if comment.blog_id != *blog_id {
            return Err(ContentError::CommentNotFound);
        }

        if text.trim().is_empty() {
            return Err(ContentError::Validation("Text is required".to_string()));
        }

        let reply = Reply::new(*comment_id, *user_id, text);
        self.replies.create(&reply).await?;

        tracing::info!(
            reply_id = %reply.reply_id,
            comment_id = %comment_id,
            "Reply created"
        );

        self.populated(&blog).await
    }

    /// Delete a reply. Author-only.
    pub async fn delete(
        &self,
        blog_id: &BlogId,
        comment_id: &CommentId,
        reply_id: &ReplyId,
        user_id: &UserId,
    ) -> ContentResult<BlogDetail> {
        let reply = self
            .replies
            .find_by_id(reply_id)
            .await?
            .ok_or(ContentError::ReplyNotFound)?;

        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or(ContentError::CommentNotFound)?;

        let blog = self
            .blogs
            .find_by_id(blog_id)
            .await?
            .ok_or(ContentError::BlogNotFound)?;

        if reply.comment_id != comment.comment_id || comment.blog_id != *blog_id {
            return Err(ContentError::ReplyNotFound);
        }

        if !reply.is_author(user_id) {
            return Err(ContentError::NotAuthor("reply"));
        }

        self.replies.delete(reply_id).await?;

        tracing::info!(reply_id = %reply_id, comment_id = %comment_id, "Reply deleted");

        self.populated(&blog).await
    }

    /// Like toggle
    pub async fn like(
        &self,
        blog_id: &BlogId,
        reply_id: &ReplyId,
        user_id: &UserId,
    ) -> ContentResult<BlogDetail> {
        let (blog, reply) = self.lookup(blog_id, reply_id).await?;

        self.replies.like(&reply.reply_id, user_id).await?;

        self.populated(&blog).await
    }

    /// Unlike toggle
    pub async fn unlike(
        &self,
        blog_id: &BlogId,
        reply_id: &ReplyId,
        user_id: &UserId,
    ) -> ContentResult<BlogDetail> {
        let (blog, reply) = self.lookup(blog_id, reply_id).await?;

        self.replies.unlike(&reply.reply_id, user_id).await?;

        self.populated(&blog).await
    }

    async fn lookup(
        &self,
        blog_id: &BlogId,
        reply_id: &ReplyId,
    ) -> ContentResult<(crate::domain::entity::blog::Blog, Reply)> {
        let reply = self
            .replies
            .find_by_id(reply_id)
            .await?
            .ok_or(ContentError::ReplyNotFound)?;

        let blog = self
            .blogs
            .find_by_id(blog_id)
            .await?
            .ok_or(ContentError::BlogNotFound)?;

        Ok((blog, reply))
    }

    async fn populated(
        &self,
        blog: &crate::domain::entity::blog::Blog,
    ) -> ContentResult<BlogDetail> {
        self.blogs
            .load_detail(blog.slug.as_str())
            .await?
            .ok_or(ContentError::BlogNotFound)
    }
}
