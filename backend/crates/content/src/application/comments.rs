//! Comment Use Cases
//!
//! Adding, deleting, and like-toggling comments. Mutations respond with
//! the re-populated blog document so the client can swap it in wholesale.

use std::sync::Arc;

use kernel::id::{BlogId, CommentId, UserId};

use crate::domain::entity::comment::Comment;
use crate::domain::read_model::BlogDetail;
use crate::domain::repository::{BlogRepository, CommentRepository};
use crate::error::{ContentError, ContentResult};

/// Comment use case
pub struct CommentUseCase<B, C>
where
    B: BlogRepository,
    C: CommentRepository,
{
    blogs: Arc<B>,
    comments: Arc<C>,
}

impl<B, C> CommentUseCase<B, C>
where
    B: BlogRepository,
    C: CommentRepository,
{
    pub fn new(blogs: Arc<B>, comments: Arc<C>) -> Self {
        Self { blogs, comments }
    }

    /// Add a comment; the author's `totalComments` moves in the same
    /// transaction as the insert.
    pub async fn add(
        &self,
        blog_id: &BlogId,
        user_id: &UserId,
        text: &str,
    ) -> ContentResult<BlogDetail> {
        let blog = self
            .blogs
            .find_by_id(blog_id)
            .await?
            .ok_or(ContentError::BlogNotFound)?;

        if text.trim().is_empty() {
            return Err(ContentError::Validation("Text is required".to_string()));
        }

        let comment = Comment::new(*blog_id, *user_id, text);
        self.comments.create(&comment).await?;

        tracing::info!(
            comment_id = %comment.comment_id,
            blog_id = %blog_id,
            "Comment created"
        );

        self.populated(&blog).await
    }

    /// Delete a comment and cascade its replies. Author-only.
    pub async fn delete(
        &self,
        blog_id: &BlogId,
        comment_id: &CommentId,
        user_id: &UserId,
    ) -> ContentResult<BlogDetail> {
        let blog = self
            .blogs
            .find_by_id(blog_id)
            .await?
            .ok_or(ContentError::BlogNotFound)?;

        let comment = self.owned_comment(blog_id, comment_id).await?;

        if !comment.is_author(user_id) {
            return Err(ContentError::NotAuthor("comment"));
        }

        self.comments.delete_cascade(&comment).await?;

        tracing::info!(
            comment_id = %comment_id,
            blog_id = %blog_id,
            "Comment deleted"
        );

        self.populated(&blog).await
    }

    /// Like toggle
    pub async fn like(
        &self,
        blog_id: &BlogId,
        comment_id: &CommentId,
        user_id: &UserId,
    ) -> ContentResult<BlogDetail> {
        let blog = self
            .blogs
            .find_by_id(blog_id)
            .await?
            .ok_or(ContentError::BlogNotFound)?;

        let comment = self.owned_comment(blog_id, comment_id).await?;

        self.comments.like(&comment.comment_id, user_id).await?;

        self.populated(&blog).await
    }

    /// Unlike toggle
    pub async fn unlike(
        &self,
        blog_id: &BlogId,
        comment_id: &CommentId,
        user_id: &UserId,
    ) -> ContentResult<BlogDetail> {
        let blog = self
            .blogs
            .find_by_id(blog_id)
            .await?
            .ok_or(ContentError::BlogNotFound)?;

        let comment = self.owned_comment(blog_id, comment_id).await?;

        self.comments.unlike(&comment.comment_id, user_id).await?;

        self.populated(&blog).await
    }

    /// Load a comment and check it belongs to the blog in the path
    async fn owned_comment(
        &self,
        blog_id: &BlogId,
        comment_id: &CommentId,
    ) -> ContentResult<Comment> {
        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or(ContentError::CommentNotFound)?;

        if comment.blog_id != *blog_id {
            return Err(ContentError::CommentNotFound);
        }

        Ok(comment)
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
