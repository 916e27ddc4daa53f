//! Comment Entity

use chrono::{DateTime, Utc};
use kernel::id::{BlogId, CommentId, UserId};

/// Comment entity
///
/// Belongs to exactly one blog and one author. Likes live in the
/// `comment_likes` join table; replies reference the comment.
#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub blog_id: BlogId,
    pub user_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(blog_id: BlogId, user_id: UserId, text: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            comment_id: CommentId::new(),
            blog_id,
            user_id,
            text: text.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the given user wrote this comment
    pub fn is_author(&self, user_id: &UserId) -> bool {
        self.user_id == *user_id
    }
}
