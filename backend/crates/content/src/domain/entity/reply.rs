//! Reply Entity

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, ReplyId, UserId};

/// Reply entity, one level below a comment. Never nested further.
#[derive(Debug, Clone)]
pub struct Reply {
    pub reply_id: ReplyId,
    pub comment_id: CommentId,
    pub user_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reply {
    pub fn new(comment_id: CommentId, user_id: UserId, text: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            reply_id: ReplyId::new(),
            comment_id,
            user_id,
            text: text.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the given user wrote this reply
    pub fn is_author(&self, user_id: &UserId) -> bool {
        self.user_id == *user_id
    }
}
