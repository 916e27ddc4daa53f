//! User Entity
//!
//! Account record created on first login and updated in place afterwards.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, picture::Picture, user_role::UserRole};

/// Denormalized per-user engagement counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStatistic {
    pub total_comments: i64,
    pub total_likes: i64,
}

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Display name from the identity provider
    pub name: String,
    /// Unique login identity
    pub email: Email,
    /// Avatar (provider URL or store-managed upload)
    pub picture: Picture,
    /// Role (User, Admin)
    pub role: UserRole,
    /// Engagement counters, maintained by content operations
    pub statistic: UserStatistic,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from a first login
    pub fn new(name: impl Into<String>, email: Email, picture_url: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name: name.into(),
            email,
            picture: Picture::external(picture_url),
            role: UserRole::default(),
            statistic: UserStatistic::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Adopt the provider's current avatar URL, unless the user has
    /// uploaded a custom picture of their own.
    pub fn refresh_provider_picture(&mut self, url: impl Into<String>) -> bool {
        if self.picture.is_store_managed() {
            return false;
        }
        self.picture = Picture::external(url);
        self.updated_at = Utc::now();
        true
    }

    /// Update display name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Replace the picture with a store-managed upload
    pub fn set_picture(&mut self, picture: Picture) {
        self.picture = picture;
        self.updated_at = Utc::now();
    }

    /// Check admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
