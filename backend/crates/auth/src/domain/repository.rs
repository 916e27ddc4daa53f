//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{BlogId, UserId};

use crate::domain::entity::user::User;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// Update user
    async fn update(&self, user: &User) -> AuthResult<()>;

    /// List all users, newest first
    async fn list(&self) -> AuthResult<Vec<User>>;

    /// Blog ids the user has saved, newest save first
    async fn saved_blog_ids(&self, user_id: &UserId) -> AuthResult<Vec<BlogId>>;
}
