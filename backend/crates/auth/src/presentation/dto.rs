//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::user::User;
use kernel::id::BlogId;

// ============================================================================
// Login
// ============================================================================

/// Login request (identity-provider profile)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub picture: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserDto,
}

// ============================================================================
// Users
// ============================================================================

/// Serialized user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub picture: PictureDto,
    pub role: String,
    pub statistic: StatisticDto,
    /// Saved blog ids; omitted in listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_blogs: Option<Vec<Uuid>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureDto {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticDto {
    pub total_comments: i64,
    pub total_likes: i64,
}

impl UserDto {
    /// Full serialization including saved blog ids
    pub fn with_saved_blogs(user: User, saved: Vec<BlogId>) -> Self {
        let mut dto = Self::from(user);
        dto.saved_blogs = Some(saved.into_iter().map(|id| id.into_uuid()).collect());
        dto
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            user_id: *user.user_id.as_uuid(),
            name: user.name,
            email: user.email.as_str().to_string(),
            picture: PictureDto {
                url: user.picture.url,
                public_id: user.picture.public_id,
            },
            role: user.role.code().to_string(),
            statistic: StatisticDto {
                total_comments: user.statistic.total_comments,
                total_likes: user.statistic.total_likes,
            },
            saved_blogs: None,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Current user response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub success: bool,
    pub user: UserDto,
}

/// User listing response (admin)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub success: bool,
    pub data: Vec<UserDto>,
}

/// Profile update request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    /// Base64 data-URL of the new picture
    pub picture: Option<String>,
}

// ============================================================================
// Generic envelope
// ============================================================================

/// Plain `{success, message}` body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}
