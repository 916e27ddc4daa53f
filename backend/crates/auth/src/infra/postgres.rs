//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{BlogId, Id, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::{User, UserStatistic};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, picture::Picture, user_role::UserRole};
use crate::error::AuthResult;

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                name,
                email,
                picture_url,
                picture_public_id,
                role,
                total_comments,
                total_likes,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(&user.picture.url)
        .bind(user.picture.public_id.as_deref())
        .bind(user.role.code())
        .bind(user.statistic.total_comments)
        .bind(user.statistic.total_likes)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                email,
                picture_url,
                picture_public_id,
                role,
                total_comments,
                total_likes,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                email,
                picture_url,
                picture_public_id,
                role,
                total_comments,
                total_likes,
                created_at,
                updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                name = $2,
                picture_url = $3,
                picture_public_id = $4,
                role = $5,
                updated_at = $6
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.name)
        .bind(&user.picture.url)
        .bind(user.picture.public_id.as_deref())
        .bind(user.role.code())
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> AuthResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                email,
                picture_url,
                picture_public_id,
                role,
                total_comments,
                total_likes,
                created_at,
                updated_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_user()).collect())
    }

    async fn saved_blog_ids(&self, user_id: &UserId) -> AuthResult<Vec<BlogId>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT blog_id
            FROM saved_blogs
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(ids.into_iter().map(Id::from_uuid).collect())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    name: String,
    email: String,
    picture_url: String,
    picture_public_id: Option<String>,
    role: String,
    total_comments: i64,
    total_likes: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: Id::from_uuid(self.user_id),
            name: self.name,
            email: Email::from_db(self.email),
            picture: Picture {
                url: self.picture_url,
                public_id: self.picture_public_id,
            },
            role: UserRole::from_code(&self.role).unwrap_or_default(),
            statistic: UserStatistic {
                total_comments: self.total_comments,
                total_likes: self.total_likes,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
