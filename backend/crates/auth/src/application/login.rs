//! Login Use Case
//!
//! Upserts a user by email from an identity-provider profile and issues
//! the access/refresh token pair.

use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input (identity-provider profile)
pub struct LoginInput {
    pub name: String,
    pub email: String,
    pub picture: String,
}

/// Login output
pub struct LoginOutput {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
    /// True when this login created the account
    pub created: bool,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        if input.email.is_empty() || input.name.is_empty() || input.picture.is_empty() {
            return Err(AuthError::MissingLoginField);
        }

        let email = Email::new(&input.email)?;

        let (user, created) = match self.repo.find_by_email(email.as_str()).await? {
            Some(mut user) => {
                // Keep the provider avatar current for accounts that never
                // uploaded their own picture.
                if user.refresh_provider_picture(&input.picture) {
                    self.repo.update(&user).await?;
                }
                (user, false)
            }
            None => {
                let user = User::new(&input.name, email, &input.picture);
                self.repo.create(&user).await?;
                (user, true)
            }
        };

        let access_token = self.tokens.issue_access_token(&user.user_id)?;
        let refresh_token = self.tokens.issue_refresh_token(&user.user_id)?;

        tracing::info!(
            user_id = %user.user_id,
            created,
            "User logged in"
        );

        Ok(LoginOutput {
            user,
            access_token,
            refresh_token,
            created,
        })
    }
}
