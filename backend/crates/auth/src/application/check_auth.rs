//! Check Auth Use Case
//!
//! Resolves a request's identity from its access/refresh cookies.
//! This is the middleware's state machine, kept free of HTTP types.

use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// The resolved identity, plus the freshly minted access token when the
/// refresh path ran
pub struct ResolvedIdentity {
    pub user: User,
    pub new_access_token: Option<String>,
}

/// Check auth use case
pub struct CheckAuthUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> CheckAuthUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    /// Resolve the caller from whichever tokens the request carried.
    ///
    /// A present-but-invalid access token is rejected outright; the
    /// refresh token only comes into play when the access token is
    /// absent altogether.
    pub async fn resolve(
        &self,
        access_token: Option<&str>,
        refresh_token: Option<&str>,
    ) -> AuthResult<ResolvedIdentity> {
        match (access_token, refresh_token) {
            (None, None) => Err(AuthError::NotLoggedIn),
            (Some(access), _) => {
                let user_id = self.tokens.verify_access(access)?;
                let user = self
                    .repo
                    .find_by_id(&user_id)
                    .await?
                    .ok_or(AuthError::UserNotFound)?;

                Ok(ResolvedIdentity {
                    user,
                    new_access_token: None,
                })
            }
            (None, Some(refresh)) => {
                let user_id = self.tokens.verify_refresh(refresh)?;
                let user = self
                    .repo
                    .find_by_id(&user_id)
                    .await?
                    .ok_or(AuthError::UserNotFound)?;

                let new_access_token = self.tokens.issue_access_token(&user.user_id)?;

                tracing::debug!(user_id = %user.user_id, "Access token refreshed");

                Ok(ResolvedIdentity {
                    user,
                    new_access_token: Some(new_access_token),
                })
            }
        }
    }
}
