//! Auth Middleware
//!
//! Per-request gate: validates the access token, transparently mints a
//! new one from the refresh token when only that is present, and attaches
//! the resolved identity to the request extensions.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::cookie;

use crate::application::check_auth::CheckAuthUseCase;
use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

/// The authenticated caller, stored in request extensions
#[derive(Clone)]
pub struct CurrentUser(pub User);

/// Middleware that requires a resolvable identity.
///
/// An invalid access token is rejected even when a refresh token is
/// present; the refresh path only runs when the access cookie is absent.
/// A successful refresh re-issues the access-token cookie on the
/// response; this is the one place state changes without an explicit
/// user action.
pub async fn check_auth_and_refresh<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let headers = req.headers();

    let access = cookie::extract_cookie(headers, &state.config.access_cookie_name);
    let refresh = cookie::extract_cookie(headers, &state.config.refresh_cookie_name);

    let use_case = CheckAuthUseCase::new(state.repo.clone(), state.tokens.clone());

    let identity = match use_case.resolve(access.as_deref(), refresh.as_deref()).await {
        Ok(identity) => identity,
        Err(e) => return Err(e.into_response()),
    };

    let new_access_token = identity.new_access_token;
    req.extensions_mut().insert(CurrentUser(identity.user));

    let mut response = next.run(req).await;

    if let Some(token) = new_access_token {
        response.headers_mut().append(
            header::SET_COOKIE,
            cookie::set_cookie_header(&state.config.access_cookie(), &token),
        );
    }

    Ok(response)
}

/// Middleware that rejects non-admin callers.
///
/// Must be layered inside `check_auth_and_refresh` so the identity is
/// already attached.
pub async fn require_admin(req: Request<Body>, next: Next) -> Result<Response, Response> {
    match req.extensions().get::<CurrentUser>() {
        Some(current) if current.0.is_admin() => Ok(next.run(req).await),
        _ => Err(AuthError::InsufficientRole.into_response()),
    }
}
