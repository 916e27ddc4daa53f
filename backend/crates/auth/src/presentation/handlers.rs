//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::{StatusCode, header};
use axum::response::{AppendHeaders, IntoResponse};
use std::sync::Arc;

use platform::cookie;
use platform::images::ImageStore;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{
    LoginInput, LoginUseCase, UpdateProfileInput, UpdateProfileUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    CurrentUserResponse, LoginRequest, LoginResponse, MessageResponse, UpdateProfileRequest,
    UserDto, UsersResponse,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for user handlers
#[derive(Clone)]
pub struct AuthAppState<R, S>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub images: Arc<S>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login / Logout
// ============================================================================

/// POST /api/v1/users/login
pub async fn login<R, S>(
    State(state): State<AuthAppState<R, S>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case
        .execute(LoginInput {
            name: req.name,
            email: req.email,
            picture: req.picture,
        })
        .await?;

    let saved = state.repo.saved_blog_ids(&output.user.user_id).await?;

    let cookies = AppendHeaders([
        (
            header::SET_COOKIE,
            cookie::set_cookie_header(&state.config.access_cookie(), &output.access_token),
        ),
        (
            header::SET_COOKIE,
            cookie::set_cookie_header(&state.config.refresh_cookie(), &output.refresh_token),
        ),
    ]);

    Ok((
        StatusCode::OK,
        cookies,
        Json(LoginResponse {
            success: true,
            message: "Login successfully".to_string(),
            user: UserDto::with_saved_blogs(output.user, saved),
        }),
    ))
}

/// POST /api/v1/users/logout
pub async fn logout<R, S>(
    State(state): State<AuthAppState<R, S>>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let cookies = AppendHeaders([
        (
            header::SET_COOKIE,
            cookie::delete_cookie_header(&state.config.access_cookie()),
        ),
        (
            header::SET_COOKIE,
            cookie::delete_cookie_header(&state.config.refresh_cookie()),
        ),
    ]);

    Ok((
        StatusCode::OK,
        cookies,
        Json(MessageResponse {
            success: true,
            message: "Logout successfully".to_string(),
        }),
    ))
}

// ============================================================================
// Current User / Profile
// ============================================================================

/// GET /api/v1/users/user
pub async fn current_user<R, S>(
    State(state): State<AuthAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
) -> AuthResult<Json<CurrentUserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let saved = state.repo.saved_blog_ids(&current.0.user_id).await?;

    Ok(Json(CurrentUserResponse {
        success: true,
        user: UserDto::with_saved_blogs(current.0, saved),
    }))
}

/// PUT /api/v1/users
pub async fn update_profile<R, S>(
    State(state): State<AuthAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<UpdateProfileRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProfileUseCase::new(state.repo.clone(), state.images.clone());

    let user = use_case
        .execute(
            current.0,
            UpdateProfileInput {
                name: req.name,
                picture: req.picture,
            },
        )
        .await?;

    let saved = state.repo.saved_blog_ids(&user.user_id).await?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Profile updated successfully".to_string(),
        user: UserDto::with_saved_blogs(user, saved),
    }))
}

// ============================================================================
// Admin
// ============================================================================

/// GET /api/v1/users
pub async fn list_users<R, S>(
    State(state): State<AuthAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
) -> AuthResult<Json<UsersResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    if !current.0.is_admin() {
        return Err(AuthError::InsufficientRole);
    }

    let users = state.repo.list().await?;

    Ok(Json(UsersResponse {
        success: true,
        data: users.into_iter().map(UserDto::from).collect(),
    }))
}
