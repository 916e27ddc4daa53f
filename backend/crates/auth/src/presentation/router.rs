//! Users Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use platform::images::{HttpImageStore, ImageStore};

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, check_auth_and_refresh};

/// Create the users router with the PostgreSQL repository
pub fn users_router(
    repo: PgUserRepository,
    images: HttpImageStore,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
) -> Router {
    users_router_generic(repo, images, tokens, config)
}

/// Create a generic users router for any repository implementation
pub fn users_router_generic<R, S>(
    repo: R,
    images: S,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let repo = Arc::new(repo);

    let state = AuthAppState {
        repo: repo.clone(),
        images: Arc::new(images),
        tokens: tokens.clone(),
        config: config.clone(),
    };

    let auth_state = AuthMiddlewareState {
        repo,
        tokens,
        config,
    };

    let public = Router::new()
        .route("/login", post(handlers::login::<R, S>))
        .route("/logout", post(handlers::logout::<R, S>));

    // `/` carries both the admin listing (GET, checked in the handler)
    // and the profile update (PUT).
    let protected = Router::new()
        .route("/user", get(handlers::current_user::<R, S>))
        .route(
            "/",
            get(handlers::list_users::<R, S>).put(handlers::update_profile::<R, S>),
        )
        .route_layer(from_fn_with_state(auth_state, check_auth_and_refresh::<R>));

    public.merge(protected).with_state(state)
}
