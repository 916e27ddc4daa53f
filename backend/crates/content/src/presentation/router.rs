//! Content Routers
//!
//! One router per resource, mounted by the API binary under `/api/v1`.
//! Protected methods carry the auth middleware at method-router level so
//! public reads on the same path stay open.

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{delete, get, post},
};
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::presentation::middleware::{
    AuthMiddlewareState, check_auth_and_refresh, require_admin,
};
use platform::images::ImageStore;

use crate::domain::repository::ContentRepository;
use crate::presentation::handlers::{self, ContentAppState};

/// GET|POST /blogs, GET /blogs/{slug}, listings, like toggles
pub fn blogs_router<R, S, U>(repo: R, images: S, auth: AuthMiddlewareState<U>) -> Router
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState {
        repo: Arc::new(repo),
        images: Arc::new(images),
    };

    Router::new()
        .route(
            "/",
            post(handlers::create_blog::<R, S>)
                .route_layer(from_fn_with_state(
                    auth.clone(),
                    check_auth_and_refresh::<U>,
                ))
                .get(handlers::list_blogs::<R, S>),
        )
        .route("/random", get(handlers::random_blogs::<R, S>))
        .route(
            "/latest-and-popular",
            get(handlers::latest_and_popular_blogs::<R, S>),
        )
        .route(
            "/like/{slug}",
            get(handlers::like_blog::<R, S>).route_layer(from_fn_with_state(
                auth.clone(),
                check_auth_and_refresh::<U>,
            )),
        )
        .route(
            "/unlike/{slug}",
            get(handlers::unlike_blog::<R, S>).route_layer(from_fn_with_state(
                auth.clone(),
                check_auth_and_refresh::<U>,
            )),
        )
        .route(
            "/{slug}",
            axum::routing::put(handlers::update_blog::<R, S>)
                .route_layer(from_fn_with_state(auth, check_auth_and_refresh::<U>))
                .get(handlers::get_blog::<R, S>),
        )
        .with_state(state)
}

/// Save/unsave toggles, merged into the `/users` router by the binary
pub fn saves_router<R, S, U>(repo: R, images: S, auth: AuthMiddlewareState<U>) -> Router
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState {
        repo: Arc::new(repo),
        images: Arc::new(images),
    };

    Router::new()
        .route("/save/{blog_id}", get(handlers::save_blog::<R, S>))
        .route("/unsave/{blog_id}", get(handlers::unsave_blog::<R, S>))
        .route_layer(from_fn_with_state(auth, check_auth_and_refresh::<U>))
        .with_state(state)
}

/// Comment routes; everything requires auth
pub fn comments_router<R, S, U>(repo: R, images: S, auth: AuthMiddlewareState<U>) -> Router
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState {
        repo: Arc::new(repo),
        images: Arc::new(images),
    };

    Router::new()
        .route("/{blog_id}", post(handlers::add_comment::<R, S>))
        .route(
            "/like/{blog_id}/{comment_id}",
            get(handlers::like_comment::<R, S>),
        )
        .route(
            "/unlike/{blog_id}/{comment_id}",
            get(handlers::unlike_comment::<R, S>),
        )
        .route(
            "/{blog_id}/{comment_id}",
            delete(handlers::delete_comment::<R, S>),
        )
        .route_layer(from_fn_with_state(auth, check_auth_and_refresh::<U>))
        .with_state(state)
}

/// Reply routes; everything requires auth
pub fn replies_router<R, S, U>(repo: R, images: S, auth: AuthMiddlewareState<U>) -> Router
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState {
        repo: Arc::new(repo),
        images: Arc::new(images),
    };

    Router::new()
        .route(
            "/{blog_id}/{comment_id}",
            post(handlers::add_reply::<R, S>),
        )
        .route(
            "/like/{blog_id}/{reply_id}",
            get(handlers::like_reply::<R, S>),
        )
        .route(
            "/unlike/{blog_id}/{reply_id}",
            get(handlers::unlike_reply::<R, S>),
        )
        .route(
            "/{blog_id}/{comment_id}/{reply_id}",
            delete(handlers::delete_reply::<R, S>),
        )
        .route_layer(from_fn_with_state(auth, check_auth_and_refresh::<U>))
        .with_state(state)
}

/// Banner routes; mutations are admin-only, reads are public
pub fn banners_router<R, S, U>(repo: R, images: S, auth: AuthMiddlewareState<U>) -> Router
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState {
        repo: Arc::new(repo),
        images: Arc::new(images),
    };

    // route_layer order: admin first so the auth layer wraps it and runs
    // before it.
    Router::new()
        .route(
            "/",
            post(handlers::create_banner::<R, S>)
                .route_layer(from_fn(require_admin))
                .route_layer(from_fn_with_state(
                    auth.clone(),
                    check_auth_and_refresh::<U>,
                ))
                .get(handlers::list_banners::<R, S>),
        )
        .route("/random", get(handlers::random_banners::<R, S>))
        .route(
            "/{banner_id}",
            delete(handlers::delete_banner::<R, S>)
                .route_layer(from_fn(require_admin))
                .route_layer(from_fn_with_state(auth, check_auth_and_refresh::<U>)),
        )
        .with_state(state)
}

/// Statistics routes; the visit counter is public, the dashboard is
/// admin-only
pub fn statistics_router<R, S, U>(repo: R, images: S, auth: AuthMiddlewareState<U>) -> Router
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState {
        repo: Arc::new(repo),
        images: Arc::new(images),
    };

    Router::new()
        .route("/add-visit", get(handlers::add_visit::<R, S>))
        .route(
            "/",
            get(handlers::statistics_overview::<R, S>)
                .route_layer(from_fn(require_admin))
                .route_layer(from_fn_with_state(
                    auth.clone(),
                    check_auth_and_refresh::<U>,
                )),
        )
        .route(
            "/latest-users-and-blogs",
            get(handlers::latest_users_and_blogs::<R, S>)
                .route_layer(from_fn(require_admin))
                .route_layer(from_fn_with_state(auth, check_auth_and_refresh::<U>)),
        )
        .with_state(state)
}
