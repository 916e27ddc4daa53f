//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; application-level errors use the
//! crate error types built on `kernel::error::AppError`.

use auth::{AuthConfig, AuthMiddlewareState, PgUserRepository, TokenService, users_router};
use axum::{
    Router, http,
    http::{Method, header},
    routing::get,
};
use content::PgContentRepository;
use platform::images::HttpImageStore;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,content=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration: distinct secrets for the two token kinds
    let production = env::var("APP_ENV")
        .map(|v| v == "production")
        .unwrap_or(false);

    let auth_config = if production {
        let access_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set in production");
        let refresh_secret = env::var("JWT_SECRET_REFRESH_TOKEN")
            .expect("JWT_SECRET_REFRESH_TOKEN must be set in production");
        Arc::new(AuthConfig::new(access_secret, refresh_secret, true))
    } else {
        Arc::new(AuthConfig::development())
    };

    let tokens = Arc::new(TokenService::new(auth_config.clone()));

    // External image store
    let image_store_url =
        env::var("IMAGE_STORE_URL").unwrap_or_else(|_| "http://localhost:9090".to_string());
    let image_store_key = env::var("IMAGE_STORE_API_KEY").unwrap_or_default();
    let images = HttpImageStore::new(image_store_url, image_store_key);

    // Repositories
    let users = PgUserRepository::new(pool.clone());
    let contents = PgContentRepository::new(pool.clone());

    let auth_state = AuthMiddlewareState {
        repo: Arc::new(users.clone()),
        tokens: tokens.clone(),
        config: auth_config.clone(),
    };

    // CORS configuration
    let client_origins =
        env::var("CLIENT_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = client_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let users_routes = users_router(
        users.clone(),
        images.clone(),
        tokens.clone(),
        auth_config.clone(),
    )
    .merge(content::saves_router(
        contents.clone(),
        images.clone(),
        auth_state.clone(),
    ));

    let app = Router::new()
        .route("/test", get(|| async { "Hello from the server!" }))
        .nest("/api/v1/users", users_routes)
        .nest(
            "/api/v1/blogs",
            content::blogs_router(contents.clone(), images.clone(), auth_state.clone()),
        )
        .nest(
            "/api/v1/comments",
            content::comments_router(contents.clone(), images.clone(), auth_state.clone()),
        )
        .nest(
            "/api/v1/replies",
            content::replies_router(contents.clone(), images.clone(), auth_state.clone()),
        )
        .nest(
            "/api/v1/statistics",
            content::statistics_router(contents.clone(), images.clone(), auth_state.clone()),
        )
        .nest(
            "/api/v1/banners",
            content::banners_router(contents, images, auth_state),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
