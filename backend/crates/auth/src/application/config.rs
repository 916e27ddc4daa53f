//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Signing secret for access tokens
    pub access_secret: String,
    /// Signing secret for refresh tokens (distinct from access)
    pub refresh_secret: String,
    /// Access token TTL (5 minutes)
    pub access_ttl: Duration,
    /// Refresh token TTL (30 days)
    pub refresh_ttl: Duration,
    /// Access token cookie name
    pub access_cookie_name: String,
    /// Refresh token cookie name
    pub refresh_cookie_name: String,
    /// Production toggles Secure + SameSite=None cookies
    pub production: bool,
}

impl AuthConfig {
    pub fn new(access_secret: String, refresh_secret: String, production: bool) -> Self {
        Self {
            access_secret,
            refresh_secret,
            access_ttl: Duration::from_secs(5 * 60),
            refresh_ttl: Duration::from_secs(30 * 24 * 3600),
            access_cookie_name: "token".to_string(),
            refresh_cookie_name: "refreshToken".to_string(),
            production,
        }
    }

    /// Config for development and tests (fixed secrets, insecure cookies)
    pub fn development() -> Self {
        Self::new(
            "dev-access-secret".to_string(),
            "dev-refresh-secret".to_string(),
            false,
        )
    }

    /// Cookie settings for the access token
    pub fn access_cookie(&self) -> CookieConfig {
        self.cookie(&self.access_cookie_name, self.access_ttl)
    }

    /// Cookie settings for the refresh token
    pub fn refresh_cookie(&self) -> CookieConfig {
        self.cookie(&self.refresh_cookie_name, self.refresh_ttl)
    }

    fn cookie(&self, name: &str, ttl: Duration) -> CookieConfig {
        if self.production {
            CookieConfig::production(name, ttl.as_secs() as i64)
        } else {
            CookieConfig::development(name, ttl.as_secs() as i64)
        }
    }
}
