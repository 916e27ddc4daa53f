//! Token Service
//!
//! Issues and verifies the JWT access/refresh token pair. Pure with
//! respect to the configured secrets; no storage involved.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// JWT claims carried by both token kinds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiration time (unix seconds)
    pub exp: i64,
}

/// Access/refresh token issuer and verifier
pub struct TokenService {
    config: Arc<AuthConfig>,
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        let access_encoding = EncodingKey::from_secret(config.access_secret.as_bytes());
        let access_decoding = DecodingKey::from_secret(config.access_secret.as_bytes());
        let refresh_encoding = EncodingKey::from_secret(config.refresh_secret.as_bytes());
        let refresh_decoding = DecodingKey::from_secret(config.refresh_secret.as_bytes());

        Self {
            config,
            access_encoding,
            access_decoding,
            refresh_encoding,
            refresh_decoding,
        }
    }

    /// Issue a short-lived access token (5 minutes)
    pub fn issue_access_token(&self, user_id: &UserId) -> AuthResult<String> {
        self.issue(user_id, self.config.access_ttl, &self.access_encoding)
    }

    /// Issue a long-lived refresh token (30 days), signed with the
    /// distinct refresh secret
    pub fn issue_refresh_token(&self, user_id: &UserId) -> AuthResult<String> {
        self.issue(user_id, self.config.refresh_ttl, &self.refresh_encoding)
    }

    /// Verify an access token and return its subject
    pub fn verify_access(&self, token: &str) -> AuthResult<UserId> {
        Self::verify(token, &self.access_decoding)
    }

    /// Verify a refresh token and return its subject
    pub fn verify_refresh(&self, token: &str) -> AuthResult<UserId> {
        Self::verify(token, &self.refresh_decoding)
    }

    fn issue(
        &self,
        user_id: &UserId,
        ttl: std::time::Duration,
        key: &EncodingKey,
    ) -> AuthResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + ttl.as_secs() as i64,
        };

        encode(&Header::default(), &claims, key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign token: {e}")))
    }

    fn verify(token: &str, key: &DecodingKey) -> AuthResult<UserId> {
        // Expiry is exact; the default 60s leeway would keep a 5-minute
        // access token alive well past its TTL.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, key, &validation).map_err(|_| AuthError::InvalidToken)?;

        data.claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    fn service() -> TokenService {
        TokenService::new(Arc::new(AuthConfig::development()))
    }

    #[test]
    fn test_access_token_round_trip() {
        let service = service();
        let user_id: UserId = Id::new();

        let token = service.issue_access_token(&user_id).unwrap();
        assert_eq!(service.verify_access(&token).unwrap(), user_id);
    }

    #[test]
    fn test_refresh_token_round_trip() {
        let service = service();
        let user_id: UserId = Id::new();

        let token = service.issue_refresh_token(&user_id).unwrap();
        assert_eq!(service.verify_refresh(&token).unwrap(), user_id);
    }

    #[test]
    fn test_token_kinds_are_not_interchangeable() {
        let service = service();
        let user_id: UserId = Id::new();

        let access = service.issue_access_token(&user_id).unwrap();
        let refresh = service.issue_refresh_token(&user_id).unwrap();

        assert!(matches!(
            service.verify_refresh(&access),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(
            service.verify_access(&refresh),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let user_id: UserId = Id::new();
        let token = service().issue_access_token(&user_id).unwrap();

        let other = TokenService::new(Arc::new(AuthConfig::new(
            "other-access-secret".to_string(),
            "other-refresh-secret".to_string(),
            false,
        )));

        assert!(matches!(
            other.verify_access(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = service();
        let user_id: UserId = Id::new();

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now - 600,
            exp: now - 300,
        };
        let expired = encode(&Header::default(), &claims, &service.access_encoding).unwrap();

        assert!(matches!(
            service.verify_access(&expired),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(matches!(
            service().verify_access("not.a.jwt"),
            Err(AuthError::InvalidToken)
        ));
    }
}
