use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SecurityConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT generation error: {0}")]
    Signing(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

/// Issues and verifies HS256 bearer tokens, and checks admin credentials.
///
/// Tokens are stateless: nothing is stored, and a token stays valid until
/// its `exp` passes.
#[derive(Clone)]
pub struct AuthService {
    secret: String,
    admin_username: String,
    admin_password: String,
    token_ttl_hours: u64,
}

impl AuthService {
    pub fn new(config: &SecurityConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            admin_username: config.admin_username.clone(),
            admin_password: config.admin_password.clone(),
            token_ttl_hours: config.jwt_expiry_hours,
        }
    }

    /// Plain equality against the configured admin pair.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        username == self.admin_username && password == self.admin_password
    }

    pub fn issue_token(&self, username: &str) -> Result<String, AuthError> {
        self.issue_token_at(username, Utc::now())
    }

    /// Issue a token as if it had been signed at `issued_at`.
    pub fn issue_token_at(
        &self,
        username: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        if self.secret.is_empty() {
            return Err(AuthError::Signing("signing secret is empty".to_string()));
        }

        let expires_at = i64::try_from(self.token_ttl_hours)
            .ok()
            .and_then(Duration::try_hours)
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .ok_or_else(|| {
                AuthError::Signing(format!("token lifetime of {}h is out of range", self.token_ttl_hours))
            })?;

        let claims = Claims {
            username: username.to_string(),
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Check signature and expiry, returning the embedded claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> AuthService {
        service_with_expiry(secret, 24)
    }

    fn service_with_expiry(secret: &str, hours: u64) -> AuthService {
        AuthService::new(&SecurityConfig {
            admin_username: "admin".into(),
            admin_password: "hunter2".into(),
            jwt_secret: secret.into(),
            jwt_expiry_hours: hours,
        })
    }

    #[test]
    fn issued_token_verifies() {
        let auth = service("signing-key");
        let token = auth.issue_token("admin").unwrap();
        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn expired_token_is_rejected() {
        let auth = service("signing-key");
        let issued_at = Utc::now() - Duration::hours(24) - Duration::seconds(5);
        let token = auth.issue_token_at("admin", issued_at).unwrap();
        assert!(matches!(auth.verify_token(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let token = service("other-key").issue_token("admin").unwrap();
        assert!(matches!(
            service("signing-key").verify_token(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn malformed_token_is_rejected() {
        let auth = service("signing-key");
        assert!(matches!(auth.verify_token("not.a.jwt"), Err(AuthError::InvalidToken(_))));
        assert!(matches!(auth.verify_token(""), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn empty_secret_cannot_sign() {
        assert!(matches!(service("").issue_token("admin"), Err(AuthError::Signing(_))));
    }

    #[test]
    fn authenticate_requires_exact_match() {
        let auth = service("signing-key");
        assert!(auth.authenticate("admin", "hunter2"));
        assert!(!auth.authenticate("admin", "Hunter2"));
        assert!(!auth.authenticate("Admin", "hunter2"));
        assert!(!auth.authenticate("", ""));
    }

    #[test]
    fn oversized_lifetime_is_a_signing_error() {
        for hours in [100_000_000_000, u64::MAX] {
            let auth = service_with_expiry("signing-key", hours);
            assert!(matches!(auth.issue_token("admin"), Err(AuthError::Signing(_))));
        }
    }
}
