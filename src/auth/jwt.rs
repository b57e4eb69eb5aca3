//! JWT issue and validation. Tokens are stateless: subject email plus expiry.

use crate::error::{AppError, AppResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // subject email
    pub exp: i64,
    pub iat: i64,
}

/// Signing secret and token lifetime, fixed at process start.
#[derive(Clone)]
pub struct JwtSecret {
    secret: String,
    ttl: Duration,
}

impl JwtSecret {
    pub fn new(secret: String, ttl_minutes: i64) -> Self {
        Self {
            secret,
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    /// Issue a signed token for the given subject email.
    pub fn issue(&self, email: &str) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("jwt sign: {}", e)))?;
        Ok(token)
    }

    /// Validate signature and expiry, returning the subject email. Any
    /// failure — malformed token, bad signature, expired — is `InvalidToken`.
    pub fn validate(&self, token: &str) -> AppResult<String> {
        let mut validation = Validation::default();
        validation.validate_exp = true;
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;
        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> JwtSecret {
        JwtSecret::new("test-jwt-secret-min-32-chars!!".to_string(), 30)
    }

    #[test]
    fn issue_and_validate_round_trip() {
        let jwt = secret();
        let token = jwt.issue("player@example.com").unwrap();
        let subject = jwt.validate(&token).unwrap();
        assert_eq!(subject, "player@example.com");
    }

    #[test]
    fn validate_rejects_malformed_token() {
        let jwt = secret();
        assert!(matches!(
            jwt.validate("not-a-jwt"),
            Err(AppError::InvalidToken)
        ));
        assert!(matches!(jwt.validate(""), Err(AppError::InvalidToken)));
    }

    #[test]
    fn validate_rejects_wrong_secret() {
        let token = secret().issue("player@example.com").unwrap();
        let other = JwtSecret::new("another-secret-entirely-32-chars".to_string(), 30);
        assert!(matches!(
            other.validate(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn validate_rejects_expired_token() {
        // Negative TTL puts exp well past the validation leeway.
        let jwt = JwtSecret::new("test-jwt-secret-min-32-chars!!".to_string(), -5);
        let token = jwt.issue("player@example.com").unwrap();
        assert!(matches!(
            jwt.validate(&token),
            Err(AppError::InvalidToken)
        ));
    }
}
