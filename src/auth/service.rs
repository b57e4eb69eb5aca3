//! Credential hashing: one-way hash and verify for passwords.

use crate::error::{AppError, AppResult};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

pub struct AuthAppService;

impl AuthAppService {
    /// Hash a password with a fresh random salt. The output is a PHC string
    /// safe to store alongside the user.
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("hash: {}", e)))?
            .to_string();
        Ok(hash)
    }

    /// Verify a password against a stored hash. A normal mismatch is
    /// `Ok(false)`; only an unparseable stored hash is an error.
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("parse hash: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
