//! Password hashing using Argon2
//!
//! Hashes account passwords with Argon2id before they reach the store;
//! plaintext is never persisted. Verification uses constant-time
//! comparison internally.

use argon2::{
    Argon2, PasswordHash, PasswordHasher as ArgonPasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during password hashing operations
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Failed to hash the password
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),

    /// Stored hash is not a valid PHC string
    #[error("Invalid hash format: {0}")]
    InvalidHashFormat(String),
}

/// Argon2id password hasher with fixed default cost
///
/// Memory: 19 MiB, iterations: 2, parallelism: 1 (the Argon2 defaults).
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new hasher
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash a password, returning a PHC-formatted string
    ///
    /// Each call draws a fresh salt, so equal passwords produce distinct
    /// hashes.
    pub fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        debug!("Hashed password");
        Ok(hash.to_string())
    }

    /// Verify a password against a stored PHC hash
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHashError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| PasswordHashError::InvalidHashFormat(e.to_string()))?;

        let argon2 = Argon2::default();
        Ok(argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_creates_valid_phc_format() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("hunter2").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hash.contains("$v="));
        assert!(hash.contains("$m="));
    }

    #[test]
    fn verify_correct_password_succeeds() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("hunter2").unwrap();

        assert!(hasher.verify("hunter2", &hash).unwrap());
    }

    #[test]
    fn verify_wrong_password_fails() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("hunter2").unwrap();

        assert!(!hasher.verify("hunter3", &hash).unwrap());
    }

    #[test]
    fn verify_invalid_hash_returns_error() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("hunter2", "not-a-phc-string");

        assert!(matches!(
            result,
            Err(PasswordHashError::InvalidHashFormat(_))
        ));
    }

    #[test]
    fn hash_produces_different_hashes_for_same_input() {
        let hasher = PasswordHasher::new();
        let hash1 = hasher.hash("hunter2").unwrap();
        let hash2 = hasher.hash("hunter2").unwrap();

        // Different salts should produce different hashes
        assert_ne!(hash1, hash2);

        // But both should verify
        assert!(hasher.verify("hunter2", &hash1).unwrap());
        assert!(hasher.verify("hunter2", &hash2).unwrap());
    }
}
