//! Bearer-token signing and verification
//!
//! Issues HS256 tokens bound to a user identifier, expiring a fixed
//! interval after issuance. The signing secret comes from configuration;
//! there is no built-in fallback.

use std::fmt;

use application::error::ApplicationError;
use bson::oid::ObjectId;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SecurityConfig;

/// Errors that can occur while issuing or verifying tokens
#[derive(Debug, Error)]
pub enum TokenError {
    /// Failed to sign a new token
    #[error("Failed to sign token: {0}")]
    Signing(String),

    /// Token failed signature or expiry validation
    #[error("Invalid token: {0}")]
    Invalid(String),
}

/// Claims carried by an issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User identifier the token is bound to, as an ObjectId hex string
    pub sub: String,
    /// Issued-at, seconds since the epoch
    pub iat: i64,
    /// Expiry, seconds since the epoch
    pub exp: i64,
}

impl TokenClaims {
    /// Parse the subject claim back into a store identifier
    pub fn user_id(&self) -> Result<ObjectId, TokenError> {
        ObjectId::parse_str(&self.sub).map_err(|e| TokenError::Invalid(e.to_string()))
    }
}

/// HS256 token signer with a fixed lifetime
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenSigner {
    /// Create a signer from the security configuration
    ///
    /// Fails when no token secret is configured; startup is expected to
    /// surface this instead of running without signed tokens.
    pub fn from_config(config: &SecurityConfig) -> Result<Self, ApplicationError> {
        let secret = config.token_secret.as_ref().ok_or_else(|| {
            ApplicationError::Configuration(
                "security.token_secret is required and has no default".to_string(),
            )
        })?;

        Ok(Self::new(
            secret.expose_secret(),
            config.token_ttl_secs,
        ))
    }

    /// Create a signer from a raw secret and lifetime
    #[must_use]
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(3600),
        }
    }

    /// Issue a token bound to the given user identifier
    pub fn issue(&self, user_id: ObjectId) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: user_id.to_hex(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token's signature and expiry, returning its claims
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<TokenClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> TokenSigner {
        TokenSigner::new("a-test-secret", 3600)
    }

    #[test]
    fn issued_token_verifies_and_carries_the_user_id() {
        let id = ObjectId::new();
        let token = signer().issue(id).unwrap();

        let claims = signer().verify(&token).unwrap();
        assert_eq!(claims.sub, id.to_hex());
        assert_eq!(claims.user_id().unwrap(), id);
    }

    #[test]
    fn token_expires_exactly_one_hour_after_issuance() {
        let token = signer().issue(ObjectId::new()).unwrap();
        let claims = signer().verify(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn garbage_token_is_rejected() {
        let result = signer().verify("not-a-token");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = TokenSigner::new("some-other-secret", 3600);
        let token = other.issue(ObjectId::new()).unwrap();

        let result = signer().verify(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Issue with a lifetime already in the past (beyond default leeway)
        let short = TokenSigner::new("a-test-secret", 0);
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: ObjectId::new().to_hex(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"a-test-secret"),
        )
        .unwrap();

        assert!(matches!(short.verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn from_config_requires_a_secret() {
        let config = SecurityConfig::default();
        let result = TokenSigner::from_config(&config);
        assert!(matches!(
            result,
            Err(ApplicationError::Configuration(_))
        ));
    }

    #[test]
    fn from_config_uses_the_configured_secret() {
        let config = SecurityConfig {
            token_secret: Some(secrecy::SecretString::from("a-test-secret")),
            token_ttl_secs: 3600,
        };
        let from_config = TokenSigner::from_config(&config).unwrap();

        let token = from_config.issue(ObjectId::new()).unwrap();
        assert!(signer().verify(&token).is_ok());
    }

    #[test]
    fn malformed_subject_claim_fails_user_id_parse() {
        let claims = TokenClaims {
            sub: "not-an-object-id".to_string(),
            iat: 0,
            exp: 0,
        };
        assert!(matches!(claims.user_id(), Err(TokenError::Invalid(_))));
    }
}
