//! Security configuration: token signing and expiry.

use secrecy::SecretString;
use serde::Deserialize;

/// Security configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Secret used to sign bearer tokens
    ///
    /// Required; there is deliberately no built-in fallback. The server
    /// refuses to start without it.
    #[serde(default)]
    pub token_secret: Option<SecretString>,

    /// Token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

const fn default_token_ttl() -> u64 {
    3600
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            token_secret: None,
            token_ttl_secs: default_token_ttl(),
        }
    }
}
