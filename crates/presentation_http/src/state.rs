//! Application state shared across handlers

use std::sync::Arc;

use application::{CommentStore, UniversityStore, UserStore};
use infrastructure::{AppConfig, PasswordHasher, TokenSigner};

/// Shared application state
///
/// Stores and adapters are injected here rather than reached through any
/// process-wide handle; handlers receive a clone per request.
#[derive(Clone)]
pub struct AppState {
    /// University collection store
    pub universities: Arc<dyn UniversityStore>,
    /// Comment collection store
    pub comments: Arc<dyn CommentStore>,
    /// User collection store
    pub users: Arc<dyn UserStore>,
    /// Argon2 password hasher
    pub password_hasher: PasswordHasher,
    /// Bearer-token signer
    pub token_signer: Arc<TokenSigner>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
