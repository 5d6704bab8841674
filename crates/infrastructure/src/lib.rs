//! Infrastructure layer - adapters for external systems
//!
//! Implements the storage ports defined in the application layer against
//! MongoDB, and provides configuration loading, password hashing, and
//! bearer-token signing.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::{PasswordHashError, PasswordHasher, TokenClaims, TokenError, TokenSigner};
pub use config::{AppConfig, DatabaseConfig, SecurityConfig, ServerConfig};
pub use persistence::{MongoCommentStore, MongoStore, MongoUniversityStore, MongoUserStore};
