//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `database`: document store connection settings
//! - `security`: token signing and expiry

mod database;
mod security;
mod server;

use serde::Deserialize;

pub use database::DatabaseConfig;
pub use security::SecurityConfig;
pub use server::ServerConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Document store configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Security configuration
    #[serde(default)]
    pub security: SecurityConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Precedence: defaults, then `config.toml` if present, then
    /// environment variables under the `UNILIST` prefix
    /// (e.g. `UNILIST_SERVER_PORT`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("UNILIST")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
