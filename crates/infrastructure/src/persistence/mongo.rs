//! Shared MongoDB client handle

use application::error::ApplicationError;
use mongodb::{Client, Collection};
use secrecy::ExposeSecret;
use tracing::info;

use crate::config::DatabaseConfig;

use super::map_store_error;

/// Handle to the logical database holding all collections
///
/// Wraps the driver's internally pooled `Client`; cloning is cheap and
/// every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    database: String,
}

impl MongoStore {
    /// Connect to the document store described by the configuration
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, ApplicationError> {
        let client = Client::with_uri_str(config.uri.expose_secret())
            .await
            .map_err(map_store_error)?;

        info!(database = %config.name, "Connected to document store");

        Ok(Self {
            client,
            database: config.name.clone(),
        })
    }

    /// Get a typed handle to a named collection
    pub(crate) fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.client.database(&self.database).collection(name)
    }
}
