//! Document store configuration.

use secrecy::SecretString;
use serde::Deserialize;

/// Document store connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string; may embed credentials, so kept secret
    #[serde(default = "default_uri")]
    pub uri: SecretString,

    /// Logical database holding the collections
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_uri() -> SecretString {
    SecretString::from("mongodb://localhost:27017")
}

fn default_name() -> String {
    "universities".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            name: default_name(),
        }
    }
}
