//! User account entity

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A registered account
///
/// `password` holds the salted one-way hash, never the plaintext. The email
/// is intended-unique, enforced only by a pre-insert existence check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier, absent before insertion
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Login email
    pub email: String,
    /// PHC-formatted password hash
    pub password: String,
    /// Display name chosen at registration
    pub username: String,
}

impl User {
    /// Create a new unsaved account from an already-hashed password
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            email: email.into(),
            password: password_hash.into(),
            username: username.into(),
        }
    }
}
