//! University entity

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A university record
///
/// Six required fields plus an optional `session`. The store enforces no
/// uniqueness on any single field; the weak duplicate guard matches on all
/// six required fields at once and ignores `session`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    /// Store-assigned identifier, absent before insertion
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Display name
    pub name: String,
    /// City or region
    pub location: String,
    /// Public website URL
    pub website: String,
    /// Image URL
    pub image: String,
    /// Free-form description
    pub description: String,
    /// Ranking score
    pub score: f64,
    /// Academic session, optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
}

impl University {
    /// Create a new unsaved university record
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        website: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
        score: f64,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
            website: website.into(),
            image: image.into(),
            description: description.into(),
            score,
            session: None,
        }
    }

    /// Attach the optional session field
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(session.into());
        self
    }

    /// Whether another record matches on all six required fields
    ///
    /// This is the duplicate guard used before insert and replace; `session`
    /// and the identifier are intentionally ignored.
    pub fn matches(&self, other: &Self) -> bool {
        self.name == other.name
            && self.location == other.location
            && self.website == other.website
            && self.image == other.image
            && self.description == other.description
            && self.score == other.score
    }
}
