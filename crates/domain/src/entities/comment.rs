//! Comment entity

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A visitor comment
///
/// Comments carry no duplicate guard; identical records may coexist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Store-assigned identifier, absent before insertion
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Author display name
    pub name: String,
    /// Comment body
    pub comment: String,
    /// Submission date, kept as the client-supplied string
    pub date: String,
}

impl Comment {
    /// Create a new unsaved comment
    pub fn new(
        name: impl Into<String>,
        comment: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            comment: comment.into(),
            date: date.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_omits_missing_id() {
        let comment = Comment::new("Alice", "Great campus", "2022-06-01");
        let json = serde_json::to_value(comment).unwrap();
        assert!(json.get("_id").is_none());
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["comment"], "Great campus");
        assert_eq!(json["date"], "2022-06-01");
    }

    #[test]
    fn round_trips_through_json() {
        let mut comment = Comment::new("Bob", "Too crowded", "2022-06-02");
        comment.id = Some(ObjectId::new());
        let json = serde_json::to_string(&comment).unwrap();
        let back: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(comment, back);
    }
}
