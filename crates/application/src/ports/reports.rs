//! Driver-agnostic write outcomes
//!
//! Mutating operations answer with one of these reports, which are
//! serialized verbatim into HTTP responses for replace/delete/register.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Outcome of an insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertReport {
    /// Identifier the store assigned to the new document
    pub inserted_id: ObjectId,
}

/// Outcome of an update-by-id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateReport {
    /// Documents matching the filter
    pub matched_count: u64,
    /// Documents actually modified
    pub modified_count: u64,
}

/// Outcome of a delete-by-id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteReport {
    /// Documents removed (0 when the id matched nothing)
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_report_serializes_inserted_id() {
        let report = InsertReport {
            inserted_id: ObjectId::new(),
        };
        let json = serde_json::to_value(report).unwrap();
        assert!(json.get("inserted_id").is_some());
    }

    #[test]
    fn update_report_serializes_counts() {
        let report = UpdateReport {
            matched_count: 1,
            modified_count: 1,
        };
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["matched_count"], 1);
        assert_eq!(json["modified_count"], 1);
    }

    #[test]
    fn delete_report_serializes_count() {
        let report = DeleteReport { deleted_count: 0 };
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["deleted_count"], 0);
    }
}
