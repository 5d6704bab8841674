//! Shared handler helpers

use bson::oid::ObjectId;

use crate::error::ApiError;

/// Interpret a path identifier as the store's native identifier type
///
/// Malformed identifiers get no special handling: they surface the same
/// way any other failed store operation does.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|e| ApiError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_id_parses() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn malformed_id_surfaces_as_internal_error() {
        let result = parse_object_id("not-an-id");
        assert!(matches!(result, Err(ApiError::Internal(_))));
    }
}
