//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field is missing or empty
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Record not found
    #[error("{entity_type} could not be found with id: {id}")]
    NotFound { entity_type: String, id: String },
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_creates_correct_error() {
        let err = DomainError::not_found("University", "62a1");
        match err {
            DomainError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "University");
                assert_eq!(id, "62a1");
            },
            DomainError::ValidationError(_) => unreachable!("Expected NotFound error"),
        }
    }

    #[test]
    fn not_found_error_message_includes_id() {
        let err = DomainError::not_found("University", "62a1");
        assert_eq!(
            err.to_string(),
            "University could not be found with id: 62a1"
        );
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("name is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: name is required");
    }
}
