//! API error handling
//!
//! Maps the error taxonomy onto HTTP: missing fields and duplicates are
//! client errors, a missing bearer header is forbidden, a single-record
//! miss is not-found, and any storage failure surfaces as a generic 500
//! whose body carries the error's string form under `value`.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
///
/// `value` is only populated for internal errors, matching the
/// `{error, value}` contract for storage failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
    /// Underlying error detail, present on internal errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message,
                    value: None,
                },
            ),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                ErrorBody {
                    error: "Forbidden".to_string(),
                    value: None,
                },
            ),
            Self::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: message,
                    value: None,
                },
            ),
            Self::Internal(detail) => {
                error!(error = %detail, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "An error has occurred".to_string(),
                        value: Some(detail),
                    },
                )
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(DomainError::NotFound { .. }) => {
                Self::NotFound(err.to_string())
            },
            ApplicationError::Domain(DomainError::ValidationError(msg)) => Self::BadRequest(msg),
            ApplicationError::Storage(msg)
            | ApplicationError::Configuration(msg)
            | ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let response = ApiError::BadRequest("Please provide an id".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn forbidden_maps_to_403() {
        let response = ApiError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response =
            ApiError::NotFound("University could not be found with id: 62a1".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_maps_to_500() {
        let response = ApiError::Internal("connection reset".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_body_omits_value_when_absent() {
        let body = ErrorBody {
            error: "Please provide an id".to_string(),
            value: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("error"));
        assert!(!json.contains("value"));
    }

    #[test]
    fn error_body_carries_value_for_internal_errors() {
        let body = ErrorBody {
            error: "An error has occurred".to_string(),
            value: Some("connection reset".to_string()),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("value"));
        assert!(json.contains("connection reset"));
    }

    #[test]
    fn storage_error_converts_to_internal() {
        let err: ApiError = ApplicationError::Storage("boom".to_string()).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn domain_not_found_converts_to_not_found() {
        let err: ApiError = ApplicationError::Domain(DomainError::not_found("University", "62a1"))
            .into();
        let ApiError::NotFound(msg) = err else {
            unreachable!("Expected NotFound");
        };
        assert!(msg.contains("62a1"));
    }

    #[test]
    fn domain_validation_converts_to_bad_request() {
        let err: ApiError =
            ApplicationError::Domain(DomainError::ValidationError("name is required".to_string()))
                .into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
