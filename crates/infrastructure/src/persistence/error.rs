//! Shared error mapping for the MongoDB persistence layer

use application::error::ApplicationError;
use tracing::error;

/// Map a driver error to an application-layer error
///
/// The full error is logged here; clients only ever see the generic
/// storage failure surface.
pub(crate) fn map_store_error(e: mongodb::error::Error) -> ApplicationError {
    error!(error = %e, "Document store operation failed");
    ApplicationError::Storage(e.to_string())
}
