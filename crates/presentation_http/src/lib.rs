//! HTTP presentation layer
//!
//! Translates each request into exactly one storage operation and one
//! response; the bearer gate guards the identity-scoped routes.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{BearerAuthLayer, BearerToken};
pub use routes::create_router;
pub use state::AppState;
