//! HTTP middleware components

pub mod auth;

pub use auth::{BearerAuth, BearerAuthLayer, BearerToken};
