//! User account handlers
//!
//! Listing is open; the current-user, update, and delete routes sit
//! behind the bearer gate. The gate only attaches the raw token, so the
//! current-user handler verifies it here and resolves the identity from
//! the token's subject claim.

use application::ports::{DeleteReport, UpdateReport};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use domain::User;
use serde::Deserialize;
use tracing::debug;

use crate::{error::ApiError, middleware::BearerToken, state::AppState};

use super::common::parse_object_id;

/// Update request body; only the name is ever written
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserPayload {
    #[serde(default)]
    pub name: Option<String>,
}

/// `GET /users`
///
/// Returns the stored documents as-is, password hashes included.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

/// `GET /users/me`
///
/// Verifies the gated token's signature and expiry, then looks the
/// account up by the identifier in the subject claim. An unverifiable
/// token is rejected like a missing header.
pub async fn current_user(
    State(state): State<AppState>,
    Extension(token): Extension<BearerToken>,
) -> Result<Json<Option<User>>, ApiError> {
    let claims = state
        .token_signer
        .verify(&token.0)
        .map_err(|e| {
            debug!(error = %e, "Rejected unverifiable bearer token");
            ApiError::Forbidden
        })?;
    let id = claims.user_id().map_err(|_| ApiError::Forbidden)?;

    let user = state.users.get(id).await?;
    Ok(Json(user))
}

/// `PUT /users/{id}`
///
/// Sets the name field only; an absent field writes a null.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<Json<UpdateReport>, ApiError> {
    let oid = parse_object_id(&id)?;

    let report = state
        .users
        .update_name(oid, payload.name.as_deref())
        .await?;
    Ok(Json(report))
}

/// `DELETE /users/{id}`
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteReport>, ApiError> {
    let oid = parse_object_id(&id)?;
    let report = state.users.delete(oid).await?;
    Ok(Json(report))
}
