//! Registration and login handlers

use application::ports::InsertReport;
use axum::{Json, extract::State};
use domain::User;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{error::ApiError, state::AppState};

const MISSING_REGISTER_FIELDS: &str = "Please provide an email, password and username";
const MISSING_LOGIN_FIELDS: &str = "Please provide an email and password";
const USER_EXISTS: &str = "User already exists";
const USER_MISSING: &str = "User does not exist";
const INVALID_PASSWORD: &str = "Invalid password";

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Successful login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Signed bearer token, valid for the configured lifetime
    pub token: String,
    /// Email of the authenticated account
    pub email: String,
}

/// `POST /register`
///
/// The pre-insert email lookup stands in for a unique index; the
/// password is hashed before it ever reaches the store.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<Json<InsertReport>, ApiError> {
    let missing = || ApiError::BadRequest(MISSING_REGISTER_FIELDS.to_string());
    let email = payload.email.filter(|v| !v.is_empty()).ok_or_else(missing)?;
    let password = payload
        .password
        .filter(|v| !v.is_empty())
        .ok_or_else(missing)?;
    let username = payload
        .username
        .filter(|v| !v.is_empty())
        .ok_or_else(missing)?;

    if state.users.find_by_email(&email).await?.is_some() {
        return Err(ApiError::BadRequest(USER_EXISTS.to_string()));
    }

    let hash = state
        .password_hasher
        .hash(&password)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let user = User::new(email, hash, username);
    let report = state.users.insert(&user).await?;

    info!(id = %report.inserted_id, "Registered user");
    Ok(Json(report))
}

/// `POST /login`
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<LoginResponse>, ApiError> {
    let missing = || ApiError::BadRequest(MISSING_LOGIN_FIELDS.to_string());
    let email = payload.email.filter(|v| !v.is_empty()).ok_or_else(missing)?;
    let password = payload
        .password
        .filter(|v| !v.is_empty())
        .ok_or_else(missing)?;

    let Some(user) = state.users.find_by_email(&email).await? else {
        return Err(ApiError::BadRequest(USER_MISSING.to_string()));
    };

    // A stored value that is not a valid hash simply fails to match.
    let valid = state
        .password_hasher
        .verify(&password, &user.password)
        .unwrap_or(false);
    if !valid {
        debug!(email = %user.email, "Login rejected: password mismatch");
        return Err(ApiError::BadRequest(INVALID_PASSWORD.to_string()));
    }

    let id = user
        .id
        .ok_or_else(|| ApiError::Internal("stored user has no identifier".to_string()))?;
    let token = state
        .token_signer
        .issue(id)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    info!(id = %id, "Issued bearer token");
    Ok(Json(LoginResponse {
        token,
        email: user.email,
    }))
}
